//! Aggregation metadata repository
//!
//! The `fuel_prices_metadata` table holds a single row recording when the
//! last successful aggregation run finished. It is replaced wholesale
//! (delete-all, insert-one) so it can never grow past one row.

use turso::Database;

use crate::error::Result;

/// Metadata repository
pub struct MetadataRepo<'a> {
    db: &'a Database,
}

impl<'a> MetadataRepo<'a> {
    /// Create a new metadata repository
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Replace the metadata row with a new last-updated timestamp
    pub async fn replace(&self, timestamp: &str) -> Result<()> {
        let conn = self.db.connect()?;

        conn.execute("DELETE FROM fuel_prices_metadata", ()).await?;
        conn.execute(
            "INSERT INTO fuel_prices_metadata (id, last_updated) VALUES (1, ?1)",
            [timestamp],
        )
        .await?;

        Ok(())
    }

    /// The last successful aggregation timestamp, if any run has completed
    pub async fn get(&self) -> Result<Option<String>> {
        let conn = self.db.connect()?;

        let mut rows = conn
            .query("SELECT last_updated FROM fuel_prices_metadata", ())
            .await?;

        if let Some(row) = rows.next().await? {
            let ts = row.get_value(0)?.as_text().cloned();
            Ok(ts)
        } else {
            Ok(None)
        }
    }
}
