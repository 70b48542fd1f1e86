//! Fuel price row repository
//!
//! Bulk append and date-scoped reads over `fuel_prices`, plus the per-source
//! fetch markers in `fetch_log`. Snapshot rows are append-only: no upsert, no
//! conflict handling, no updates, no deletes.

use turso::Database;

use crate::error::Result;
use crate::models::{FuelPriceRow, NewFuelPriceRow};

/// Fuel price repository
pub struct PriceRepo<'a> {
    db: &'a Database,
}

impl<'a> PriceRepo<'a> {
    /// Create a new price repository
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Whether the given source already contributed rows on the given date
    ///
    /// Scoped per source, not per date alone: a source is only skipped when
    /// it was itself marked fetched today.
    pub async fn has_fetched_today(&self, source: &str, date: &str) -> Result<bool> {
        let conn = self.db.connect()?;

        let mut rows = conn
            .query(
                "SELECT 1 FROM fetch_log WHERE source = ?1 AND date = ?2",
                [source, date],
            )
            .await?;

        Ok(rows.next().await?.is_some())
    }

    /// Record that a source contributed rows on a date
    pub async fn mark_fetched(&self, source: &str, date: &str) -> Result<()> {
        let conn = self.db.connect()?;

        conn.execute(
            "INSERT OR IGNORE INTO fetch_log (source, date) VALUES (?1, ?2)",
            [source, date],
        )
        .await?;

        Ok(())
    }

    /// Bulk append a batch of rows
    ///
    /// Duplicate postcode/date/brand combinations are permitted by the
    /// schema; the store does not deduplicate.
    pub async fn append_rows(&self, rows: &[NewFuelPriceRow]) -> Result<()> {
        let conn = self.db.connect()?;

        for row in rows {
            conn.execute(
                r#"
                INSERT INTO fuel_prices (site_id, brand, address, postcode, location, prices, date)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                [
                    row.site_id.as_str(),
                    row.brand.as_str(),
                    row.address.as_str(),
                    row.postcode.as_str(),
                    row.location.as_str(),
                    row.prices.as_str(),
                    row.date.as_str(),
                ],
            )
            .await?;
        }

        Ok(())
    }

    /// All rows for the given snapshot date
    pub async fn load_snapshot(&self, date: &str) -> Result<Vec<FuelPriceRow>> {
        let conn = self.db.connect()?;

        let mut rows = conn
            .query(
                r#"
                SELECT site_id, brand, address, postcode, location, prices, date
                FROM fuel_prices WHERE date = ?1
                "#,
                [date],
            )
            .await?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(Self::row_to_record(&row)?);
        }

        Ok(out)
    }

    fn row_to_record(row: &turso::Row) -> Result<FuelPriceRow> {
        let site_id = row.get_value(0)?.as_text().unwrap_or(&String::new()).clone();
        let brand = row.get_value(1)?.as_text().unwrap_or(&String::new()).clone();
        let address = row.get_value(2)?.as_text().unwrap_or(&String::new()).clone();
        let postcode = row.get_value(3)?.as_text().unwrap_or(&String::new()).clone();
        let location = row.get_value(4)?.as_text().unwrap_or(&String::new()).clone();
        let prices = row.get_value(5)?.as_text().unwrap_or(&String::new()).clone();
        let date = row.get_value(6)?.as_text().unwrap_or(&String::new()).clone();

        Ok(FuelPriceRow {
            site_id,
            brand,
            address,
            postcode,
            location,
            prices,
            date,
        })
    }
}
