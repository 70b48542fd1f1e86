//! Database connection and schema management
//!
//! Uses Turso (async SQLite-compatible) for the snapshot database. Three
//! tables: the per-station daily rows, the singleton last-updated metadata
//! row, and the per-source fetch markers that make the daily "already
//! fetched" check source-scoped.

use tracing::info;
use turso::{Builder, Database};

use crate::error::Result;

/// Snapshot store
///
/// Owns the database handle. Repositories borrow it per operation; the
/// handle itself is cheap to share (internally Arc).
pub struct PriceStore {
    db: Database,
}

impl PriceStore {
    /// Open a file-based store and create the schema if absent
    pub async fn open(path: &str) -> Result<Self> {
        info!(path = %path, "Opening snapshot database");
        let db = Builder::new_local(path).build().await?;

        let store = Self { db };
        store.init_schema().await?;

        Ok(store)
    }

    /// Open an in-memory store (for testing)
    pub async fn open_memory() -> Result<Self> {
        let db = Builder::new_local(":memory:").build().await?;

        let store = Self { db };
        store.init_schema().await?;

        Ok(store)
    }

    /// Get the underlying database
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Initialize the schema idempotently
    async fn init_schema(&self) -> Result<()> {
        let conn = self.db.connect()?;

        conn.execute(SCHEMA_FUEL_PRICES, ()).await?;
        conn.execute(SCHEMA_METADATA, ()).await?;
        conn.execute(SCHEMA_FETCH_LOG, ()).await?;
        conn.execute(INDEX_FUEL_PRICES_DATE, ()).await?;

        info!("Snapshot database schema initialized");
        Ok(())
    }
}

// =============================================================================
// Schema
// =============================================================================

const SCHEMA_FUEL_PRICES: &str = r#"
CREATE TABLE IF NOT EXISTS fuel_prices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    site_id TEXT,
    brand TEXT,
    address TEXT,
    postcode TEXT,
    location TEXT,
    prices TEXT,
    date TEXT
)
"#;

const SCHEMA_METADATA: &str = r#"
CREATE TABLE IF NOT EXISTS fuel_prices_metadata (
    id INTEGER PRIMARY KEY,
    last_updated TEXT
)
"#;

const SCHEMA_FETCH_LOG: &str = r#"
CREATE TABLE IF NOT EXISTS fetch_log (
    source TEXT NOT NULL,
    date TEXT NOT NULL,
    PRIMARY KEY (source, date)
)
"#;

const INDEX_FUEL_PRICES_DATE: &str =
    "CREATE INDEX IF NOT EXISTS idx_fuel_prices_date ON fuel_prices(date)";
