//! Forecourt Snapshot Store
//!
//! Turso-backed persistence for daily fuel-price snapshots.
//!
//! | Table | Contains |
//! |-------|----------|
//! | `fuel_prices` | One row per station per snapshot day |
//! | `fuel_prices_metadata` | Singleton last-updated timestamp |
//! | `fetch_log` | Per-source daily fetch markers |
//!
//! # Usage
//!
//! ```ignore
//! use forecourt_store::PriceStore;
//!
//! // File-based (production)
//! let store = PriceStore::open("data/forecourt.db").await?;
//!
//! // In-memory (testing)
//! let store = PriceStore::open_memory().await?;
//!
//! store.prices().append_rows(&rows).await?;
//! let snapshot = store.prices().load_snapshot("2024-01-01").await?;
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod repos;


// Re-exports
pub use db::PriceStore;
pub use error::{Result, StoreError};
pub use models::{FuelPriceRow, NewFuelPriceRow};
pub use repos::{MetadataRepo, PriceRepo};

impl PriceStore {
    /// Get the fuel price repository
    pub fn prices(&self) -> PriceRepo<'_> {
        PriceRepo::new(self.db())
    }

    /// Get the metadata repository
    pub fn metadata(&self) -> MetadataRepo<'_> {
        MetadataRepo::new(self.db())
    }
}
