//! Forecourt - Feeds
//!
//! Pulls the retailer fuel-price feeds and normalizes their records into
//! storable rows.
//!
//! # Design
//!
//! - **Variant-tolerant ingestion**: raw records are string-keyed JSON
//!   mappings ([`RawStation`]); sources disagree about nearly everything
//!   except the handful of keys we read.
//! - **Failure isolation**: one source failing - network, content type,
//!   parse, shape - is logged and contributes nothing; it can never abort
//!   another source's fetch.
//! - **Trait seam**: the orchestrator consumes [`StationFeed`], so tests can
//!   drive it with a canned feed instead of the network.
//!
//! # Example
//!
//! ```ignore
//! use forecourt_feeds::{FeedClient, StationFeed, normalize};
//!
//! let client = FeedClient::new()?;
//! let raw = client.fetch_stations("https://example.test/fuel.json").await;
//! let rows = normalize(raw, chrono::Local::now().date_naive());
//! ```

mod client;
mod error;
mod normalize;

// Re-exports
pub use client::FeedClient;
pub use error::{FeedError, Result};
pub use normalize::normalize;

/// A raw station record as published by a source
///
/// An arbitrary string-keyed mapping; `site_id`, `brand`, `address`,
/// `postcode`, `location` and `prices` are the keys the pipeline cares
/// about, with source-specific shapes underneath `location` and `prices`.
pub type RawStation = serde_json::Map<String, serde_json::Value>;

/// Trait for station feed fetchers
///
/// The aggregation pipeline pulls each configured URL through this seam.
/// An implementation never fails outward: whatever goes wrong it returns an
/// empty contribution after logging the cause.
pub trait StationFeed: Send + Sync {
    /// Fetch a feed's raw station records
    fn fetch_stations(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Vec<RawStation>> + Send;
}
