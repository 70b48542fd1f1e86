//! Database configuration
//!
//! The store path normally arrives via the `DATABASE_URL` environment
//! variable; the `[database]` section exists so tests and local setups can
//! pin it in the file instead. The environment wins when both are set.

use serde::Deserialize;

/// Database configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the database file (or ":memory:")
    /// Default: none - DATABASE_URL must be set
    pub url: Option<String>,
}
