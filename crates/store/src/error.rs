//! Store error types

use thiserror::Error;

/// Snapshot store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error
    #[error("database error: {0}")]
    Database(#[from] turso::Error),

    /// JSON serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
