//! Error types for feed fetching

use thiserror::Error;

/// Errors that can occur while pulling a retailer feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Failed to construct the HTTP client
    #[error("failed to build feed client: {0}")]
    Init(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response carried a content type we do not ingest
    #[error("unexpected content type '{content_type}'")]
    UnexpectedContentType {
        /// The Content-Type header value (empty if absent)
        content_type: String,
    },

    /// Body parsed as JSON but was not a station list
    #[error("unexpected feed shape: {0}")]
    UnexpectedShape(String),
}

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;
