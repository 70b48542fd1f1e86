//! Pipeline error types

use thiserror::Error;

/// Errors that can abort an aggregation run
///
/// Per-source fetch and parse failures never surface here - they are
/// absorbed at the feed boundary. What remains is the shared store.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Snapshot store failure
    #[error("store error: {0}")]
    Store(#[from] forecourt_store::StoreError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
