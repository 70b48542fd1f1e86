//! Application state
//!
//! Shared state for API handlers. The snapshot store is the only shared
//! resource; the aggregation task and the handlers both reach it through
//! their own `Arc`.

use std::sync::Arc;

use forecourt_store::PriceStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Snapshot store
    pub store: Arc<PriceStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<PriceStore>) -> Self {
        Self { store }
    }
}
