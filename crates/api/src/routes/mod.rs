//! API routes

pub mod ops;
pub mod prices;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Operations routes (health)
        .merge(ops::routes())
        // Price query routes
        .nest("/api", prices::routes())
        .with_state(state)
}
