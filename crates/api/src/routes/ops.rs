//! Operations routes
//!
//! Health check endpoint for monitoring. Reports when the last successful
//! aggregation run finished, straight from the metadata table.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Server status
    pub status: &'static str,
    /// Timestamp of the last successful aggregation run (absent before the
    /// first run completes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Operations routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

/// Health check
///
/// GET /health
async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let last_updated = state.store.metadata().get().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        last_updated,
    }))
}
