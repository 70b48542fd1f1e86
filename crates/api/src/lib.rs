//! Forecourt API
//!
//! HTTP read API over the daily fuel-price snapshot.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use forecourt_api::{AppState, build_router};
//! use forecourt_store::PriceStore;
//!
//! let store = Arc::new(PriceStore::open("data/forecourt.db").await?);
//! let app = build_router(AppState::new(store));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! # Endpoints
//!
//! - `GET /api/prices?postcode=<string>&filters=<JSON object>` - today's
//!   stations, filtered by postcode substring and fuel type
//! - `GET /health` - liveness plus the last successful aggregation time

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, Result};
pub use routes::build_router;
pub use state::AppState;
