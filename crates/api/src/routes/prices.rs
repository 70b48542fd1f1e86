//! Fuel price query route
//!
//! The read side of the system: loads today's snapshot, applies the postcode
//! and fuel-type filters, and returns a flat JSON array.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

/// Query string parameters for `GET /api/prices`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PricesQuery {
    /// Case-insensitive postcode substring; empty matches everything
    pub postcode: String,
    /// JSON-encoded [`FuelTypeFilters`] object
    pub filters: Option<String>,
}

/// Fuel-type inclusion flags
///
/// Every flag defaults to true, so an empty filter object (or none at all)
/// includes all three grades. Parsing is strict: unknown keys or non-boolean
/// values are rejected rather than ignored.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FuelTypeFilters {
    pub unleaded: bool,
    #[serde(rename = "superUnleaded")]
    pub super_unleaded: bool,
    pub diesel: bool,
}

impl Default for FuelTypeFilters {
    fn default() -> Self {
        Self {
            unleaded: true,
            super_unleaded: true,
            diesel: true,
        }
    }
}

fn parse_filters(raw: Option<&str>) -> Result<FuelTypeFilters, ApiError> {
    match raw {
        None => Ok(FuelTypeFilters::default()),
        Some(s) => serde_json::from_str(s).map_err(|e| ApiError::InvalidFilter(e.to_string())),
    }
}

// =============================================================================
// Response types
// =============================================================================

/// One station's prices, grade codes mapped to their public names
///
/// A field is null when the source did not publish that grade or the client
/// filtered it out.
#[derive(Debug, Serialize)]
pub struct StationPrices {
    pub brand: String,
    pub address: String,
    pub postcode: String,
    pub unleaded: Option<Value>,
    #[serde(rename = "superUnleaded")]
    pub super_unleaded: Option<Value>,
    pub diesel: Option<Value>,
}

// =============================================================================
// Routes
// =============================================================================

/// Price query routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/prices", get(get_prices))
}

// =============================================================================
// Handlers
// =============================================================================

/// Query today's snapshot
///
/// GET /api/prices?postcode=<string>&filters=<JSON object>
///
/// Zero matches is an empty array, never an error.
async fn get_prices(
    State(state): State<AppState>,
    Query(params): Query<PricesQuery>,
) -> Result<Json<Vec<StationPrices>>, ApiError> {
    let filters = parse_filters(params.filters.as_deref())?;

    // The snapshot day is the server's calendar date, not client-supplied
    let date = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let rows = state.store.prices().load_snapshot(&date).await?;

    let needle = params.postcode.to_lowercase();

    let mut stations = Vec::with_capacity(rows.len());
    for row in rows {
        if !needle.is_empty() && !row.postcode.to_lowercase().contains(&needle) {
            continue;
        }

        // A blob that no longer decodes is stored-data corruption, not a
        // client error: skip the row, keep the response.
        let prices: serde_json::Map<String, Value> = match serde_json::from_str(&row.prices) {
            Ok(prices) => prices,
            Err(e) => {
                warn!(site_id = %row.site_id, error = %e, "undecodable prices blob, skipping row");
                continue;
            }
        };

        let grade =
            |code: &str, enabled: bool| -> Option<Value> { prices.get(code).cloned().filter(|_| enabled) };

        stations.push(StationPrices {
            unleaded: grade("E10", filters.unleaded),
            super_unleaded: grade("E5", filters.super_unleaded),
            diesel: grade("B7", filters.diesel),
            brand: row.brand,
            address: row.address,
            postcode: row.postcode,
        });
    }

    Ok(Json(stations))
}
