//! Stored record shapes
//!
//! The `location` and `prices` columns hold JSON text blobs whose internal
//! structure is opaque to the store. Each source's nested shape survives
//! verbatim inside the encoded text.

/// A station row as persisted in `fuel_prices`
///
/// One row per station per snapshot day. The surrogate primary key stays
/// inside the store; nothing downstream needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelPriceRow {
    /// Source-assigned station identifier
    pub site_id: String,
    /// Retailer brand
    pub brand: String,
    /// Street address
    pub address: String,
    /// Station postcode
    pub postcode: String,
    /// JSON blob, source-specific shape
    pub location: String,
    /// JSON blob, fuel-grade code to price
    pub prices: String,
    /// ISO calendar date of the snapshot day
    pub date: String,
}

/// A row about to be appended, before the store assigns its key
///
/// Fields the source did not provide carry empty-string placeholders,
/// uniformly across a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFuelPriceRow {
    pub site_id: String,
    pub brand: String,
    pub address: String,
    pub postcode: String,
    pub location: String,
    pub prices: String,
    pub date: String,
}
