//! Record normalization
//!
//! Converts raw per-source station mappings into rows the store can append.
//! The nested `location` and `prices` structures vary between retailers;
//! they are serialized to JSON text verbatim rather than unified, and every
//! row is stamped with the run's calendar date.

use chrono::NaiveDate;
use serde_json::Value;

use forecourt_store::NewFuelPriceRow;

use crate::RawStation;

/// Normalize a source's raw records into storable rows
///
/// Fields a source does not provide become empty-string placeholders,
/// uniformly for every row in the batch.
pub fn normalize(records: Vec<RawStation>, today: NaiveDate) -> Vec<NewFuelPriceRow> {
    let date = today.format("%Y-%m-%d").to_string();

    records
        .into_iter()
        .map(|record| normalize_record(record, &date))
        .collect()
}

fn normalize_record(mut record: RawStation, date: &str) -> NewFuelPriceRow {
    let location = blob_field(record.remove("location"));
    let prices = blob_field(record.remove("prices"));

    NewFuelPriceRow {
        site_id: scalar_field(&record, "site_id"),
        brand: scalar_field(&record, "brand"),
        address: scalar_field(&record, "address"),
        postcode: scalar_field(&record, "postcode"),
        location,
        prices,
        date: date.to_string(),
    }
}

/// A scalar column value: strings as-is, other scalars as their JSON text
fn scalar_field(record: &RawStation, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// A JSON blob column: the nested value re-encoded verbatim
fn blob_field(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawStation {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_rows_are_date_stamped() {
        let records = vec![
            raw(json!({"site_id": "a", "prices": {"E10": 1.45}})),
            raw(json!({"site_id": "b", "prices": {"E10": 1.47}})),
        ];

        let rows = normalize(records, date());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.date == "2024-01-01"));
    }

    #[test]
    fn test_blobs_round_trip() {
        let location = json!({"latitude": 51.5007, "longitude": -0.1246});
        let prices = json!({"E10": 1.45, "E5": 1.55, "B7": 1.50});
        let records = vec![raw(json!({
            "site_id": "t1",
            "brand": "Tesco",
            "address": "1 High St",
            "postcode": "SW1A1AA",
            "location": location,
            "prices": prices,
        }))];

        let rows = normalize(records, date());
        let row = &rows[0];

        // Decoding the stored text gives back the original structures
        let loc_back: Value = serde_json::from_str(&row.location).unwrap();
        let prices_back: Value = serde_json::from_str(&row.prices).unwrap();
        assert_eq!(loc_back, location);
        assert_eq!(prices_back, prices);

        assert_eq!(row.brand, "Tesco");
        assert_eq!(row.postcode, "SW1A1AA");
    }

    #[test]
    fn test_source_specific_location_shapes_survive() {
        // Some retailers publish strings, some objects with extra keys
        let records = vec![
            raw(json!({"site_id": "a", "location": {"lat": "51.5", "lng": "-0.1", "region": "LDN"}})),
            raw(json!({"site_id": "b", "location": "51.5,-0.1"})),
        ];

        let rows = normalize(records, date());
        assert_eq!(
            serde_json::from_str::<Value>(&rows[0].location).unwrap()["region"],
            json!("LDN")
        );
        assert_eq!(rows[1].location, "\"51.5,-0.1\"");
    }

    #[test]
    fn test_missing_fields_become_placeholders() {
        let records = vec![raw(json!({"site_id": "a"}))];

        let rows = normalize(records, date());
        let row = &rows[0];
        assert_eq!(row.brand, "");
        assert_eq!(row.address, "");
        assert_eq!(row.postcode, "");
        assert_eq!(row.location, "");
        assert_eq!(row.prices, "");
    }

    #[test]
    fn test_numeric_site_id_coerced_to_text() {
        let records = vec![raw(json!({"site_id": 1234}))];

        let rows = normalize(records, date());
        assert_eq!(rows[0].site_id, "1234");
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(Vec::new(), date()).is_empty());
    }
}
