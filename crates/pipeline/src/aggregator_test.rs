//! Tests for the aggregation orchestrator
//!
//! Drive the aggregator with a canned feed over an in-memory store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use forecourt_feeds::{RawStation, StationFeed};
use forecourt_store::PriceStore;

use crate::Aggregator;

/// Canned feed: URL to raw station records, counting fetches per URL
struct StubFeed {
    responses: HashMap<String, Vec<RawStation>>,
    fetch_counts: Mutex<HashMap<String, usize>>,
}

impl StubFeed {
    fn new(responses: Vec<(&str, Vec<RawStation>)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(url, stations)| (url.to_string(), stations))
                .collect(),
            fetch_counts: Mutex::new(HashMap::new()),
        }
    }

    fn fetches(&self, url: &str) -> usize {
        *self.fetch_counts.lock().unwrap().get(url).unwrap_or(&0)
    }
}

impl StationFeed for StubFeed {
    async fn fetch_stations(&self, url: &str) -> Vec<RawStation> {
        *self
            .fetch_counts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_insert(0) += 1;
        self.responses.get(url).cloned().unwrap_or_default()
    }
}

fn station(site_id: &str, postcode: &str) -> RawStation {
    match serde_json::json!({
        "site_id": site_id,
        "brand": "Tesco",
        "address": "1 High St",
        "postcode": postcode,
        "location": {"latitude": 51.5, "longitude": -0.1},
        "prices": {"E10": 1.45, "E5": 1.55, "B7": 1.50},
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

const URL_A: &str = "https://a.test/fuel.json";
const URL_B: &str = "https://b.test/fuel.json";

#[tokio::test]
async fn test_run_accumulates_across_sources() {
    let store = Arc::new(PriceStore::open_memory().await.unwrap());
    let feed = StubFeed::new(vec![
        (URL_A, vec![station("a1", "SW1A 1AA"), station("a2", "EC1A 1BB")]),
        (URL_B, vec![station("b1", "M1 1AE")]),
    ]);
    let aggregator = Aggregator::new(
        feed,
        store.clone(),
        vec![URL_A.to_string(), URL_B.to_string()],
    );

    let summary = aggregator.run_for_date(run_date()).await.unwrap();
    assert_eq!(summary.rows_appended, 3);
    assert_eq!(summary.sources_fetched, 2);

    let snapshot = store.prices().load_snapshot("2024-01-01").await.unwrap();
    assert_eq!(snapshot.len(), 3);
    assert!(store.metadata().get().await.unwrap().is_some());
}

#[tokio::test]
async fn test_failed_source_does_not_block_others() {
    let store = Arc::new(PriceStore::open_memory().await.unwrap());
    // URL_A is absent from the stub: the fetch comes back empty, exactly
    // like a real source that errored at the feed boundary.
    let feed = StubFeed::new(vec![(URL_B, vec![station("b1", "M1 1AE")])]);
    let aggregator = Aggregator::new(
        feed,
        store.clone(),
        vec![URL_A.to_string(), URL_B.to_string()],
    );

    let summary = aggregator.run_for_date(run_date()).await.unwrap();
    assert_eq!(summary.rows_appended, 1);
    assert_eq!(summary.sources_fetched, 1);

    // The failed source left no marker, so it is not considered covered
    assert!(
        !store
            .prices()
            .has_fetched_today(URL_A, "2024-01-01")
            .await
            .unwrap()
    );
    assert!(
        store
            .prices()
            .has_fetched_today(URL_B, "2024-01-01")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_second_run_same_day_is_idempotent() {
    let store = Arc::new(PriceStore::open_memory().await.unwrap());
    let feed = StubFeed::new(vec![(URL_A, vec![station("a1", "SW1A 1AA")])]);
    let aggregator = Aggregator::new(feed, store.clone(), vec![URL_A.to_string()]);

    let first = aggregator.run_for_date(run_date()).await.unwrap();
    assert_eq!(first.rows_appended, 1);

    let second = aggregator.run_for_date(run_date()).await.unwrap();
    assert_eq!(second.rows_appended, 0);

    // The covered source was never re-fetched
    assert_eq!(aggregator.feed().fetches(URL_A), 1);

    let snapshot = store.prices().load_snapshot("2024-01-01").await.unwrap();
    assert_eq!(snapshot.len(), 1);
}

#[tokio::test]
async fn test_new_day_fetches_again() {
    let store = Arc::new(PriceStore::open_memory().await.unwrap());
    let feed = StubFeed::new(vec![(URL_A, vec![station("a1", "SW1A 1AA")])]);
    let aggregator = Aggregator::new(feed, store.clone(), vec![URL_A.to_string()]);

    aggregator.run_for_date(run_date()).await.unwrap();
    let next_day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let summary = aggregator.run_for_date(next_day).await.unwrap();

    assert_eq!(summary.rows_appended, 1);
    assert_eq!(aggregator.feed().fetches(URL_A), 2);
}

#[tokio::test]
async fn test_all_empty_run_writes_nothing() {
    let store = Arc::new(PriceStore::open_memory().await.unwrap());
    let feed = StubFeed::new(vec![]);
    let aggregator = Aggregator::new(
        feed,
        store.clone(),
        vec![URL_A.to_string(), URL_B.to_string()],
    );

    let summary = aggregator.run_for_date(run_date()).await.unwrap();
    assert_eq!(summary.rows_appended, 0);

    assert!(
        store
            .prices()
            .load_snapshot("2024-01-01")
            .await
            .unwrap()
            .is_empty()
    );
    // No successful contribution means no metadata update
    assert_eq!(store.metadata().get().await.unwrap(), None);
}
