//! Retailer feed HTTP client
//!
//! Pulls one retailer's published JSON feed. Several retailers front their
//! feeds with CDNs that reject non-browser clients, so requests go out with a
//! desktop browser User-Agent; a couple of them also serve JSON under a
//! `text/plain` content type, which is accepted and parsed the same way.
//!
//! Fetch failures never escape `fetch_stations`: whatever goes wrong for one
//! source - network, status, content type, parse, shape - is logged with the
//! URL and becomes an empty contribution for that run.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{FeedError, Result};
use crate::{RawStation, StationFeed};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client for retailer fuel-price feeds
pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    /// Create a new feed client
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails (e.g., TLS or proxy
    /// misconfiguration)
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| FeedError::Init(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch and parse one feed, propagating the failure cause
    async fn try_fetch(&self, url: &str) -> Result<Vec<RawStation>> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !is_ingestible_content_type(&content_type) {
            return Err(FeedError::UnexpectedContentType { content_type });
        }

        // Parse from text rather than response.json() so the text/plain
        // sources go through the same path.
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        extract_stations(value)
    }
}

impl StationFeed for FeedClient {
    async fn fetch_stations(&self, url: &str) -> Vec<RawStation> {
        match self.try_fetch(url).await {
            Ok(stations) => {
                debug!(url = %url, count = stations.len(), "fetched feed");
                stations
            }
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch feed");
                Vec::new()
            }
        }
    }
}

/// Whether a Content-Type header value carries a feed we can parse
fn is_ingestible_content_type(content_type: &str) -> bool {
    content_type.contains("application/json") || content_type.contains("text/plain")
}

/// Pull the station list out of a parsed feed body
///
/// Most feeds wrap the list in `{"stations": [...]}`; a few publish the bare
/// array, which is accepted as-is.
fn extract_stations(value: Value) -> Result<Vec<RawStation>> {
    let list = match value {
        Value::Object(mut map) => match map.remove("stations") {
            Some(stations) => stations,
            None => {
                return Err(FeedError::UnexpectedShape(
                    "object without a 'stations' key".to_string(),
                ));
            }
        },
        other => other,
    };

    let items = match list {
        Value::Array(items) => items,
        other => {
            return Err(FeedError::UnexpectedShape(format!(
                "expected a station array, got {}",
                json_type_name(&other)
            )));
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(FeedError::UnexpectedShape(format!(
                "expected station objects, got {}",
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
