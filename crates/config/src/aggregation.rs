//! Aggregation run configuration
//!
//! Which retailer feeds to pull and how long to wait after startup before the
//! single aggregation run kicks off. The feed list ships with the known UK
//! retailer endpoints so a minimal config just works; adding or removing a
//! source is a config change, not a code change.
//!
//! # Example
//!
//! ```toml
//! [aggregation]
//! startup_delay_secs = 5
//! urls = [
//!     "https://www.tesco.com/fuel_prices/fuel_prices_data.json",
//! ]
//! ```

use serde::Deserialize;

/// Retailer feed endpoints pulled by default
pub const DEFAULT_FEED_URLS: &[&str] = &[
    "https://applegreenstores.com/fuel-prices/data.json",
    "https://fuelprices.asconagroup.co.uk/newfuel.json",
    "https://storelocator.asda.com/fuel_prices_data.json",
    "https://fuelprices.esso.co.uk/latestdata.json",
    "https://jetlocal.co.uk/fuel_prices_data.json",
    "https://www.morrisons.com/fuel-prices/fuel.json",
    "https://moto-way.com/fuel-price/fuel_prices.json",
    "https://fuel.motorfuelgroup.com/fuel_prices_data.json",
    "https://www.rontec-servicestations.co.uk/fuel-prices/data/fuel_prices_data.json",
    "https://api.sainsburys.co.uk/v1/exports/latest/fuel_prices_data.json",
    "https://www.sgnretail.uk/files/data/SGN_daily_fuel_prices.json",
    "https://www.tesco.com/fuel_prices/fuel_prices_data.json",
];

/// Aggregation run configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Seconds to wait after startup before the aggregation run begins,
    /// so the API can start serving immediately.
    /// Default: 5
    pub startup_delay_secs: u64,

    /// Retailer feed URLs to pull
    /// Default: the known UK retailer endpoints
    pub urls: Vec<String>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            startup_delay_secs: 5,
            urls: DEFAULT_FEED_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AggregationConfig::default();
        assert_eq!(config.startup_delay_secs, 5);
        assert_eq!(config.urls.len(), 12);
        assert!(config.urls.iter().all(|u| u.starts_with("https://")));
    }

    #[test]
    fn test_custom_urls_replace_defaults() {
        let toml = r#"
urls = ["https://example.test/fuel.json"]
"#;
        let config: AggregationConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.urls, vec!["https://example.test/fuel.json"]);
    }

    #[test]
    fn test_custom_delay() {
        let toml = r#"
startup_delay_secs = 0
"#;
        let config: AggregationConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.startup_delay_secs, 0);
    }
}
