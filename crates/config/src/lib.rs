//! Forecourt Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! Two values come from the process environment rather than the file:
//! `DATABASE_URL` (required - the service fails fast without its store) and
//! `PORT` (optional override of `[api_server] port`).
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use forecourt_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[api_server]\nport = 8080").unwrap();
//! ```

mod aggregation;
mod api_server;
mod database;
mod error;

pub use aggregation::{AggregationConfig, DEFAULT_FEED_URLS};
pub use api_server::ApiServerConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, Result};

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Read API server settings
    pub api_server: ApiServerConfig,

    /// Aggregation run settings (feed list, startup delay)
    pub aggregation: AggregationConfig,

    /// Store location (usually supplied via DATABASE_URL instead)
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Load from a TOML file when it exists, defaults otherwise
    ///
    /// A missing file is not an error - the defaults are a complete working
    /// configuration. A file that exists but cannot be read or parsed is.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply process environment overrides
    ///
    /// Reads `DATABASE_URL` and `PORT`. Call once at startup, after loading
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns error if `PORT` is present but not a valid port number.
    pub fn apply_env(&mut self) -> Result<()> {
        let database_url = std::env::var("DATABASE_URL").ok();
        let port = std::env::var("PORT").ok();
        self.apply_overrides(database_url.as_deref(), port.as_deref())
    }

    /// Apply overrides from already-extracted values
    ///
    /// Split out from `apply_env` so tests never touch process-global state.
    fn apply_overrides(&mut self, database_url: Option<&str>, port: Option<&str>) -> Result<()> {
        if let Some(url) = database_url {
            let url = url.trim();
            if !url.is_empty() {
                self.database.url = Some(url.to_string());
            }
        }

        if let Some(port) = port {
            self.api_server.port =
                port.trim()
                    .parse::<u16>()
                    .map_err(|e| ConfigError::InvalidPort {
                        value: port.to_string(),
                        message: e.to_string(),
                    })?;
        }

        Ok(())
    }

    /// The resolved database path
    ///
    /// # Errors
    ///
    /// Returns `MissingDatabaseUrl` if neither DATABASE_URL nor
    /// `[database] url` provided one.
    pub fn database_url(&self) -> Result<&str> {
        self.database
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.aggregation.urls.is_empty() {
            return Err(ConfigError::NoFeeds);
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.api_server.port, 5000);
        assert_eq!(config.aggregation.startup_delay_secs, 5);
        assert_eq!(config.aggregation.urls.len(), 12);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_sections_parse() {
        let config = Config::from_str(
            r#"
[api_server]
port = 8080

[aggregation]
startup_delay_secs = 1
urls = ["https://example.test/a.json", "https://example.test/b.json"]

[database]
url = ":memory:"
"#,
        )
        .unwrap();

        assert_eq!(config.api_server.port, 8080);
        assert_eq!(config.aggregation.urls.len(), 2);
        assert_eq!(config.database_url().unwrap(), ":memory:");
    }

    #[test]
    fn test_empty_feed_list_rejected() {
        let result = Config::from_str("[aggregation]\nurls = []");
        assert!(matches!(result, Err(ConfigError::NoFeeds)));
    }

    #[test]
    fn test_database_url_required() {
        let config = Config::default();
        assert!(matches!(
            config.database_url(),
            Err(ConfigError::MissingDatabaseUrl)
        ));
    }

    #[test]
    fn test_env_database_url_wins_over_file() {
        let mut config = Config::from_str("[database]\nurl = \"file.db\"").unwrap();
        config
            .apply_overrides(Some(" env.db \n"), None)
            .unwrap();
        // Whitespace is trimmed, matching how deploy platforms hand the value over
        assert_eq!(config.database_url().unwrap(), "env.db");
    }

    #[test]
    fn test_env_port_override() {
        let mut config = Config::default();
        config.apply_overrides(None, Some("9090")).unwrap();
        assert_eq!(config.api_server.port, 9090);
    }

    #[test]
    fn test_env_port_invalid() {
        let mut config = Config::default();
        let result = config.apply_overrides(None, Some("not-a-port"));
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    }

    #[test]
    fn test_blank_env_database_url_ignored() {
        let mut config = Config::default();
        config.apply_overrides(Some("   "), None).unwrap();
        assert!(config.database_url().is_err());
    }
}
