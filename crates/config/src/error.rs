//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// DATABASE_URL is not set and no database path was configured
    #[error("DATABASE_URL is not set - the service cannot run without its store")]
    MissingDatabaseUrl,

    /// PORT held a value that is not a valid port number
    #[error("invalid PORT value '{value}': {message}")]
    InvalidPort {
        /// The offending value
        value: String,
        /// Why it was rejected
        message: String,
    },

    /// No feed URLs configured
    #[error("no feed urls configured - at least one source is required")]
    NoFeeds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_message() {
        let err = ConfigError::MissingDatabaseUrl;
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_port_message() {
        let err = ConfigError::InvalidPort {
            value: "eighty".into(),
            message: "invalid digit found in string".into(),
        };
        assert!(err.to_string().contains("eighty"));
    }
}
