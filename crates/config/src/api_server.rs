//! API server configuration
//!
//! Bind address for the read API. The port can be overridden with the `PORT`
//! environment variable at startup.
//!
//! # Example
//!
//! ```toml
//! [api_server]
//! host = "0.0.0.0"    # default
//! port = 5000         # default
//! ```

use serde::Deserialize;

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiServerConfig {
    /// Host to bind to
    /// Default: "0.0.0.0"
    pub host: String,

    /// Port to listen on
    /// Default: 5000
    pub port: u16,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ApiServerConfig {
    /// The socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
