//! HTTP Server Configuration
//!
//! Listen address and the informational headers attached to every response.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Values of the `X-API-Version` and `X-Developer` response headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    /// API version tag (default: "1.0.0")
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Maintainer tag (default: "Piyush Jha")
    #[serde(default = "default_developer")]
    pub developer: String,
}

pub const API_VERSION_HEADER: &str = "x-api-version";
pub const DEVELOPER_HEADER: &str = "x-developer";

pub const DEFAULT_API_VERSION: &str = "1.0.0";
pub const DEFAULT_DEVELOPER: &str = "Piyush Jha";

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_developer() -> String {
    DEFAULT_DEVELOPER.to_string()
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            developer: default_developer(),
        }
    }
}

impl ResponseHeaders {
    /// Header values for (`X-API-Version`, `X-Developer`).
    ///
    /// Fails with the name of the first field that is not a legal header value.
    pub fn values(&self) -> Result<(HeaderValue, HeaderValue), &'static str> {
        let version = HeaderValue::from_str(&self.api_version).map_err(|_| "api_version")?;
        let developer = HeaderValue::from_str(&self.developer).map_err(|_| "developer")?;
        Ok((version, developer))
    }
}
