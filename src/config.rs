//! Service configuration
//!
//! Resolved once at startup from an optional JSON file plus command-line
//! overrides, then handed to the server. Every field has a default, so an
//! empty object `{}` is a complete configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::{HttpServerConfig, ResponseHeaders};
use crate::logging::LoggingConfig;
use crate::store::StoreConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub headers: ResponseHeaders,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate a JSON document
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }

        if self.store.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("store.data_file must not be empty".into()));
        }

        self.headers.values().map_err(|field| {
            ConfigError::Invalid(format!("headers.{} is not a valid header value", field))
        })?;

        Ok(())
    }

    /// Pretty JSON form, as written by `init`
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_is_default() {
        let config = ServiceConfig::from_json("{}").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store.data_file, PathBuf::from("users.json"));
        assert!(!config.store.strict);
        assert_eq!(config.headers, ResponseHeaders::default());
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_nested_overrides() {
        let config = ServiceConfig::from_json(
            r#"{
                "server": {"port": 8081},
                "store": {"data_file": "/tmp/people.json", "strict": true},
                "logging": {"format": "json", "level": "debug"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.server.socket_addr(), "0.0.0.0:8081");
        assert_eq!(config.store.data_file, PathBuf::from("/tmp/people.json"));
        assert!(config.store.strict);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ServiceConfig::from_json(r#"{"store": {"data_file": ""}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ServiceConfig::from_json(r#"{"headers": {"developer": "a\nb"}}"#).unwrap_err();
        assert!(err.to_string().contains("headers.developer"));

        let err = ServiceConfig::from_json("[").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_round_trips_init_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("record-service.json");
        std::fs::write(&path, ServiceConfig::default().to_json_pretty().unwrap()).unwrap();

        let loaded = ServiceConfig::load(&path).unwrap();
        assert_eq!(loaded.server.port, 3000);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ServiceConfig::load(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
