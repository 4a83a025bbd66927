//! CLI-specific error types
//!
//! Every CLI error is fatal: `main` prints it and exits non-zero.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Config file already present
    #[error("config file already exists: {0}")]
    AlreadyInitialized(String),

    /// Logging could not be set up
    #[error("logging error: {0}")]
    Logging(String),

    /// Runtime, bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "RECORD_CLI_CONFIG_ERROR",
            Self::AlreadyInitialized(_) => "RECORD_CLI_ALREADY_INITIALIZED",
            Self::Logging(_) => "RECORD_CLI_LOGGING_ERROR",
            Self::Io(_) => "RECORD_CLI_IO_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = CliError::from(io::Error::new(io::ErrorKind::AddrInUse, "in use"));
        assert_eq!(err.code(), "RECORD_CLI_IO_ERROR");
        assert_eq!(err.to_string(), "I/O error: in use");

        let err = CliError::AlreadyInitialized("a.json".into());
        assert_eq!(err.code(), "RECORD_CLI_ALREADY_INITIALIZED");
    }
}
