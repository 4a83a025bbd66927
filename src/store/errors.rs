//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing file exists but could not be read or written
    #[error("I/O error: {0}")]
    IoError(String),

    /// The backing file is not a JSON array of records
    #[error("Malformed store: {0}")]
    Malformed(String),

    /// The collection could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The largest stored id leaves no room for another
    #[error("No id available after {0}")]
    IdsExhausted(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = StoreError::IoError("permission denied".into());
        assert_eq!(err.to_string(), "I/O error: permission denied");
        assert_eq!(
            StoreError::IdsExhausted(i64::MAX).to_string(),
            "No id available after 9223372036854775807"
        );
    }
}
