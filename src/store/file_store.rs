//! # JSON File Backend
//!
//! Reads and writes the whole collection as one JSON document.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::warn;

use super::errors::{StoreError, StoreResult};
use super::record::Record;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the backing JSON file (default: "users.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Report an unreadable or malformed store as an error instead of
    /// treating it as empty (default: false)
    #[serde(default)]
    pub strict: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("users.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            strict: false,
        }
    }
}

/// Single-file record store.
///
/// No locking happens here; callers that share a store across tasks go
/// through [`RecordRepository`](super::RecordRepository).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    strict: bool,
}

impl FileStore {
    /// Create a fail-open store at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            path: config.data_file.clone(),
            strict: config.strict,
        }
    }

    /// Switch strict loading on or off
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load the collection, failing on anything but a missing file.
    ///
    /// A missing or blank file is an empty collection.
    pub async fn try_load(&self) -> StoreResult<Vec<Record>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::IoError(e.to_string())),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    /// Load the collection, degrading to empty on any failure.
    pub async fn load_all(&self) -> Vec<Record> {
        match self.try_load().await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "store unreadable, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Load honouring the configured strictness
    pub async fn load(&self) -> StoreResult<Vec<Record>> {
        if self.strict {
            self.try_load().await
        } else {
            Ok(self.load_all().await)
        }
    }

    /// Overwrite the backing file with the full collection.
    ///
    /// Output is a pretty-printed array with 2-space indentation.
    pub async fn save_all(&self, records: &[Record]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Record> {
        vec![
            Record {
                id: 1,
                name: "Asha".to_string(),
                city: "Pune".to_string(),
            },
            Record {
                id: 2,
                name: "Ravi".to_string(),
                city: "Delhi".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("users.json"));

        assert!(store.try_load().await.unwrap().is_empty());
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("users.json"));

        store.save_all(&sample()).await.unwrap();
        assert_eq!(store.load_all().await, sample());
    }

    #[tokio::test]
    async fn test_save_format_is_pretty_two_space() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        let store = FileStore::new(&path);

        store.save_all(&sample()[..1]).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[\n  {\n    \"id\": 1,\n    \"name\": \"Asha\",\n    \"city\": \"Pune\"\n  }\n]"
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_fails_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(
            store.try_load().await,
            Err(StoreError::Malformed(_))
        ));
        assert!(store.load_all().await.is_empty());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_fails_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        std::fs::write(&path, r#"{"id": 1, "name": "Asha", "city": "Pune"}"#).unwrap();
        let store = FileStore::new(&path);

        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_strict_load_surfaces_corruption() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        std::fs::write(&path, "[{\"id\": 1}]").unwrap();
        let store = FileStore::new(&path).strict(true);

        assert!(matches!(store.load().await, Err(StoreError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_blank_file_is_empty_even_when_strict() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        std::fs::write(&path, "\n").unwrap();
        let store = FileStore::new(&path).strict(true);

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("missing").join("users.json"));

        let result = store.save_all(&sample()).await;
        assert!(matches!(result, Err(StoreError::IoError(_))));
    }
}
