//! Shared access to the record store.
//!
//! Reads hold the read guard for the duration of a load. A create holds the
//! write guard across load, id assignment and save, so two concurrent creates
//! can never both observe the same snapshot.

use tokio::sync::RwLock;
use tracing::info;

use super::errors::StoreResult;
use super::file_store::FileStore;
use super::record::{filter_by_city, find_by_id, next_id, NewRecord, Record};

/// Record operations over a [`FileStore`]
#[derive(Debug)]
pub struct RecordRepository {
    store: FileStore,
    lock: RwLock<()>,
}

impl RecordRepository {
    pub fn new(store: FileStore) -> Self {
        Self {
            store,
            lock: RwLock::new(()),
        }
    }

    /// Every record in insertion order
    pub async fn list(&self) -> StoreResult<Vec<Record>> {
        let _guard = self.lock.read().await;
        self.store.load().await
    }

    /// Records in `city`, ignoring case
    pub async fn search_by_city(&self, city: &str) -> StoreResult<Vec<Record>> {
        let _guard = self.lock.read().await;
        let records = self.store.load().await?;
        Ok(filter_by_city(&records, city))
    }

    /// Record with the given id, if any
    pub async fn get(&self, id: Option<i64>) -> StoreResult<Option<Record>> {
        let _guard = self.lock.read().await;
        let records = self.store.load().await?;
        Ok(find_by_id(&records, id).cloned())
    }

    /// Assign the next id, append and persist
    pub async fn create(&self, new: NewRecord) -> StoreResult<Record> {
        let _guard = self.lock.write().await;
        let mut records = self.store.load().await?;

        let record = new.with_id(next_id(&records)?);
        records.push(record.clone());
        self.store.save_all(&records).await?;

        info!(id = record.id, city = %record.city, "user created");
        Ok(record)
    }
}
