//! # Record Store
//!
//! Whole-file persistence for the user record collection.
//!
//! The collection lives in a single pretty-printed JSON array. Every read
//! rehydrates the full file; every write replaces it.

mod errors;
mod file_store;
mod record;
mod repository;

pub use errors::{StoreError, StoreResult};
pub use file_store::{FileStore, StoreConfig};
pub use record::{filter_by_city, find_by_id, next_id, NewRecord, Record};
pub use repository::RecordRepository;
