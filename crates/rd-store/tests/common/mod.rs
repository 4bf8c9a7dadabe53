#![allow(dead_code)]

pub mod fixtures;

use rd_store::{KeyValueStorage, MemoryStorage};

use std::sync::Arc;

/// Shared in-memory storage, returned both concretely (to toggle failures
/// and inspect raw values) and as the trait object the stores take
pub fn create_test_storage() -> (Arc<MemoryStorage>, Arc<dyn KeyValueStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let shared: Arc<dyn KeyValueStorage> = storage.clone();
    (storage, shared)
}
