//! Single-key, whole-value storage primitive the stores are built on.
//!
//! Implementations only need atomic get/set of one string per key. There
//! is no transaction spanning keys or spanning a get followed by a set.

pub mod file_storage;
pub mod memory_storage;

use crate::StorageResult;

pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
