//! Whole-collection read and write over one storage key.
//!
//! Reads never fail: a missing key is an empty collection, and an
//! unreadable store or a value that is not a JSON array of `T` is reported
//! as a degraded read that callers may treat as empty. Writes replace the
//! entire value and report any failure.

use crate::{KeyValueStorage, Result as StoreErrorResult, StoreError};

use log::{debug, error, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Outcome of reading a collection
#[derive(Debug, PartialEq)]
pub(crate) enum CollectionRead<T> {
    /// Stored items, empty when nothing is stored under the key
    Loaded(Vec<T>),
    /// The storage primitive reported an error
    Unavailable,
    /// The stored value is not a JSON array of `T`
    Corrupt,
}

impl<T> CollectionRead<T> {
    /// Items when the read did not degrade
    pub(crate) fn into_items(self) -> Option<Vec<T>> {
        match self {
            CollectionRead::Loaded(items) => Some(items),
            CollectionRead::Unavailable | CollectionRead::Corrupt => None,
        }
    }

    pub(crate) fn or_empty(self) -> Vec<T> {
        self.into_items().unwrap_or_default()
    }
}

pub(crate) fn load_collection<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> CollectionRead<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No value stored under '{}', starting empty", key);
            return CollectionRead::Loaded(Vec::new());
        }
        Err(e) => {
            warn!("Failed to read '{}', treating as empty: {}", key, e);
            return CollectionRead::Unavailable;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => CollectionRead::Loaded(items),
        Err(e) => {
            warn!("Corrupt data under '{}', treating as empty: {}", key, e);
            CollectionRead::Corrupt
        }
    }
}

#[track_caller]
pub(crate) fn write_collection<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    items: &[T],
) -> StoreErrorResult<()> {
    let json = serde_json::to_string(items).map_err(|e| {
        error!("Failed to serialize '{}': {}", key, e);
        StoreError::persistence(key, e.to_string())
    })?;

    storage.set(key, &json).map_err(|e| {
        error!("Failed to write '{}': {}", key, e);
        StoreError::persistence(key, e.to_string())
    })
}
