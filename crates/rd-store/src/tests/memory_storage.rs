use crate::{KeyValueStorage, MemoryStorage, StorageError};

use googletest::prelude::*;

#[test]
fn given_empty_storage_when_get_then_none() {
    let storage = MemoryStorage::new();

    assert_that!(storage.get("users").unwrap(), none());
    assert_that!(storage.is_empty(), eq(true));
}

#[test]
fn given_value_set_when_get_then_returns_whole_value() {
    let storage = MemoryStorage::new();

    storage.set("users", "[1,2,3]").unwrap();
    storage.set("users", "[4]").unwrap();

    assert_that!(storage.get("users").unwrap(), some(eq("[4]")));
    assert_that!(storage.len(), eq(1));
}

#[test]
fn given_writes_disabled_when_set_then_unavailable_and_value_unchanged() {
    let storage = MemoryStorage::new();
    storage.set("users", "[]").unwrap();
    storage.fail_writes(true);

    let result = storage.set("users", "[1]");

    assert!(matches!(result, Err(StorageError::Unavailable { .. })));
    assert_that!(storage.get("users").unwrap(), some(eq("[]")));

    storage.fail_writes(false);
    assert_that!(storage.set("users", "[1]"), ok(anything()));
}

#[test]
fn given_one_failing_read_when_get_twice_then_only_first_fails() {
    let storage = MemoryStorage::new();
    storage.set("users", "[]").unwrap();
    storage.fail_next_reads(1);

    let first = storage.get("users");
    let second = storage.get("users");

    assert!(matches!(first, Err(StorageError::Unavailable { .. })));
    assert_that!(second.unwrap(), some(eq("[]")));
}
