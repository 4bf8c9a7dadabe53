mod collection;
pub mod error;
pub mod preference_events;
pub mod preference_store;
pub mod storage;
pub mod user_registry;

pub use error::{Result, StorageError, StorageResult, StoreError};
pub use preference_events::{PreferenceEvents, Subscription};
pub use preference_store::PreferenceStore;
pub use storage::KeyValueStorage;
pub use storage::file_storage::FileStorage;
pub use storage::memory_storage::MemoryStorage;
pub use user_registry::UserRegistry;

/// Storage key holding the JSON array of user records
pub const DEFAULT_USERS_KEY: &str = "users";
/// Storage key holding the JSON array of preference sets
pub const DEFAULT_PREFERENCES_KEY: &str = "preferences";

#[cfg(test)]
mod tests;
