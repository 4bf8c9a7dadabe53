use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PREFERENCES_KEY, DEFAULT_STORAGE_DIR,
    DEFAULT_USERS_KEY,
};

use std::path::Path;

use serde::Deserialize;

/// Where user data lives and under which keys
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory relative to the config directory
    pub dir: String,
    pub users_key: String,
    pub preferences_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            users_key: String::from(DEFAULT_USERS_KEY),
            preferences_key: String::from(DEFAULT_PREFERENCES_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = Path::new(&self.dir);
        if self.dir.is_empty() || dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative, non-empty and cannot contain '..'",
            ));
        }

        Self::validate_key("storage.users_key", &self.users_key)?;
        Self::validate_key("storage.preferences_key", &self.preferences_key)?;

        if self.users_key == self.preferences_key {
            return Err(ConfigError::storage(format!(
                "storage.users_key and storage.preferences_key must differ (both '{}')",
                self.users_key
            )));
        }

        Ok(())
    }

    fn validate_key(name: &str, key: &str) -> ConfigErrorResult<()> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');

        if !valid {
            return Err(ConfigError::storage(format!(
                "{name} must be non-empty and use only letters, digits, '_', '-' or '.', got '{key}'"
            )));
        }

        Ok(())
    }
}
