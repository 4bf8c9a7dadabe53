mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "RD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".rd";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_USERS_KEY: &str = "users";
const DEFAULT_PREFERENCES_KEY: &str = "preferences";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
