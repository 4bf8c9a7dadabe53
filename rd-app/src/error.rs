use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] rd_config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] rd_store::StorageError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
