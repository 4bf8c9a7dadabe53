use rd_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure raised by a storage primitive
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage IO error for key '{key}': {source} {location}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Storage unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StorageError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("ORCID already registered: {orcid} {location}")]
    DuplicateOrcid {
        orcid: String,
        location: ErrorLocation,
    },

    #[error("Failed to persist '{key}': {message} {location}")]
    Persistence {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid import payload: {source} {location}")]
    InvalidImport {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn persistence<K: Into<String>, S: Into<String>>(key: K, message: S) -> Self {
        StoreError::Persistence {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { message, .. } => Self::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
pub type Result<T> = std::result::Result<T, StoreError>;
