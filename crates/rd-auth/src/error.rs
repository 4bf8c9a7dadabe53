use rd_core::CoreError;
use rd_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Passwords do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    /// Deliberately silent on whether the email or the password was wrong
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Registration failed: {source} {location}")]
    Registration {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for the presentation layer to pick a message from
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::PasswordMismatch { .. } => "PASSWORD_MISMATCH",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Registration { source, .. } => match source {
                StoreError::Validation { .. } => "VALIDATION_ERROR",
                StoreError::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
                StoreError::DuplicateOrcid { .. } => "DUPLICATE_ORCID",
                StoreError::Persistence { .. } => "PERSISTENCE_ERROR",
                StoreError::InvalidImport { .. } => "INVALID_IMPORT",
            },
        }
    }

    /// Storage failures mean the requested change was not applied
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            Self::Registration {
                source: StoreError::Persistence { .. },
                ..
            }
        )
    }
}

impl From<CoreError> for AuthError {
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

pub type Result<T> = std::result::Result<T, AuthError>;
