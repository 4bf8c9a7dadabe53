//! Login state for the current user.

use crate::{AuthError, RegistrationForm, Result as AuthErrorResult};

use rd_core::UserRecord;
use rd_store::UserRegistry;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::info;

pub struct AuthSession {
    registry: Arc<UserRegistry>,
    current_user: Option<UserRecord>,
}

impl AuthSession {
    pub fn new(registry: Arc<UserRegistry>) -> Self {
        Self {
            registry,
            current_user: None,
        }
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    /// Validate the form and create the account. The session stays logged
    /// out; the user signs in with the new credentials afterwards.
    #[track_caller]
    pub fn register(&self, form: &RegistrationForm) -> AuthErrorResult<UserRecord> {
        form.validate()?;

        self.registry
            .register(form.to_new_user())
            .map_err(|source| AuthError::Registration {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    pub fn login(&mut self, email: &str, password: &str) -> AuthErrorResult<UserRecord> {
        let user = self.registry.authenticate(email, password).ok_or_else(|| {
            AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        self.current_user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("User {} logged out", user.id);
        }
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
