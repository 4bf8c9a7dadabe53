//! Sign-up form as entered by the user, before it reaches the registry.

use crate::{AuthError, Result as AuthErrorResult};

use rd_core::NewUser;

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub orcid: Option<String>,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationForm {
    /// Check the form locally. Uniqueness is left to the registry.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.password != self.password_confirmation {
            return Err(AuthError::PasswordMismatch {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.to_new_user().validate()?;
        Ok(())
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            email: self.email.clone(),
            orcid_identifier: self.orcid.clone(),
            credential_secret: self.password.clone(),
        }
    }
}
