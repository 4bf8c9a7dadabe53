//! Registration input for the user registry.

use crate::{CoreError, Result as CoreErrorResult};

/// Profile data supplied when registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub orcid_identifier: Option<String>,
    pub credential_secret: String,
}

impl NewUser {
    pub fn new(
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        email: impl Into<String>,
        credential_secret: impl Into<String>,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            email: email.into(),
            orcid_identifier: None,
            credential_secret: credential_secret.into(),
        }
    }

    pub fn with_orcid(mut self, orcid: impl Into<String>) -> Self {
        self.orcid_identifier = Some(orcid.into());
        self
    }

    /// Check that every required field is present.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let required = [
            ("email", &self.email),
            ("password", &self.credential_secret),
            ("given name", &self.given_name),
            ("family name", &self.family_name),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::validation(format!("{field} is required")));
            }
        }

        Ok(())
    }

    /// ORCID with blank values collapsed to `None`
    pub fn normalized_orcid(&self) -> Option<String> {
        self.orcid_identifier
            .as_deref()
            .map(str::trim)
            .filter(|orcid| !orcid.is_empty())
            .map(str::to_string)
    }
}
