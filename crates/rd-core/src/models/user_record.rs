//! Stored user entity.

use crate::{NewUser, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as persisted under the users key.
///
/// Records are never edited or deleted once created. The credential secret
/// is kept verbatim and compared verbatim on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub given_name: String,
    pub family_name: String,
    /// Unique, compared case-insensitively
    pub email: String,
    /// Unique when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid_identifier: Option<String>,
    pub credential_secret: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build a record from registration input, stamping the creation time
    pub fn new(id: UserId, profile: NewUser) -> Self {
        let orcid_identifier = profile.normalized_orcid();
        Self {
            id,
            given_name: profile.given_name,
            family_name: profile.family_name,
            email: profile.email,
            orcid_identifier,
            credential_secret: profile.credential_secret,
            created_at: Utc::now(),
        }
    }

    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    pub fn orcid_matches(&self, orcid: &str) -> bool {
        self.orcid_identifier.as_deref() == Some(orcid)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}
