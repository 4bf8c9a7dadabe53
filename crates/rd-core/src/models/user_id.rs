//! Opaque user identifier.

use crate::{USER_ID_PREFIX, USER_ID_SUFFIX_LEN};

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a user at registration.
///
/// Generated ids have the form `user_<unix-millis>_<random base-36 suffix>`.
/// Ids read back from storage are taken as-is, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh id from the current time and a random suffix
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..USER_ID_SUFFIX_LEN)
            .filter_map(|_| std::char::from_digit(rng.random_range(0..36), 36))
            .collect();

        Self(format!(
            "{}{}_{}",
            USER_ID_PREFIX,
            Utc::now().timestamp_millis(),
            suffix
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
