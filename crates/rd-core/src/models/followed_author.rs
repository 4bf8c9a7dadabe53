//! Followed author entry with the name captured at follow-time.

use crate::PLACEHOLDER_AUTHOR_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredFollowedAuthor")]
pub struct FollowedAuthor {
    pub author_id: String,
    pub name: String,
}

impl FollowedAuthor {
    pub fn new(author_id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            author_id: author_id.into(),
            name: name.unwrap_or_else(|| PLACEHOLDER_AUTHOR_NAME.to_string()),
        }
    }
}

/// A bare author id, or an object keyed by `authorId` (or the older `id`)
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFollowedAuthor {
    Id(String),
    Entry {
        #[serde(rename = "authorId", alias = "id")]
        author_id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<StoredFollowedAuthor> for FollowedAuthor {
    fn from(stored: StoredFollowedAuthor) -> Self {
        match stored {
            StoredFollowedAuthor::Id(author_id) => FollowedAuthor::new(author_id, None),
            StoredFollowedAuthor::Entry { author_id, name } => {
                FollowedAuthor::new(author_id, name)
            }
        }
    }
}
