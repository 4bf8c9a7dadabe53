//! Favorited paper entry with display data captured at favorite-time.

use crate::{PLACEHOLDER_PAPER_AUTHORS, PLACEHOLDER_PAPER_TITLE};

use serde::{Deserialize, Serialize};

/// A paper in a user's favorites.
///
/// Title, authors and year are a snapshot taken when the paper was
/// favorited and are not refreshed if the source record changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredFavoritePaper")]
pub struct FavoritePaper {
    pub paper_id: String,
    pub title: String,
    /// Author names joined into one display string
    pub authors: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl FavoritePaper {
    pub fn new(
        paper_id: impl Into<String>,
        title: Option<String>,
        authors: Option<String>,
        year: Option<i32>,
    ) -> Self {
        Self {
            paper_id: paper_id.into(),
            title: title.unwrap_or_else(|| PLACEHOLDER_PAPER_TITLE.to_string()),
            authors: authors.unwrap_or_else(|| PLACEHOLDER_PAPER_AUTHORS.to_string()),
            year,
        }
    }
}

/// Every shape a favorite has been stored in: a bare paper id, or an object
/// keyed by `paperId` (or the older `id`) with authors as a string or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFavoritePaper {
    Id(String),
    Entry(StoredFavoritePaperEntry),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFavoritePaperEntry {
    #[serde(alias = "id")]
    paper_id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Option<StoredAuthors>,
    #[serde(default)]
    year: Option<i32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAuthors {
    Joined(String),
    List(Vec<String>),
}

impl From<StoredAuthors> for String {
    fn from(authors: StoredAuthors) -> Self {
        match authors {
            StoredAuthors::Joined(joined) => joined,
            StoredAuthors::List(names) => names.join(", "),
        }
    }
}

impl From<StoredFavoritePaper> for FavoritePaper {
    fn from(stored: StoredFavoritePaper) -> Self {
        match stored {
            StoredFavoritePaper::Id(paper_id) => FavoritePaper::new(paper_id, None, None, None),
            StoredFavoritePaper::Entry(entry) => FavoritePaper::new(
                entry.paper_id,
                entry.title,
                entry.authors.map(String::from),
                entry.year,
            ),
        }
    }
}
