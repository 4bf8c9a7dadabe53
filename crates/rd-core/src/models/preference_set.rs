//! Per-user favorites and follows.

use crate::{FavoritePaper, FollowedAuthor, UserId};

use serde::{Deserialize, Serialize};

/// Favorite papers and followed authors for one user.
///
/// Both lists keep insertion order and hold at most one entry per id.
/// Adding an id that is already present leaves the existing entry as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    pub user_id: UserId,
    #[serde(default)]
    pub favorite_papers: Vec<FavoritePaper>,
    #[serde(default)]
    pub followed_authors: Vec<FollowedAuthor>,
}

impl PreferenceSet {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            favorite_papers: Vec::new(),
            followed_authors: Vec::new(),
        }
    }

    pub fn has_paper(&self, paper_id: &str) -> bool {
        self.favorite_papers.iter().any(|p| p.paper_id == paper_id)
    }

    pub fn has_author(&self, author_id: &str) -> bool {
        self.followed_authors.iter().any(|a| a.author_id == author_id)
    }

    /// Append a paper. Returns false (and changes nothing) if already present.
    pub fn add_paper(&mut self, paper: FavoritePaper) -> bool {
        if self.has_paper(&paper.paper_id) {
            return false;
        }
        self.favorite_papers.push(paper);
        true
    }

    /// Returns true if an entry was removed
    pub fn remove_paper(&mut self, paper_id: &str) -> bool {
        let before = self.favorite_papers.len();
        self.favorite_papers.retain(|p| p.paper_id != paper_id);
        self.favorite_papers.len() != before
    }

    /// Append an author. Returns false (and changes nothing) if already present.
    pub fn add_author(&mut self, author: FollowedAuthor) -> bool {
        if self.has_author(&author.author_id) {
            return false;
        }
        self.followed_authors.push(author);
        true
    }

    pub fn remove_author(&mut self, author_id: &str) -> bool {
        let before = self.followed_authors.len();
        self.followed_authors.retain(|a| a.author_id != author_id);
        self.followed_authors.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.favorite_papers.is_empty() && self.followed_authors.is_empty()
    }
}
