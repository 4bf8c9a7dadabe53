//! Per-user favorite papers and followed authors.
//!
//! Display data (titles, author lines, names) is copied in when an entry
//! is added and never refreshed afterwards. Adding an id that is already
//! present is a no-op and keeps the first entry's display data. A change is
//! only written back over a collection that was read successfully, so a
//! failed or corrupt read never clobbers other users' preferences.

use crate::collection::{CollectionRead, load_collection, write_collection};
use crate::{
    DEFAULT_PREFERENCES_KEY, KeyValueStorage, PreferenceEvents, Result as StoreErrorResult,
    StoreError, Subscription,
};

use rd_core::{
    FavoritePaper, FollowedAuthor, PreferenceChange, PreferenceChangeKind, PreferenceSet, UserId,
};

use std::sync::Arc;

use log::{debug, info, warn};

pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    events: PreferenceEvents,
}

impl PreferenceStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, DEFAULT_PREFERENCES_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            events: PreferenceEvents::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Preferences for `user_id`, creating and persisting an empty set the
    /// first time a user is seen. Never fails: if the stored collection
    /// cannot be read the empty set is returned without writing, and if
    /// the new set cannot be persisted it is still returned and creation is
    /// retried on next read.
    pub fn get_preferences(&self, user_id: &UserId) -> PreferenceSet {
        let Some(mut all) = load_collection::<PreferenceSet>(self.storage.as_ref(), &self.key)
            .into_items()
        else {
            return PreferenceSet::empty(user_id.clone());
        };

        if let Some(existing) = all.iter().find(|p| &p.user_id == user_id) {
            return existing.clone();
        }

        let created = PreferenceSet::empty(user_id.clone());
        all.push(created.clone());

        match write_collection(self.storage.as_ref(), &self.key, &all) {
            Ok(()) => debug!("Created preferences for user {}", user_id),
            Err(e) => warn!("Could not persist new preferences for {}: {}", user_id, e),
        }

        created
    }

    /// Read, change and write back one user's set. `apply` returns false
    /// for a no-op, which skips the write and the notification. Stored
    /// data that cannot be read is never overwritten.
    #[track_caller]
    fn modify<F>(
        &self,
        user_id: &UserId,
        kind: PreferenceChangeKind,
        apply: F,
    ) -> StoreErrorResult<bool>
    where
        F: FnOnce(&mut PreferenceSet) -> bool,
    {
        let mut all = match load_collection::<PreferenceSet>(self.storage.as_ref(), &self.key) {
            CollectionRead::Loaded(all) => all,
            CollectionRead::Unavailable | CollectionRead::Corrupt => {
                return Err(StoreError::persistence(
                    self.key.as_str(),
                    "stored preferences could not be read, refusing to overwrite them",
                ));
            }
        };

        let index = match all.iter().position(|p| &p.user_id == user_id) {
            Some(index) => index,
            None => {
                all.push(PreferenceSet::empty(user_id.clone()));
                all.len() - 1
            }
        };

        if !apply(&mut all[index]) {
            return Ok(false);
        }

        write_collection(self.storage.as_ref(), &self.key, &all)?;
        self.events.emit(&PreferenceChange::new(user_id.clone(), kind));
        Ok(true)
    }

    #[track_caller]
    pub fn add_favorite_paper(
        &self,
        user_id: &UserId,
        paper_id: &str,
        title: Option<String>,
        authors: Option<String>,
        year: Option<i32>,
    ) -> StoreErrorResult<()> {
        let paper = FavoritePaper::new(paper_id, title, authors, year);
        let added = self.modify(
            user_id,
            PreferenceChangeKind::PaperFavorited(paper_id.to_string()),
            |preferences| preferences.add_paper(paper),
        )?;

        if added {
            info!("Paper {} added to favorites of {}", paper_id, user_id);
        } else {
            debug!("Paper {} already in favorites of {}", paper_id, user_id);
        }
        Ok(())
    }

    /// Persists even when the paper was not a favorite
    #[track_caller]
    pub fn remove_favorite_paper(&self, user_id: &UserId, paper_id: &str) -> StoreErrorResult<()> {
        self.modify(
            user_id,
            PreferenceChangeKind::PaperUnfavorited(paper_id.to_string()),
            |preferences| {
                preferences.remove_paper(paper_id);
                true
            },
        )?;

        info!("Paper {} removed from favorites of {}", paper_id, user_id);
        Ok(())
    }

    pub fn is_paper_favorite(&self, user_id: &UserId, paper_id: &str) -> bool {
        self.get_preferences(user_id).has_paper(paper_id)
    }

    pub fn get_favorite_papers(&self, user_id: &UserId) -> Vec<FavoritePaper> {
        self.get_preferences(user_id).favorite_papers
    }

    #[track_caller]
    pub fn follow_author(
        &self,
        user_id: &UserId,
        author_id: &str,
        name: Option<String>,
    ) -> StoreErrorResult<()> {
        let author = FollowedAuthor::new(author_id, name);
        let added = self.modify(
            user_id,
            PreferenceChangeKind::AuthorFollowed(author_id.to_string()),
            |preferences| preferences.add_author(author),
        )?;

        if added {
            info!("Author {} followed by {}", author_id, user_id);
        } else {
            debug!("Author {} already followed by {}", author_id, user_id);
        }
        Ok(())
    }

    /// Persists even when the author was not followed
    #[track_caller]
    pub fn unfollow_author(&self, user_id: &UserId, author_id: &str) -> StoreErrorResult<()> {
        self.modify(
            user_id,
            PreferenceChangeKind::AuthorUnfollowed(author_id.to_string()),
            |preferences| {
                preferences.remove_author(author_id);
                true
            },
        )?;

        info!("Author {} unfollowed by {}", author_id, user_id);
        Ok(())
    }

    pub fn is_following_author(&self, user_id: &UserId, author_id: &str) -> bool {
        self.get_preferences(user_id).has_author(author_id)
    }

    pub fn get_followed_authors(&self, user_id: &UserId) -> Vec<FollowedAuthor> {
        self.get_preferences(user_id).followed_authors
    }

    /// Register a listener for every persisted preference change
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PreferenceChange) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}
