use crate::UserId;

/// Notification sent to preference observers after a persisted mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceChange {
    pub user_id: UserId,
    pub kind: PreferenceChangeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceChangeKind {
    PaperFavorited(String),
    PaperUnfavorited(String),
    AuthorFollowed(String),
    AuthorUnfollowed(String),
}

impl PreferenceChange {
    pub fn new(user_id: UserId, kind: PreferenceChangeKind) -> Self {
        Self { user_id, kind }
    }
}
