pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::favorite_paper::FavoritePaper;
pub use models::followed_author::FollowedAuthor;
pub use models::new_user::NewUser;
pub use models::preference_change::{PreferenceChange, PreferenceChangeKind};
pub use models::preference_set::PreferenceSet;
pub use models::user_id::UserId;
pub use models::user_record::UserRecord;

/// Title stored when a paper is favorited without one
pub const PLACEHOLDER_PAPER_TITLE: &str = "Untitled paper";
/// Author line stored when a paper is favorited without one
pub const PLACEHOLDER_PAPER_AUTHORS: &str = "Unknown authors";
/// Name stored when an author is followed without one
pub const PLACEHOLDER_AUTHOR_NAME: &str = "Unknown author";

const USER_ID_PREFIX: &str = "user_";
const USER_ID_SUFFIX_LEN: usize = 9;

#[cfg(test)]
mod tests;
