pub mod favorite_paper;
pub mod followed_author;
pub mod new_user;
pub mod preference_change;
pub mod preference_set;
pub mod user_id;
pub mod user_record;
