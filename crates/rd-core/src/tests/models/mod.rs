mod favorite_paper;
mod followed_author;
mod new_user;
mod preference_set;
mod user_id;
mod user_record;
