use crate::{FollowedAuthor, PLACEHOLDER_AUTHOR_NAME};

use googletest::prelude::*;

#[test]
fn given_missing_name_then_placeholder_used() {
    let author = FollowedAuthor::new("a1", None);

    assert_that!(author.name.as_str(), eq(PLACEHOLDER_AUTHOR_NAME));
}

#[test]
fn given_current_and_legacy_shapes_then_all_parse() {
    let current: FollowedAuthor =
        serde_json::from_str(r#"{"authorId":"a1","name":"Jane Doe"}"#).unwrap();
    let legacy_object: FollowedAuthor =
        serde_json::from_str(r#"{"id":"a2","name":"John Roe","affiliations":["USP"]}"#).unwrap();
    let legacy_id: FollowedAuthor = serde_json::from_str(r#""a3""#).unwrap();

    assert_that!(current, eq(&FollowedAuthor::new("a1", Some("Jane Doe".to_string()))));
    assert_that!(legacy_object.author_id.as_str(), eq("a2"));
    assert_that!(legacy_object.name.as_str(), eq("John Roe"));
    assert_that!(legacy_id.name.as_str(), eq(PLACEHOLDER_AUTHOR_NAME));
}

#[test]
fn given_author_when_serialized_then_uses_author_id_key() {
    let author = FollowedAuthor::new("a1", Some("Jane".to_string()));

    let value = serde_json::to_value(&author).unwrap();

    assert_that!(value["authorId"].as_str(), some(eq("a1")));
    assert_that!(value["name"].as_str(), some(eq("Jane")));
}
