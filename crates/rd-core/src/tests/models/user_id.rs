use crate::UserId;

use googletest::prelude::*;

#[test]
fn given_generated_id_then_has_prefix_timestamp_and_base36_suffix() {
    let id = UserId::generate();

    let parts: Vec<&str> = id.as_str().split('_').collect();
    assert_that!(parts.len(), eq(3));
    assert_that!(parts[0], eq("user"));
    assert_that!(parts[1].parse::<i64>().is_ok(), eq(true));
    assert_that!(parts[2].len(), eq(9));
    assert_that!(
        parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
        eq(true)
    );
}

#[test]
fn given_two_generated_ids_then_they_differ() {
    let first = UserId::generate();
    let second = UserId::generate();

    assert_that!(first, not(eq(&second)));
}

#[test]
fn given_user_id_when_serialized_then_is_plain_string() {
    let id = UserId::from("user_1_abc");

    let json = serde_json::to_string(&id).unwrap();

    assert_that!(json.as_str(), eq("\"user_1_abc\""));
}
