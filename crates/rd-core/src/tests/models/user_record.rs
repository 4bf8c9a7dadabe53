use crate::{NewUser, UserId, UserRecord};

use googletest::prelude::*;

fn sample_record() -> UserRecord {
    UserRecord::new(
        UserId::from("user_1_abcdefghi"),
        NewUser::new("Ada", "Lovelace", "Ada@Example.com", "s3cret").with_orcid("0000-0001"),
    )
}

#[test]
fn given_record_then_email_matches_case_insensitively() {
    let record = sample_record();

    assert_that!(record.email_matches("ada@example.com"), eq(true));
    assert_that!(record.email_matches("ADA@EXAMPLE.COM"), eq(true));
    assert_that!(record.email_matches("bob@example.com"), eq(false));
}

#[test]
fn given_record_then_orcid_matches_exactly() {
    let record = sample_record();

    assert_that!(record.orcid_matches("0000-0001"), eq(true));
    assert_that!(record.orcid_matches("0000-0002"), eq(false));
}

#[test]
fn given_record_when_serialized_then_uses_camel_case_fields() {
    let record = sample_record();

    let value = serde_json::to_value(&record).unwrap();

    assert_that!(value["id"].as_str(), some(eq("user_1_abcdefghi")));
    assert_that!(value["givenName"].as_str(), some(eq("Ada")));
    assert_that!(value["familyName"].as_str(), some(eq("Lovelace")));
    assert_that!(value["orcidIdentifier"].as_str(), some(eq("0000-0001")));
    assert_that!(value["credentialSecret"].as_str(), some(eq("s3cret")));
    assert_that!(value["createdAt"].is_string(), eq(true));
}

#[test]
fn given_record_without_orcid_when_serialized_then_field_omitted() {
    let record = UserRecord::new(
        UserId::from("user_2"),
        NewUser::new("Alan", "Turing", "alan@example.com", "pw"),
    );

    let value = serde_json::to_value(&record).unwrap();

    assert_that!(value.get("orcidIdentifier"), none());
}

#[test]
fn given_stored_json_when_deserialized_then_record_restored() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();

    let restored: UserRecord = serde_json::from_str(&json).unwrap();

    assert_that!(restored, eq(&record));
    assert_that!(restored.display_name(), eq("Ada Lovelace"));
}
