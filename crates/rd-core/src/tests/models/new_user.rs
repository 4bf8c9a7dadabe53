use crate::{CoreError, NewUser};

use googletest::prelude::*;

#[test]
fn given_complete_profile_when_validated_then_ok() {
    let profile = NewUser::new("Ada", "Lovelace", "ada@example.com", "s3cret");

    assert_that!(profile.validate(), ok(anything()));
}

#[test]
fn given_blank_required_field_when_validated_then_validation_error() {
    let cases = [
        NewUser::new("", "Lovelace", "ada@example.com", "s3cret"),
        NewUser::new("Ada", "  ", "ada@example.com", "s3cret"),
        NewUser::new("Ada", "Lovelace", "", "s3cret"),
        NewUser::new("Ada", "Lovelace", "ada@example.com", ""),
    ];

    for profile in cases {
        let result = profile.validate();
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }
}

#[test]
fn given_missing_orcid_when_validated_then_ok() {
    let profile = NewUser::new("Ada", "Lovelace", "ada@example.com", "s3cret");

    assert_that!(profile.orcid_identifier, none());
    assert_that!(profile.validate(), ok(anything()));
}

#[test]
fn given_blank_orcid_then_normalized_to_none() {
    let profile = NewUser::new("Ada", "Lovelace", "ada@example.com", "s3cret").with_orcid("   ");

    assert_that!(profile.normalized_orcid(), none());
}

#[test]
fn given_padded_orcid_then_normalized_is_trimmed() {
    let profile = NewUser::new("Ada", "Lovelace", "ada@example.com", "s3cret")
        .with_orcid(" 0000-0002-1825-0097 ");

    assert_that!(
        profile.normalized_orcid(),
        some(eq("0000-0002-1825-0097"))
    );
}
