use crate::{FavoritePaper, PLACEHOLDER_PAPER_AUTHORS, PLACEHOLDER_PAPER_TITLE};

use googletest::prelude::*;

#[test]
fn given_missing_display_fields_then_placeholders_used() {
    let paper = FavoritePaper::new("p1", None, None, None);

    assert_that!(paper.title.as_str(), eq(PLACEHOLDER_PAPER_TITLE));
    assert_that!(paper.authors.as_str(), eq(PLACEHOLDER_PAPER_AUTHORS));
    assert_that!(paper.year, none());
}

#[test]
fn given_current_shape_json_then_parses() {
    let json = r#"{"paperId":"p1","title":"Deep Tea","authors":"A. Leaf, B. Pot","year":2023}"#;

    let paper: FavoritePaper = serde_json::from_str(json).unwrap();

    assert_that!(
        paper,
        eq(&FavoritePaper::new(
            "p1",
            Some("Deep Tea".to_string()),
            Some("A. Leaf, B. Pot".to_string()),
            Some(2023)
        ))
    );
}

#[test]
fn given_bare_id_string_then_parses_with_placeholders() {
    let paper: FavoritePaper = serde_json::from_str(r#""p9""#).unwrap();

    assert_that!(paper.paper_id.as_str(), eq("p9"));
    assert_that!(paper.title.as_str(), eq(PLACEHOLDER_PAPER_TITLE));
}

#[test]
fn given_legacy_object_with_id_and_author_list_then_parses() {
    let json = r#"{"id":"p2","title":"Old Shape","authors":["Ana","Pedro"]}"#;

    let paper: FavoritePaper = serde_json::from_str(json).unwrap();

    assert_that!(paper.paper_id.as_str(), eq("p2"));
    assert_that!(paper.title.as_str(), eq("Old Shape"));
    assert_that!(paper.authors.as_str(), eq("Ana, Pedro"));
    assert_that!(paper.year, none());
}

#[test]
fn given_paper_when_serialized_then_current_shape_written() {
    let paper = FavoritePaper::new("p1", Some("T".to_string()), None, None);

    let value = serde_json::to_value(&paper).unwrap();

    assert_that!(value["paperId"].as_str(), some(eq("p1")));
    assert_that!(value["authors"].as_str(), some(eq(PLACEHOLDER_PAPER_AUTHORS)));
    assert_that!(value.get("year"), none());
    assert_that!(value.get("id"), none());
}
