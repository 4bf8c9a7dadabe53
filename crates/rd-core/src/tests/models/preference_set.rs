use crate::{FavoritePaper, FollowedAuthor, PreferenceSet, UserId};

use googletest::prelude::*;

fn paper(id: &str, title: &str) -> FavoritePaper {
    FavoritePaper::new(id, Some(title.to_string()), None, None)
}

#[test]
fn given_empty_set_then_has_no_entries() {
    let set = PreferenceSet::empty(UserId::from("u1"));

    assert_that!(set.user_id, eq(&UserId::from("u1")));
    assert_that!(set.favorite_papers, is_empty());
    assert_that!(set.followed_authors, is_empty());
    assert_that!(set.is_empty(), eq(true));
}

#[test]
fn given_paper_added_twice_then_first_entry_kept() {
    let mut set = PreferenceSet::empty(UserId::from("u1"));

    assert_that!(set.add_paper(paper("p1", "First")), eq(true));
    assert_that!(set.add_paper(paper("p1", "Second")), eq(false));

    assert_that!(set.favorite_papers.len(), eq(1));
    assert_that!(set.favorite_papers[0].title.as_str(), eq("First"));
}

#[test]
fn given_papers_added_then_insertion_order_preserved() {
    let mut set = PreferenceSet::empty(UserId::from("u1"));
    set.add_paper(paper("p2", "B"));
    set.add_paper(paper("p1", "A"));
    set.add_paper(paper("p3", "C"));

    let ids: Vec<&str> = set.favorite_papers.iter().map(|p| p.paper_id.as_str()).collect();

    assert_that!(ids, eq(&vec!["p2", "p1", "p3"]));
}

#[test]
fn given_absent_paper_when_removed_then_reports_nothing_removed() {
    let mut set = PreferenceSet::empty(UserId::from("u1"));
    set.add_paper(paper("p1", "A"));

    assert_that!(set.remove_paper("missing"), eq(false));
    assert_that!(set.remove_paper("p1"), eq(true));
    assert_that!(set.has_paper("p1"), eq(false));
}

#[test]
fn given_author_followed_twice_then_one_entry_with_first_name() {
    let mut set = PreferenceSet::empty(UserId::from("u1"));

    set.add_author(FollowedAuthor::new("auth-1", Some("Jane Doe".to_string())));
    set.add_author(FollowedAuthor::new("auth-1", Some("Jane Doe Updated".to_string())));

    assert_that!(set.followed_authors.len(), eq(1));
    assert_that!(set.followed_authors[0].name.as_str(), eq("Jane Doe"));
    assert_that!(set.remove_author("auth-1"), eq(true));
    assert_that!(set.has_author("auth-1"), eq(false));
}

#[test]
fn given_set_json_without_lists_then_lists_default_to_empty() {
    let set: PreferenceSet = serde_json::from_str(r#"{"userId":"u1"}"#).unwrap();

    assert_that!(set, eq(&PreferenceSet::empty(UserId::from("u1"))));
}
