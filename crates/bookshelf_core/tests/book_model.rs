use bookshelf_core::{Book, BookPatch, BookValidationError, NewBook};
use chrono::NaiveDate;

fn stored() -> Book {
    Book {
        id: 3,
        title: "Book 1".to_string(),
        author: "Author 1".to_string(),
        published_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }
}

#[test]
fn patch_overwrites_only_present_fields() {
    let mut book = stored();
    let patch = BookPatch {
        title: Some("Updated Book".to_string()),
        ..BookPatch::default()
    };

    patch.apply_to(&mut book).unwrap();

    assert_eq!(book.title, "Updated Book");
    assert_eq!(book.author, "Author 1");
    assert_eq!(book.published_date, stored().published_date);
}

#[test]
fn empty_patch_is_a_no_op() {
    let mut book = stored();
    let patch = BookPatch::default();

    assert!(patch.is_empty());
    patch.apply_to(&mut book).unwrap();
    assert_eq!(book, stored());
}

#[test]
fn patch_parses_published_date() {
    let mut book = stored();
    let patch = BookPatch {
        published_date: Some("2024-02-29".to_string()),
        ..BookPatch::default()
    };

    patch.apply_to(&mut book).unwrap();
    assert_eq!(
        book.published_date,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn new_book_from_patch_requires_every_field() {
    let patch = BookPatch {
        title: Some("t".to_string()),
        published_date: Some("2023-05-01".to_string()),
        ..BookPatch::default()
    };

    assert_eq!(
        NewBook::from_patch(&patch).unwrap_err(),
        BookValidationError::MissingField("author")
    );
}

#[test]
fn new_book_from_patch_rejects_bad_date() {
    let patch = BookPatch {
        title: Some("t".to_string()),
        author: Some("a".to_string()),
        published_date: Some("May 1st".to_string()),
    };

    let err = NewBook::from_patch(&patch).unwrap_err();
    assert_eq!(err.to_string(), "invalid published_date \"May 1st\": expected YYYY-MM-DD");
}

#[test]
fn validate_rejects_non_positive_id() {
    let mut book = stored();
    book.id = 0;
    assert_eq!(book.validate().unwrap_err(), BookValidationError::InvalidId(0));
}

#[test]
fn book_serializes_date_as_iso_string() {
    let json = serde_json::to_value(stored()).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["published_date"], "2023-01-01");
}
