use bookshelf_core::db::open_db_in_memory;
use bookshelf_core::{Book, BookRepository, NewBook, RepoError, SqliteBookRepository};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo
        .create_book(&NewBook::new("Book 1", "Author 1", date(2023, 1, 1)))
        .unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Book {
            id,
            title: "Book 1".to_string(),
            author: "Author 1".to_string(),
            published_date: date(2023, 1, 1),
        }
    );
}

#[test]
fn get_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    assert!(repo.get_book(42).unwrap().is_none());
}

#[test]
fn list_is_ordered_by_creation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    for n in 1..=3 {
        repo.create_book(&NewBook::new(
            format!("Book {n}"),
            format!("Author {n}"),
            date(2023, 1, n),
        ))
        .unwrap();
    }

    let titles: Vec<String> = repo
        .list_books()
        .unwrap()
        .into_iter()
        .map(|book| book.title)
        .collect();
    assert_eq!(titles, vec!["Book 1", "Book 2", "Book 3"]);
    assert_eq!(repo.list_books().unwrap(), repo.list_books().unwrap());
}

#[test]
fn update_existing_book() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let id = repo
        .create_book(&NewBook::new("draft", "someone", date(2020, 2, 2)))
        .unwrap();
    let mut book = repo.get_book(id).unwrap().unwrap();
    book.title = "final".to_string();
    book.published_date = date(2021, 3, 3);
    repo.update_book(&book).unwrap();

    assert_eq!(repo.get_book(id).unwrap().unwrap(), book);
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let ghost = Book {
        id: 7,
        title: "ghost".to_string(),
        author: "nobody".to_string(),
        published_date: date(2000, 1, 1),
    };
    let err = repo.update_book(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(7)));
}

#[test]
fn delete_removes_row_and_second_delete_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let first = repo
        .create_book(&NewBook::new("Book 1", "Author 1", date(2023, 1, 1)))
        .unwrap();
    let second = repo
        .create_book(&NewBook::new("Book 2", "Author 2", date(2023, 1, 2)))
        .unwrap();

    repo.delete_book(first).unwrap();
    assert_eq!(repo.count_books().unwrap(), 1);
    assert!(repo.get_book(first).unwrap().is_none());
    assert!(repo.get_book(second).unwrap().is_some());

    let err = repo.delete_book(first).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == first));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let first = repo
        .create_book(&NewBook::new("a", "a", date(2023, 1, 1)))
        .unwrap();
    repo.delete_book(first).unwrap();
    let second = repo
        .create_book(&NewBook::new("b", "b", date(2023, 1, 1)))
        .unwrap();

    assert!(second > first);
}

#[test]
fn corrupted_date_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO books (title, author, published_date) VALUES ('x', 'y', 'yesterday');",
        [],
    )
    .unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.list_books().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("yesterday")));
}
