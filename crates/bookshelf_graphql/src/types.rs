//! GraphQL-visible types and their mapping to store records.
//!
//! # Responsibility
//! - Declare the object, input, scalar and union types of the public schema.
//! - Translate between wire shapes and `bookshelf_core` records.
//!
//! # Invariants
//! - `Date` is always rendered as `YYYY-MM-DD`.
//! - Not-found outcomes render exactly `Not Found`; every other fault renders
//!   as `An error occurred: <detail>`.

use async_graphql::{
    InputObject, InputValueError, InputValueResult, Scalar, ScalarType, SimpleObject, Union,
    Value, ID,
};
use bookshelf_core::model::book::{parse_published_date, PUBLISHED_DATE_FORMAT};
use bookshelf_core::{Book, BookPatch, BookServiceError};
use chrono::NaiveDate;
use std::fmt::Display;

pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Calendar date scalar, serialized as an ISO-8601 `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(text) => parse_published_date(text)
                .map(Date)
                .map_err(InputValueError::custom),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.format(PUBLISHED_DATE_FORMAT).to_string())
    }
}

/// A stored book.
///
/// Fields other than `id` are nullable on the wire to keep the published
/// schema stable, even though stored rows always carry them.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "BookType")]
pub struct BookType {
    pub id: ID,
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<Date>,
}

impl From<Book> for BookType {
    fn from(book: Book) -> Self {
        Self {
            id: ID(book.id.to_string()),
            title: Some(book.title),
            author: Some(book.author),
            published_date: Some(Date(book.published_date)),
        }
    }
}

/// Sparse field set for `createBook` and `updateBook`.
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "BookUpdateInput")]
pub struct BookUpdateInput {
    pub title: Option<String>,
    pub author: Option<String>,
    /// `YYYY-MM-DD`; validated when applied to a record.
    pub published_date: Option<String>,
}

impl From<BookUpdateInput> for BookPatch {
    fn from(input: BookUpdateInput) -> Self {
        Self {
            title: input.title,
            author: input.author,
            published_date: input.published_date,
        }
    }
}

/// Typed failure variant of the mutation unions.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Error")]
pub struct OperationError {
    pub message: String,
}

impl OperationError {
    pub fn not_found() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn fault(detail: impl Display) -> Self {
        Self {
            message: format!("An error occurred: {detail}"),
        }
    }
}

impl From<BookServiceError> for OperationError {
    fn from(err: BookServiceError) -> Self {
        match err {
            BookServiceError::NotFound(_) => Self::not_found(),
            BookServiceError::Repo(err) => Self::fault(err),
        }
    }
}

/// Completion marker for `deleteBook`.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Success {
    pub result: bool,
}

/// Result of `updateBook`.
#[derive(Debug, Clone, Union)]
pub enum BookResponse {
    Book(BookType),
    Error(OperationError),
}

impl From<Result<Book, BookServiceError>> for BookResponse {
    fn from(result: Result<Book, BookServiceError>) -> Self {
        match result {
            Ok(book) => Self::Book(book.into()),
            Err(err) => Self::Error(err.into()),
        }
    }
}

/// Result of `deleteBook`.
#[derive(Debug, Clone, Union)]
pub enum DeleteResponse {
    Success(Success),
    Error(OperationError),
}

impl From<Result<(), BookServiceError>> for DeleteResponse {
    fn from(result: Result<(), BookServiceError>) -> Self {
        match result {
            Ok(()) => Self::Success(Success { result: true }),
            Err(err) => Self::Error(err.into()),
        }
    }
}
