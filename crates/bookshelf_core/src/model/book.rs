//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical stored record (`Book`).
//! - Define the create payload (`NewBook`) and sparse update payload (`BookPatch`).
//! - Parse wire-level date strings into calendar dates.
//!
//! # Invariants
//! - `id` is assigned by storage and never changes afterwards.
//! - `published_date` is a calendar date rendered as `YYYY-MM-DD`.
//! - Applying a patch is all-or-nothing: a field error leaves the record untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier for a book row.
pub type BookId = i64;

/// Wire and storage format for `published_date`.
pub const PUBLISHED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Field-level validation failures for book payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// A field required at creation time was not supplied.
    MissingField(&'static str),
    /// `published_date` is not a valid `YYYY-MM-DD` date.
    InvalidPublishedDate(String),
    /// Persisted ids are strictly positive.
    InvalidId(BookId),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidPublishedDate(value) => {
                write!(f, "invalid published_date \"{value}\": expected YYYY-MM-DD")
            }
            Self::InvalidId(id) => write!(f, "invalid book id: {id}"),
        }
    }
}

impl Error for BookValidationError {}

/// Canonical stored book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
}

impl Book {
    /// Checks invariants that hold for every persisted row.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.id <= 0 {
            return Err(BookValidationError::InvalidId(self.id));
        }
        Ok(())
    }
}

/// Payload for inserting a new book. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_date,
        }
    }

    /// Builds an insert payload from a sparse field set.
    ///
    /// # Errors
    /// - `MissingField` for the first absent field, checked in declaration order.
    /// - `InvalidPublishedDate` when the date string does not parse.
    pub fn from_patch(patch: &BookPatch) -> Result<Self, BookValidationError> {
        let title = patch
            .title
            .clone()
            .ok_or(BookValidationError::MissingField("title"))?;
        let author = patch
            .author
            .clone()
            .ok_or(BookValidationError::MissingField("author"))?;
        let published_date = match patch.published_date.as_deref() {
            Some(value) => parse_published_date(value)?,
            None => return Err(BookValidationError::MissingField("published_date")),
        };

        Ok(Self {
            title,
            author,
            published_date,
        })
    }
}

/// Sparse field set used by update (and as raw create input).
///
/// `None` means "leave unchanged". `published_date` stays in its wire form
/// until applied, so lookups fail before date parsing does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<String>,
}

impl BookPatch {
    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.published_date.is_none()
    }

    /// Overwrites every field of `book` for which the patch carries a value.
    pub fn apply_to(&self, book: &mut Book) -> Result<(), BookValidationError> {
        let published_date = self
            .published_date
            .as_deref()
            .map(parse_published_date)
            .transpose()?;

        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(published_date) = published_date {
            book.published_date = published_date;
        }
        Ok(())
    }
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
pub fn parse_published_date(value: &str) -> Result<NaiveDate, BookValidationError> {
    NaiveDate::parse_from_str(value, PUBLISHED_DATE_FORMAT)
        .map_err(|_| BookValidationError::InvalidPublishedDate(value.to_string()))
}
