//! Book use-case service.
//!
//! # Responsibility
//! - Provide list/create/update/delete entry points for API callers.
//! - Turn repository outcomes into explicit not-found vs. fault results.
//!
//! # Invariants
//! - Update looks the record up before touching patch fields, so a missing
//!   id is always reported as `NotFound`.
//! - An empty patch still performs a save and returns the stored record.
//! - Service APIs never bypass repository validation.

use crate::model::book::{Book, BookId, BookPatch, NewBook};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome error for update/delete use-cases.
#[derive(Debug)]
pub enum BookServiceError {
    /// Target book does not exist.
    NotFound(BookId),
    /// Validation or persistence failure.
    Repo(RepoError),
}

impl Display for BookServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for BookServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<crate::db::DbError> for BookServiceError {
    fn from(value: crate::db::DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

/// Use-case service wrapper for book operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every book in creation order.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    /// Gets one book by id.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Counts stored books.
    pub fn count_books(&self) -> RepoResult<u64> {
        self.repo.count_books()
    }

    /// Creates a book from a sparse field set and returns the stored record.
    ///
    /// # Contract
    /// - All three fields must be present; otherwise `RepoError::Validation`.
    /// - The returned record is read back from storage.
    pub fn create_book(&self, fields: &BookPatch) -> RepoResult<Book> {
        let new_book = NewBook::from_patch(fields)?;
        let id = self.repo.create_book(&new_book)?;
        let created = self.repo.get_book(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created book {id} not found in read-back"))
        })?;

        info!("event=book_create module=service status=ok book_id={id}");
        Ok(created)
    }

    /// Applies a sparse patch to an existing book.
    ///
    /// # Contract
    /// - Missing id: `BookServiceError::NotFound`, nothing written.
    /// - Fields set to `None` in the patch keep their stored value.
    pub fn update_book(&self, id: BookId, patch: &BookPatch) -> Result<Book, BookServiceError> {
        let Some(mut book) = self.repo.get_book(id)? else {
            debug!("event=book_update module=service status=error book_id={id} error_code=not_found");
            return Err(BookServiceError::NotFound(id));
        };

        patch.apply_to(&mut book).map_err(RepoError::from)?;
        self.repo.update_book(&book)?;

        info!(
            "event=book_update module=service status=ok book_id={id} empty_patch={}",
            patch.is_empty()
        );
        Ok(book)
    }

    /// Permanently deletes a book.
    ///
    /// Not idempotent: deleting an already removed id reports `NotFound`.
    pub fn delete_book(&self, id: BookId) -> Result<(), BookServiceError> {
        if self.repo.get_book(id)?.is_none() {
            debug!("event=book_delete module=service status=error book_id={id} error_code=not_found");
            return Err(BookServiceError::NotFound(id));
        }

        self.repo.delete_book(id)?;
        info!("event=book_delete module=service status=ok book_id={id}");
        Ok(())
    }
}
