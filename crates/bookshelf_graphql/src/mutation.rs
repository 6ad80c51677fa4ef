//! Write surface: create, update and delete.
//!
//! `createBook` propagates failures as top-level GraphQL errors, while
//! `updateBook` and `deleteBook` always answer with their result union.

use crate::types::{BookResponse, BookType, BookUpdateInput, DeleteResponse, OperationError};
use crate::with_book_service;
use async_graphql::{Context, Object, Result};
use bookshelf_core::{BookPatch, BookServiceError, DbHandle, RepoError};
use log::{debug, warn};

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a book from the supplied fields and returns it.
    async fn create_book(&self, ctx: &Context<'_>, data: BookUpdateInput) -> Result<BookType> {
        let db = ctx.data::<DbHandle>()?;
        let fields = BookPatch::from(data);
        let created = with_book_service(db, |service| service.create_book(&fields)).map_err(
            |err: RepoError| {
                warn!("event=graphql_resolve module=mutation field=createBook status=error error={err}");
                err.to_string()
            },
        )?;

        debug!(
            "event=graphql_resolve module=mutation field=createBook status=ok book_id={}",
            created.id
        );
        Ok(created.into())
    }

    /// Applies the non-null fields of `data` to an existing book.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        book_id: i32,
        data: BookUpdateInput,
    ) -> BookResponse {
        let db = match ctx.data::<DbHandle>() {
            Ok(db) => db,
            Err(err) => return BookResponse::Error(OperationError::fault(err.message)),
        };
        let patch = BookPatch::from(data);
        let result = with_book_service(db, |service| {
            service.update_book(i64::from(book_id), &patch)
        });

        log_outcome("updateBook", book_id, result.as_ref().err());
        result.into()
    }

    /// Permanently deletes a book.
    async fn delete_book(&self, ctx: &Context<'_>, book_id: i32) -> DeleteResponse {
        let db = match ctx.data::<DbHandle>() {
            Ok(db) => db,
            Err(err) => return DeleteResponse::Error(OperationError::fault(err.message)),
        };
        let result = with_book_service(db, |service| service.delete_book(i64::from(book_id)));

        log_outcome("deleteBook", book_id, result.as_ref().err());
        result.into()
    }
}

fn log_outcome(field: &str, book_id: i32, error: Option<&BookServiceError>) {
    match error {
        None => debug!(
            "event=graphql_resolve module=mutation field={field} status=ok book_id={book_id}"
        ),
        Some(BookServiceError::NotFound(_)) => debug!(
            "event=graphql_resolve module=mutation field={field} status=error book_id={book_id} error_code=not_found"
        ),
        Some(err) => warn!(
            "event=graphql_resolve module=mutation field={field} status=error book_id={book_id} error_code=fault error={err}"
        ),
    }
}
