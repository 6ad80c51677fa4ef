//! Read-only query surface.

use crate::types::BookType;
use crate::with_book_service;
use async_graphql::{Context, Object, Result};
use bookshelf_core::{DbHandle, RepoError};
use log::debug;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every stored book, in creation order.
    ///
    /// Storage faults surface as top-level GraphQL errors.
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<BookType>> {
        let db = ctx.data::<DbHandle>()?;
        let books = with_book_service(db, |service| service.list_books())
            .map_err(|err: RepoError| err.to_string())?;

        debug!(
            "event=graphql_resolve module=query field=books status=ok count={}",
            books.len()
        );
        Ok(books.into_iter().map(BookType::from).collect())
    }
}
