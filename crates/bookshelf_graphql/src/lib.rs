//! GraphQL API for the bookshelf service.
//!
//! - [`QueryRoot`]: `books`
//! - [`MutationRoot`]: `createBook`, `updateBook`, `deleteBook`
//! - [`http`]: axum router serving the schema at `/graphql`

pub mod http;
mod mutation;
mod query;
mod schema;
pub mod types;

pub use http::{router, serve, ServerConfig};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{build_schema, schema_sdl, BookshelfSchema};

use bookshelf_core::{BookService, DbError, DbHandle, SqliteBookRepository};

/// Runs one service call while holding the shared connection.
pub(crate) fn with_book_service<T, E>(
    db: &DbHandle,
    f: impl FnOnce(&BookService<SqliteBookRepository<'_>>) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<DbError>,
{
    db.with_conn(|conn| f(&BookService::new(SqliteBookRepository::new(conn))))
}
