use crate::{MutationRoot, QueryRoot};
use async_graphql::{EmptySubscription, Schema};
use bookshelf_core::DbHandle;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema with the shared connection as context data.
pub fn build_schema(db: DbHandle) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

/// Renders the schema definition language without needing a database.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
