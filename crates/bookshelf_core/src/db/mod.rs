//! Book store: SQLite connection setup, schema and shared access.
//!
//! `open_db_at` is the single entry used by the server: a file path opens
//! (and creates) a database file, `":memory:"` opens a throwaway one. Either
//! way the `books` table is installed by `migrations` before the connection
//! is returned, and `DbHandle` then hands that one connection to request
//! handlers one at a time.
//!
//! # Invariants
//! - `PRAGMA user_version` equals the number of applied migrations.
//! - A database written by a newer schema is refused, never downgraded.
//! - Lock poisoning is reported as `DbError::LockPoisoned`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod handle;
pub mod migrations;
mod open;

pub use handle::DbHandle;
pub use open::{open_db, open_db_at, open_db_in_memory, MEMORY_DB_LOCATION};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A previous holder of the shared connection panicked mid-operation.
    LockPoisoned,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::LockPoisoned => write!(f, "database connection lock poisoned"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::LockPoisoned => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
