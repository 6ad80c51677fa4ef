//! Shared connection handle for request-scoped access.
//!
//! # Responsibility
//! - Let concurrent request handlers share one migrated `Connection`.
//! - Scope each borrow of the connection to a single closure call.
//!
//! # Invariants
//! - At most one caller holds the connection at a time.
//! - A poisoned lock surfaces as `DbError::LockPoisoned`, never as a panic.

use super::DbError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Cloneable handle to one SQLite connection.
#[derive(Clone)]
pub struct DbHandle {
    conn: Arc<Mutex<Connection>>,
}

impl DbHandle {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `f` with exclusive access to the connection.
    pub fn with_conn<T, E>(&self, f: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let guard = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        f(&guard)
    }
}

impl std::fmt::Debug for DbHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbHandle").finish_non_exhaustive()
    }
}
