//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical `Book` record and its write payloads.
//! - Own the field-level rules shared by create and update paths.
//!
//! # Invariants
//! - A persisted `Book` always carries an id, title, author and published date.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod book;
