//! Domain models for to-do items and user accounts.
//!
//! # Responsibility
//! - Define typed records mirrored by the `todo_items` and `users` tables.
//! - Validate field constraints before anything reaches storage.
//!
//! # Invariants
//! - Identifiers are assigned by storage; unsaved payloads carry no ID.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod todo_item;
pub mod user;
pub mod validation;
