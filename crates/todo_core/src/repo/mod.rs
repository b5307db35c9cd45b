//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce model `validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`,
//!   `DuplicateUsername`) in addition to DB transport errors.
//! - Repositories only wrap connections at the latest schema version.

pub mod error;
mod schema;
pub mod todo_repo;
pub mod user_repo;
