//! Core domain logic for the to-do store.
//! This crate owns the data model, storage schema and bootstrap rules.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use auth::password::{hash_password, verify_password, PasswordError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo_item::{
    display_text, striked_text, NewTodoItem, TodoItem, TodoItemId, STRIKE_CHARACTER,
    TODO_TEXT_MAX_CHARS,
};
pub use model::user::{NewUser, User, UserId};
pub use model::validation::ValidationError;
pub use repo::error::{RepoError, RepoResult};
pub use repo::todo_repo::{SqliteTodoRepository, TodoListQuery, TodoRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use service::seed_service::{ensure_admin_user, seed_admin, AdminAccount, SeedOutcome};
pub use service::todo_service::TodoService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
