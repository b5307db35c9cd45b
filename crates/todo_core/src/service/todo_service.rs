//! To-do use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for to-do items.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::todo_item::{NewTodoItem, TodoItem, TodoItemId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::todo_repo::{TodoListQuery, TodoRepository};
use log::debug;

/// Use-case service wrapper for to-do CRUD operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists an item.
    ///
    /// # Contract
    /// - `done` defaults to `false`.
    /// - Text longer than the limit fails with `RepoError::Validation`.
    /// - Returns the stored record with its generated ID.
    pub fn create_item(&self, text: impl Into<String>, done: Option<bool>) -> RepoResult<TodoItem> {
        let item = NewTodoItem::with_done(text, done.unwrap_or(false));
        let created = self.repo.create_item(&item)?;
        debug!(
            "event=todo_create module=service status=ok id={} done={}",
            created.id, created.done
        );
        Ok(created)
    }

    pub fn get_item(&self, id: TodoItemId) -> RepoResult<Option<TodoItem>> {
        self.repo.get_item(id)
    }

    pub fn list_items(&self, query: &TodoListQuery) -> RepoResult<Vec<TodoItem>> {
        self.repo.list_items(query)
    }

    /// Replaces the text of an existing item.
    pub fn edit_text(&self, id: TodoItemId, text: impl Into<String>) -> RepoResult<TodoItem> {
        let mut item = self.require_item(id)?;
        item.text = text.into();
        self.repo.update_item(&item)?;
        Ok(item)
    }

    /// Sets the completion flag to an explicit value.
    pub fn set_done(&self, id: TodoItemId, done: bool) -> RepoResult<TodoItem> {
        let mut item = self.require_item(id)?;
        item.done = done;
        self.repo.update_item(&item)?;
        Ok(item)
    }

    /// Flips the completion flag and returns the updated item.
    pub fn toggle_done(&self, id: TodoItemId) -> RepoResult<TodoItem> {
        let mut item = self.require_item(id)?;
        item.toggle();
        self.repo.update_item(&item)?;
        debug!(
            "event=todo_toggle module=service status=ok id={} done={}",
            item.id, item.done
        );
        Ok(item)
    }

    /// Permanently removes an item.
    pub fn delete_item(&self, id: TodoItemId) -> RepoResult<()> {
        self.repo.delete_item(id)
    }

    /// Loads an item and derives its display string.
    pub fn display_text(&self, id: TodoItemId) -> RepoResult<String> {
        Ok(self.require_item(id)?.display_text())
    }

    fn require_item(&self, id: TodoItemId) -> RepoResult<TodoItem> {
        self.repo.get_item(id)?.ok_or(RepoError::NotFound(id))
    }
}
