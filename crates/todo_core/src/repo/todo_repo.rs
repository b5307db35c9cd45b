//! To-do item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `todo_items` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Delete is a hard delete.

use crate::model::todo_item::{NewTodoItem, TodoItem, TodoItemId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::{bool_to_int, ensure_table, int_to_bool};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TODO_SELECT_SQL: &str = "SELECT id, text, done FROM todo_items";
const TODO_COLUMNS: &[&str] = &["id", "text", "done"];

/// Query options for listing to-do items.
#[derive(Debug, Clone, Default)]
pub struct TodoListQuery {
    /// Restrict to pending (`Some(false)`) or completed (`Some(true)`) items.
    pub done: Option<bool>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for to-do item CRUD operations.
pub trait TodoRepository {
    fn create_item(&self, item: &NewTodoItem) -> RepoResult<TodoItem>;
    fn update_item(&self, item: &TodoItem) -> RepoResult<()>;
    fn get_item(&self, id: TodoItemId) -> RepoResult<Option<TodoItem>>;
    fn list_items(&self, query: &TodoListQuery) -> RepoResult<Vec<TodoItem>>;
    fn delete_item(&self, id: TodoItemId) -> RepoResult<()>;
}

/// SQLite-backed to-do repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    /// Wraps a connection after checking its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` on a foreign layout.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "todo_items", TODO_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn create_item(&self, item: &NewTodoItem) -> RepoResult<TodoItem> {
        item.validate()?;

        self.conn.execute(
            "INSERT INTO todo_items (text, done) VALUES (?1, ?2);",
            params![item.text.as_str(), bool_to_int(item.done)],
        )?;

        Ok(TodoItem {
            id: self.conn.last_insert_rowid(),
            text: item.text.clone(),
            done: item.done,
        })
    }

    fn update_item(&self, item: &TodoItem) -> RepoResult<()> {
        item.validate()?;

        let changed = self.conn.execute(
            "UPDATE todo_items SET text = ?1, done = ?2 WHERE id = ?3;",
            params![item.text.as_str(), bool_to_int(item.done), item.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(item.id));
        }

        Ok(())
    }

    fn get_item(&self, id: TodoItemId) -> RepoResult<Option<TodoItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn list_items(&self, query: &TodoListQuery) -> RepoResult<Vec<TodoItem>> {
        let mut sql = format!("{TODO_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(done) = query.done {
            sql.push_str(" AND done = ?");
            bind_values.push(Value::Integer(bool_to_int(done)));
        }

        sql.push_str(" ORDER BY id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_todo_row(row)?);
        }

        Ok(items)
    }

    fn delete_item(&self, id: TodoItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todo_items WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<TodoItem> {
    let item = TodoItem {
        id: row.get("id")?,
        text: row.get("text")?,
        done: int_to_bool(row.get("done")?, "todo_items.done")?,
    };
    item.validate()?;
    Ok(item)
}
