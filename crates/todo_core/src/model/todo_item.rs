//! To-do item domain model.
//!
//! # Responsibility
//! - Define the persisted to-do record and its creation payload.
//! - Derive the display string shown for pending/completed items.
//!
//! # Invariants
//! - `text` never exceeds `TODO_TEXT_MAX_CHARS` Unicode scalar values.
//! - New items start pending (`done == false`) unless stated otherwise.
//! - Display text is derived on every call and never stored.

use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier of a to-do item.
pub type TodoItemId = i64;

/// Maximum accepted length of `text`, counted in characters.
pub const TODO_TEXT_MAX_CHARS: usize = 200;

/// Combining long stroke overlay (U+0336).
pub const STRIKE_CHARACTER: char = '\u{0336}';

/// Persisted to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Auto-assigned row identifier.
    pub id: TodoItemId,
    pub text: String,
    pub done: bool,
}

/// Creation payload for a to-do item, before storage assigns an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodoItem {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl NewTodoItem {
    /// Creates a pending item payload.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    /// Creates an item payload with an explicit completion flag.
    pub fn with_done(text: impl Into<String>, done: bool) -> Self {
        Self {
            text: text.into(),
            done,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text(&self.text)
    }

    /// Same derivation as [`TodoItem::display_text`], before persistence.
    pub fn display_text(&self) -> String {
        display_text(&self.text, self.done)
    }
}

impl TodoItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text(&self.text)
    }

    /// Returns the text decorated with a strikethrough mark after every character.
    pub fn striked_text(&self) -> String {
        striked_text(&self.text)
    }

    /// Returns the string shown to users.
    ///
    /// Pending items render their raw text; completed items render
    /// [`TodoItem::striked_text`].
    pub fn display_text(&self) -> String {
        display_text(&self.text, self.done)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_pending(&mut self) {
        self.done = false;
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

impl Display for TodoItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Interleaves every character of `text` with [`STRIKE_CHARACTER`].
pub fn striked_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.chars().count() * 2);
    for letter in text.chars() {
        out.push(letter);
        out.push(STRIKE_CHARACTER);
    }
    out
}

/// Display derivation shared by persisted and unsaved items.
pub fn display_text(text: &str, done: bool) -> String {
    if done {
        striked_text(text)
    } else {
        text.to_string()
    }
}

fn validate_text(text: &str) -> Result<(), ValidationError> {
    let len = text.chars().count();
    if len > TODO_TEXT_MAX_CHARS {
        return Err(ValidationError::TextTooLong {
            len,
            max: TODO_TEXT_MAX_CHARS,
        });
    }
    Ok(())
}
