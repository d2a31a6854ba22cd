//! Todo Entities
//!
//! `TodoItem` is the persisted record, `Todo` is the in-session entry
//! carrying a stable id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-scoped identifier of a todo
///
/// Assigned when a todo is created or hydrated and never reused within a
/// session. Ids are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(u32);

impl TodoId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TodoId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Persisted todo record: `{"text": ..., "completed": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Display text, stored trimmed
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Create an incomplete item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// A todo entry held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub(crate) fn from_item(id: TodoId, item: TodoItem) -> Self {
        Self {
            id,
            text: item.text,
            completed: item.completed,
        }
    }

    /// The persisted form of this entry
    pub fn to_item(&self) -> TodoItem {
        TodoItem {
            text: self.text.clone(),
            completed: self.completed,
        }
    }
}

/// Trim user input, rejecting empty or whitespace-only text
pub fn normalize_text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
