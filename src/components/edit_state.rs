//! Edit State
//!
//! Which todo row is being edited and its draft text.

use leptos::prelude::*;
use todo_core::{Todo, TodoId};

#[derive(Clone, Copy)]
pub struct EditState {
    /// Todo being edited (None = no row in edit mode)
    pub target: RwSignal<Option<TodoId>>,
    pub draft: RwSignal<String>,
}

impl EditState {
    pub fn new() -> Self {
        Self {
            target: RwSignal::new(None),
            draft: RwSignal::new(String::new()),
        }
    }

    pub fn begin(&self, todo: &Todo) {
        self.draft.set(todo.text.clone());
        self.target.set(Some(todo.id));
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.target.get() == Some(id)
    }

    pub fn finish(&self) {
        self.target.set(None);
        self.draft.set(String::new());
    }
}
