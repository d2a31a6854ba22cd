//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo
//! session inside persists itself on every change.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{
    FilterKind, PersistenceBridge, Theme, ThemePreference, Todo, TodoId, TodoSession,
};

use crate::config::AppConfig;
use crate::storage::BrowserStorage;

/// Todo session persisted to `window.localStorage`
pub type BrowserSession = TodoSession<PersistenceBridge<BrowserStorage>>;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Todos of this session, hydrated once from storage
    pub session: BrowserSession,
    /// Completion filter of the todo view
    pub filter: FilterKind,
    /// Search text of the todo view
    pub search: String,
    /// Active colour scheme
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let bridge = PersistenceBridge::with_key(BrowserStorage, config.todos_key.clone());
        let theme = ThemePreference::with_key(BrowserStorage, config.theme_key.clone()).load();
        Self {
            session: TodoSession::open(bridge),
            filter: FilterKind::All,
            search: String::new(),
            theme,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Todos passing the current filter and search, in list order
pub fn store_visible_todos(store: &AppStore) -> Vec<Todo> {
    let filter = store.filter().get();
    let search = store.search().get();
    store.session().read().store().query(filter, &search)
}

/// (total, completed) counts of the whole list
pub fn store_counts(store: &AppStore) -> (usize, usize) {
    let session = store.session().read();
    let todos = session.store();
    (todos.len(), todos.count(FilterKind::Complete))
}

/// Add a todo. Returns false when the text was empty.
pub fn store_add_todo(store: &AppStore, text: &str) -> bool {
    match store.session().write().add(text) {
        Ok(id) => id.is_some(),
        Err(e) => {
            log::warn!("[STORE] todo added but not saved: {}", e);
            true
        }
    }
}

/// Replace a todo's text. Returns false when the text was empty.
pub fn store_edit_todo(store: &AppStore, id: TodoId, text: &str) -> bool {
    let outcome = store.session().write().edit(id, text);
    settle("edit", id, outcome)
}

pub fn store_delete_todo(store: &AppStore, id: TodoId) -> bool {
    let outcome = store.session().write().delete(id);
    settle("delete", id, outcome)
}

pub fn store_toggle_todo(store: &AppStore, id: TodoId) -> bool {
    let outcome = store.session().write().toggle_completed(id);
    settle("toggle", id, outcome)
}

/// A failed save still leaves the in-memory change applied
fn settle(action: &str, id: TodoId, outcome: Result<bool, todo_core::PersistError>) -> bool {
    match outcome {
        Ok(changed) => changed,
        Err(e) => {
            log::warn!("[STORE] {} {} applied but not saved: {}", action, id, e);
            true
        }
    }
}

pub fn store_set_filter(store: &AppStore, filter: FilterKind) {
    *store.filter().write() = filter;
}

pub fn store_set_search(store: &AppStore, search: String) {
    *store.search().write() = search;
}

/// Flip the colour scheme and remember the choice
pub fn store_toggle_theme(store: &AppStore, config: &AppConfig) -> Theme {
    let next = store.theme().get_untracked().toggled();
    *store.theme().write() = next;
    let pref = ThemePreference::with_key(BrowserStorage, config.theme_key.clone());
    if let Err(e) = pref.save(next) {
        log::warn!("[STORE] theme not saved: {}", e);
    }
    next
}
