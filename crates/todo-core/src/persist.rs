//! Persistence Layer
//!
//! `KeyValueStore` abstracts the durable string slots (browser
//! `localStorage` in the app, `MemoryStore` in tests). `PersistenceBridge`
//! keeps one slot in sync with the todo list as a JSON array.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::item::TodoItem;

/// Default slot name for the todo list
pub const TODOS_KEY: &str = "todos";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to encode todos: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Named string slots
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Replace the slot's value
    fn write(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// Load/save the whole todo list
pub trait TodoRepository {
    /// Read the persisted list. Missing or unreadable data yields an empty list.
    fn load(&self) -> Vec<TodoItem>;

    fn save(&self, items: &[TodoItem]) -> Result<(), PersistError>;
}

// ========================
// JSON slot bridge
// ========================

/// Keeps a single key-value slot holding the JSON-encoded todo list
#[derive(Debug, Clone)]
pub struct PersistenceBridge<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, TODOS_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

impl<S: KeyValueStore> TodoRepository for PersistenceBridge<S> {
    fn load(&self) -> Vec<TodoItem> {
        match self.backend.read(&self.key) {
            Ok(raw) => decode_todos(raw.as_deref()),
            Err(e) => {
                log::warn!("[PERSIST] could not read slot '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[TodoItem]) -> Result<(), PersistError> {
        let raw = encode_todos(items)?;
        self.backend.write(&self.key, &raw)?;
        log::debug!("[PERSIST] saved {} todos to '{}'", items.len(), self.key);
        Ok(())
    }
}

pub fn encode_todos(items: &[TodoItem]) -> Result<String, PersistError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode slot contents, falling back to an empty list on absent or
/// malformed data
pub fn decode_todos(raw: Option<&str>) -> Vec<TodoItem> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[PERSIST] discarding malformed todo slot: {}", e);
            Vec::new()
        }
    }
}

// ========================
// In-memory backend
// ========================

/// In-process key-value store. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle onto the same slots that rejects every write
    pub fn read_only(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            read_only: true,
        }
    }

    fn slots(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, PersistError> {
        self.slots
            .lock()
            .map_err(|_| PersistError::Backend("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.slots()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        if self.read_only {
            return Err(PersistError::Backend(format!("slot '{}' is read-only", key)));
        }
        self.slots()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TodoItem> {
        vec![
            TodoItem::new("Task A").with_completed(true),
            TodoItem::new("Task B"),
            TodoItem::new("Task B"),
        ]
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let bridge = PersistenceBridge::new(MemoryStore::new());
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let bridge = PersistenceBridge::new(MemoryStore::new());
        bridge.save(&sample()).expect("save");
        assert_eq!(bridge.load(), sample());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let bridge = PersistenceBridge::new(MemoryStore::new());
        bridge.save(&sample()).unwrap();
        bridge.save(&[TodoItem::new("only")]).unwrap();
        assert_eq!(bridge.load(), vec![TodoItem::new("only")]);
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        let store = MemoryStore::new();
        store.write(TODOS_KEY, "{not json").unwrap();
        let bridge = PersistenceBridge::new(store);
        assert!(bridge.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        assert!(decode_todos(Some(r#"{"text":"not an array"}"#)).is_empty());
        assert!(decode_todos(Some(r#"[{"completed":true}]"#)).is_empty());
    }

    #[test]
    fn test_slot_wire_format() {
        let store = MemoryStore::new();
        let bridge = PersistenceBridge::new(store.clone());
        bridge.save(&sample()[..2]).unwrap();

        let raw = store.read(TODOS_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"text":"Task A","completed":true},{"text":"Task B","completed":false}]"#
        );
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let store = MemoryStore::new();
        let a = PersistenceBridge::with_key(store.clone(), "a");
        let b = PersistenceBridge::with_key(store, "b");
        a.save(&sample()).unwrap();

        assert_eq!(a.key(), "a");
        assert!(b.load().is_empty());
    }

    #[test]
    fn test_read_only_store_rejects_save() {
        let store = MemoryStore::new();
        let bridge = PersistenceBridge::new(store.read_only());
        let err = bridge.save(&sample()).unwrap_err();
        assert!(matches!(err, PersistError::Backend(_)));
        assert!(store.read(TODOS_KEY).unwrap().is_none());
    }
}
