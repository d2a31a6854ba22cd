//! Todo Core
//!
//! Platform-independent todo list logic: the ordered store, filter/search
//! queries, and persistence to a key-value slot.
//! No browser dependencies, so everything here runs under `cargo test`.

mod filter;
mod item;
mod persist;
mod session;
mod store;
mod theme;


pub use filter::{FilterKind, SearchTerm};
pub use item::{normalize_text, Todo, TodoId, TodoItem};
pub use persist::{
    decode_todos, encode_todos, KeyValueStore, MemoryStore, PersistError, PersistenceBridge,
    TodoRepository, TODOS_KEY,
};
pub use session::TodoSession;
pub use store::TodoStore;
pub use theme::{Theme, ThemePreference, THEME_KEY};
