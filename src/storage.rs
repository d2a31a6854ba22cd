//! Browser Storage Backend
//!
//! `KeyValueStore` over `window.localStorage`. The handle is looked up on
//! every call so the backend itself stays a zero-sized value.

use todo_core::{KeyValueStore, PersistError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, PersistError> {
        let window = web_sys::window().ok_or(PersistError::Unavailable)?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(PersistError::Unavailable)
    }
}

fn js_error(err: JsValue) -> PersistError {
    PersistError::Backend(format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        // setItem throws on quota exhaustion
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}
