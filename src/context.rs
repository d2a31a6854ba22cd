//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::store::{AppState, AppStore};

/// Hydrate the app store and provide it with the config to all children
pub fn provide_app_context(config: AppConfig) -> AppStore {
    let store = Store::new(AppState::new(&config));
    provide_context(config);
    provide_context(store);
    store
}
