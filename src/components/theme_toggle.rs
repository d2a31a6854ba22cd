//! Theme Toggle Component

use leptos::prelude::*;

use crate::config::use_config;
use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};
use crate::theme::toggle_icon;

/// Switches between light and dark; the choice survives reloads
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| {
                store_toggle_theme(&store, &config);
            }
        >
            {move || toggle_icon(store.theme().get())}
        </button>
    }
}
