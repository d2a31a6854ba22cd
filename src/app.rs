//! Todo SPA App
//!
//! Root component: context providers, theme application and routing.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::NavBar;
use crate::config::AppConfig;
use crate::context::provide_app_context;
use crate::pages::{HomePage, ProductsPage, TodosPage};
use crate::store::AppStateStoreFields;
use crate::theme::apply_theme;

#[component]
pub fn App() -> impl IntoView {
    // Hydrates the todo session from localStorage
    let store = provide_app_context(AppConfig::default());

    // Keep <html data-theme> in sync with the store
    Effect::new(move |_| apply_theme(store.theme().get()));

    view! {
        <Router>
            <NavBar />
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("todos") view=TodosPage />
                    <Route path=StaticSegment("products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}
