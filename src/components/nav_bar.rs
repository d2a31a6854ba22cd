//! Navigation Bar Component
//!
//! Links to every page plus the live window width.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::hooks::use_window_width;

#[component]
pub fn NavBar() -> impl IntoView {
    let width = use_window_width();

    view! {
        <header class="nav-bar">
            <nav>
                <A href="/">"Home"</A>
                " | "
                <A href="/todos">"Todos"</A>
                " | "
                <A href="/products">"Products"</A>
            </nav>
            <p class="window-width">{move || format!("Window Width: {:.0}px", width.get())}</p>
        </header>
    }
}
