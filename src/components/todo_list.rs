//! Todo List Component
//!
//! Renders the filtered, searched view of the store. Rows are keyed by
//! `TodoId`, so actions hit the right todo whatever the filter.

use leptos::prelude::*;

use crate::components::{EditState, TodoRow};
use crate::store::{store_visible_todos, use_app_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let edit = EditState::new();

    let visible = move || store_visible_todos(&store);

    // Mutable fields are part of the row key so edits and toggles re-render it
    view! {
        <Show
            when=move || !visible().is_empty()
            fallback=|| view! {
                <div class="empty-state">
                    <span class="empty-icon">"📝"</span>
                    <p>"No todos"</p>
                </div>
            }
        >
            <ul class="todo-list">
                <For
                    each=visible
                    key=|todo| (todo.id, todo.text.clone(), todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo edit=edit /> }
                />
            </ul>
        </Show>
    }
}
