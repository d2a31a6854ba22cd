//! Todos Page
//!
//! Search, filter and theme controls above the todo list, with a floating
//! button that opens the new-todo dialog.

use leptos::prelude::*;

use crate::components::{FilterSelect, NewTodoDialog, ThemeToggle, TodoList};
use crate::store::{
    store_counts, store_set_filter, store_set_search, use_app_store, AppStateStoreFields,
};

#[component]
pub fn TodosPage() -> impl IntoView {
    let store = use_app_store();
    let dialog_open = RwSignal::new(false);

    let count_label = move || {
        let (total, done) = store_counts(&store);
        format!("{} todos, {} complete", total, done)
    };

    view! {
        <div class="todos-page">
            <div class="toolbar">
                <label class="search-field">
                    <input
                        type="text"
                        class="outlined-input"
                        placeholder="Search todos"
                        prop:value=move || store.search().get()
                        on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                    />
                    <span class="search-icon">"🔍"</span>
                </label>
                <FilterSelect
                    value=Signal::derive(move || store.filter().get())
                    on_change=move |kind| store_set_filter(&store, kind)
                />
                <ThemeToggle />
            </div>

            <div class="todo-container">
                <TodoList />
            </div>

            <p class="todo-count">{count_label}</p>

            <button class="fab" aria-label="add" on:click=move |_| dialog_open.set(true)>
                "+"
            </button>

            <NewTodoDialog open=dialog_open />
        </div>
    }
}
