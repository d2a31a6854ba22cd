//! Todo Row Component
//!
//! Individual todo in the list: checkbox, text or edit field, actions.

use leptos::prelude::*;
use todo_core::Todo;

use crate::components::EditState;
use crate::store::{store_delete_todo, store_edit_todo, store_toggle_todo, use_app_store};

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo, edit: EditState) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();

    // Empty draft keeps the row in edit mode
    let save = move || {
        if store_edit_todo(&store, id, &edit.draft.get_untracked()) {
            edit.finish();
        }
    };

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| {
                    store_toggle_todo(&store, id);
                }
            />

            <Show
                when=move || edit.is_editing(id)
                fallback=move || view! { <span class="todo-text">{text.clone()}</span> }
            >
                <input
                    type="text"
                    class="todo-edit-input"
                    prop:value=move || edit.draft.get()
                    on:input=move |ev| edit.draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            save();
                        }
                    }
                />
            </Show>

            <div class="todo-actions">
                <Show
                    when=move || edit.is_editing(id)
                    fallback=move || {
                        let todo = todo.clone();
                        view! {
                            <button class="icon-btn" aria-label="edit" on:click=move |_| edit.begin(&todo)>
                                "✎"
                            </button>
                            <button
                                class="icon-btn"
                                aria-label="delete"
                                on:click=move |_| {
                                    store_delete_todo(&store, id);
                                }
                            >
                                "🗑"
                            </button>
                        }
                    }
                >
                    <button class="icon-btn" aria-label="save" on:click=move |_| save()>
                        "💾"
                    </button>
                </Show>
            </div>
        </li>
    }
}
