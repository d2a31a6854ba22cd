//! New Todo Dialog Component
//!
//! Modal form for adding a todo to the end of the list.

use leptos::prelude::*;

use crate::store::{store_add_todo, use_app_store};

/// Dialog shown while `open` is true. Empty input keeps it open.
#[component]
pub fn NewTodoDialog(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let apply = move || {
        if store_add_todo(&store, &new_text.get_untracked()) {
            set_new_text.set(String::new());
            open.set(false);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <form
                    class="dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        apply();
                    }
                >
                    <h2 class="dialog-title">"NEW NOTE"</h2>
                    <div class="dialog-content">
                        <input
                            type="text"
                            class="outlined-input"
                            placeholder="Input your note..."
                            prop:value=move || new_text.get()
                            on:input=move |ev| set_new_text.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="dialog-actions">
                        <button type="button" on:click=move |_| open.set(false)>"CANCEL"</button>
                        <button type="submit" class="primary">"APPLY"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
