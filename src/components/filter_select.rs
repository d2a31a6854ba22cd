//! Filter Select Component
//!
//! Three-way completion filter: All / Complete / Incomplete.

use leptos::prelude::*;
use todo_core::FilterKind;

#[component]
pub fn FilterSelect(
    #[prop(into)] value: Signal<FilterKind>,
    #[prop(into)] on_change: Callback<FilterKind>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get().as_str()
            on:change=move |ev| on_change.run(FilterKind::from_value(&event_target_value(&ev)))
        >
            {FilterKind::ALL.into_iter().map(|kind| view! {
                <option value=kind.as_str() selected=move || value.get() == kind>
                    {kind.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
