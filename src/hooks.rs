//! Reactive Hooks

use leptos::ev;
use leptos::prelude::*;

/// Tracks `window.innerWidth`; the resize listener is removed when the
/// owning component is dropped
pub fn use_window_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(current_width());
    let handle = window_event_listener(ev::resize, move |_| set_width.set(current_width()));
    on_cleanup(move || handle.remove());
    width
}

fn current_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}
