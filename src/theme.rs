//! Applies the colour scheme as a `data-theme` attribute on `<html>`.

use leptos::prelude::*;
use todo_core::Theme;

pub fn apply_theme(theme: Theme) {
    if let Some(el) = document().document_element() {
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
}

/// Icon of the toggle: offers the scheme you would switch to
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_icon_offers_other_scheme() {
        assert_eq!(toggle_icon(Theme::Light), "☾");
        assert_eq!(toggle_icon(Theme::Dark), "☀");
    }
}
