//! Colour scheme preference, persisted in its own key-value slot.

use crate::persist::{KeyValueStore, PersistError};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, THEME_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Stored theme, or `Light` when nothing valid is stored
    pub fn load(&self) -> Theme {
        match self.backend.read(&self.key) {
            Ok(Some(raw)) => Theme::from_value(&raw).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("[THEME] could not read preference: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), PersistError> {
        self.backend.write(&self.key, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_preference_defaults_to_light() {
        let pref = ThemePreference::new(MemoryStore::new());
        assert_eq!(pref.load(), Theme::Light);
    }

    #[test]
    fn test_preference_persists() {
        let store = MemoryStore::new();
        ThemePreference::new(store.clone()).save(Theme::Dark).unwrap();
        assert_eq!(ThemePreference::new(store.clone()).load(), Theme::Dark);
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_garbage_preference_is_light() {
        let store = MemoryStore::new();
        store.write(THEME_KEY, "purple").unwrap();
        assert_eq!(ThemePreference::new(store).load(), Theme::Light);
    }
}
