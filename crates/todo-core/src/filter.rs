//! Filter Kinds
//!
//! Completion filter and search predicate used by `TodoStore::query`.

use serde::{Deserialize, Serialize};

use crate::item::Todo;

/// Which todos a view shows by completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [FilterKind::All, FilterKind::Complete, FilterKind::Incomplete];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::All => "all",
            FilterKind::Complete => "complete",
            FilterKind::Incomplete => "incomplete",
        }
    }

    /// Parse a selector value; anything unrecognised means `All`
    pub fn from_value(s: &str) -> Self {
        match s {
            "complete" => FilterKind::Complete,
            "incomplete" => FilterKind::Incomplete,
            _ => FilterKind::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::All => "All",
            FilterKind::Complete => "Complete",
            FilterKind::Incomplete => "Incomplete",
        }
    }

    pub fn accepts(&self, completed: bool) -> bool {
        match self {
            FilterKind::All => true,
            FilterKind::Complete => completed,
            FilterKind::Incomplete => !completed,
        }
    }
}

/// Case-insensitive substring search over todo text
#[derive(Debug, Clone, Default)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }
}

/// Both restrictions of a query, applied filter first
pub(crate) fn visible(todo: &Todo, filter: FilterKind, search: &SearchTerm) -> bool {
    filter.accepts(todo.completed) && search.matches(&todo.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_values_round_trip() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_value(kind.as_str()), kind);
        }
        assert_eq!(FilterKind::from_value("bogus"), FilterKind::All);
    }

    #[test]
    fn test_filter_accepts() {
        assert!(FilterKind::All.accepts(true));
        assert!(FilterKind::All.accepts(false));
        assert!(FilterKind::Complete.accepts(true));
        assert!(!FilterKind::Complete.accepts(false));
        assert!(FilterKind::Incomplete.accepts(false));
        assert!(!FilterKind::Incomplete.accepts(true));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let term = SearchTerm::new("PIZ");
        assert!(term.matches("eat pizza"));
        assert!(!term.matches("Buy Milk"));
        assert!(SearchTerm::new("").matches("anything"));
    }
}
