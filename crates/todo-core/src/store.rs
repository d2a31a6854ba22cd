//! Todo Store
//!
//! Authoritative ordered list of todos for one session. Items keep
//! insertion order and are addressed by `TodoId`.

use crate::filter::{visible, FilterKind, SearchTerm};
use crate::item::{normalize_text, Todo, TodoId, TodoItem};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u32,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a persisted snapshot, assigning ids in list order
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            let id = store.allocate_id();
            store.todos.push(Todo::from_item(id, item));
        }
        store
    }

    fn allocate_id(&mut self) -> TodoId {
        self.next_id += 1;
        TodoId::from(self.next_id)
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new incomplete todo. Empty or whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        let text = normalize_text(text)?;
        let id = self.allocate_id();
        self.todos.push(Todo::from_item(id, TodoItem::new(text)));
        Some(id)
    }

    /// Remove a todo. Returns false if the id is unknown.
    pub fn delete(&mut self, id: TodoId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the text of a todo in place, keeping its flag and position
    pub fn edit(&mut self, id: TodoId, new_text: &str) -> bool {
        let Some(text) = normalize_text(new_text) else {
            return false;
        };
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn toggle_completed(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    // ========================
    // Queries
    // ========================

    /// Todos passing the completion filter whose text contains
    /// `search_term` (case-insensitive), in list order
    pub fn query(&self, filter: FilterKind, search_term: &str) -> Vec<Todo> {
        let search = SearchTerm::new(search_term);
        self.todos
            .iter()
            .filter(|todo| visible(todo, filter, &search))
            .cloned()
            .collect()
    }

    pub fn count(&self, filter: FilterKind) -> usize {
        self.todos
            .iter()
            .filter(|todo| filter.accepts(todo.completed))
            .count()
    }

    /// The full list in persisted form
    pub fn snapshot(&self) -> Vec<TodoItem> {
        self.todos.iter().map(Todo::to_item).collect()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store(entries: &[(&str, bool)]) -> TodoStore {
        TodoStore::from_items(
            entries
                .iter()
                .map(|(text, completed)| TodoItem::new(*text).with_completed(*completed))
                .collect(),
        )
    }

    fn texts(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_trimmed() {
        let mut store = make_store(&[("first", true)]);
        let id = store.add("  second  ").expect("non-empty add");

        assert_eq!(store.len(), 2);
        let last = store.iter().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "second");
        assert!(!last.completed);
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut store = make_store(&[("keep", false)]);
        let before = store.clone();

        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_ids_are_unique_after_delete() {
        let mut store = TodoStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        assert!(store.delete(b));
        let c = store.add("c").unwrap();

        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_delete() {
        let mut store = make_store(&[("a", false), ("b", true), ("c", false)]);
        let b = store.iter().nth(1).unwrap().id;

        assert!(store.delete(b));
        assert_eq!(texts(&store.query(FilterKind::All, "")), vec!["a", "c"]);
        assert!(!store.delete(b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_edit_preserves_flag_and_position() {
        let mut store = make_store(&[("a", false), ("b", true), ("c", false)]);
        let b = store.iter().nth(1).unwrap().id;

        assert!(store.edit(b, "  bee "));
        let snapshot = store.snapshot();
        assert_eq!(snapshot[1], TodoItem::new("bee").with_completed(true));
        assert_eq!(snapshot[0], TodoItem::new("a"));
        assert_eq!(snapshot[2], TodoItem::new("c"));
    }

    #[test]
    fn test_edit_empty_is_noop() {
        let mut store = make_store(&[("a", false)]);
        let a = store.iter().next().unwrap().id;
        let before = store.clone();

        assert!(!store.edit(a, ""));
        assert!(!store.edit(a, "  "));
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = make_store(&[("a", false), ("b", true)]);
        let before = store.snapshot();
        let a = store.iter().next().unwrap().id;

        assert!(store.toggle_completed(a));
        assert!(store.get(a).unwrap().completed);
        assert_eq!(store.snapshot()[1], before[1]);

        assert!(store.toggle_completed(a));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = make_store(&[("a", false)]);
        let before = store.clone();
        let missing = TodoId::from(999);

        assert!(!store.toggle_completed(missing));
        assert!(!store.edit(missing, "x"));
        assert!(!store.delete(missing));
        assert_eq!(store, before);
    }

    #[test]
    fn test_query_filters_partition_list() {
        let store = make_store(&[("a", true), ("b", false), ("c", true), ("d", false)]);

        assert_eq!(texts(&store.query(FilterKind::All, "")), vec!["a", "b", "c", "d"]);
        assert_eq!(texts(&store.query(FilterKind::Complete, "")), vec!["a", "c"]);
        assert_eq!(texts(&store.query(FilterKind::Incomplete, "")), vec!["b", "d"]);
        assert_eq!(store.count(FilterKind::Complete), 2);
    }

    #[test]
    fn test_query_search_case_insensitive() {
        let store = make_store(&[("Buy Milk", false), ("eat pizza", true)]);
        let found = store.query(FilterKind::All, "PIZ");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_item(), TodoItem::new("eat pizza").with_completed(true));
    }

    #[test]
    fn test_query_combines_filter_and_search() {
        let store = make_store(&[("Milk", true), ("milk chocolate", false), ("bread", false)]);

        assert_eq!(texts(&store.query(FilterKind::Incomplete, "MILK")), vec!["milk chocolate"]);
        assert!(store.query(FilterKind::Complete, "bread").is_empty());
    }

    #[test]
    fn test_query_ids_address_backing_list() {
        let mut store = make_store(&[("a", true), ("b", false), ("c", false)]);
        let visible = store.query(FilterKind::Incomplete, "");
        // first visible row is "b", not backing index 0
        assert!(store.delete(visible[0].id));
        assert_eq!(texts(&store.query(FilterKind::All, "")), vec!["a", "c"]);
    }
}
