//! Todo Session
//!
//! Couples a `TodoStore` with a `TodoRepository`: hydrated once on open,
//! written through after every mutation that changed the list.

use crate::item::TodoId;
use crate::persist::{PersistError, TodoRepository};
use crate::store::TodoStore;

#[derive(Debug, Clone)]
pub struct TodoSession<R> {
    store: TodoStore,
    repo: R,
}

impl<R: TodoRepository> TodoSession<R> {
    /// Hydrate from the repository. This is the only read of the session.
    pub fn open(repo: R) -> Self {
        let store = TodoStore::from_items(repo.load());
        log::debug!("[SESSION] hydrated {} todos", store.len());
        Self { store, repo }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns the new id, or `None` when the text was empty
    pub fn add(&mut self, text: &str) -> Result<Option<TodoId>, PersistError> {
        let id = self.store.add(text);
        if id.is_some() {
            self.persist()?;
        }
        Ok(id)
    }

    pub fn delete(&mut self, id: TodoId) -> Result<bool, PersistError> {
        let changed = self.store.delete(id);
        self.persist_if(changed)
    }

    pub fn edit(&mut self, id: TodoId, new_text: &str) -> Result<bool, PersistError> {
        let changed = self.store.edit(id, new_text);
        self.persist_if(changed)
    }

    pub fn toggle_completed(&mut self, id: TodoId) -> Result<bool, PersistError> {
        let changed = self.store.toggle_completed(id);
        self.persist_if(changed)
    }

    fn persist_if(&self, changed: bool) -> Result<bool, PersistError> {
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    fn persist(&self) -> Result<(), PersistError> {
        self.repo.save(&self.store.snapshot())
    }
}
