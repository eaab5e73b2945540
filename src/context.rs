//! Application Context
//!
//! The narrow operation API the view layer calls, shared via Leptos Context.

use leptos::prelude::*;

use crate::models::{Filter, RemoveMode, TodoId};
use crate::storage::{BrowserStorage, TodoRepository};
use crate::store::{commit_fields, Change, TodoState, TodoStateStoreFields, TodoStore};

/// Store handle plus the repository it persists through
#[derive(Clone, Copy)]
pub struct TodoActions {
    store: TodoStore,
    repo: TodoRepository<BrowserStorage>,
}

impl TodoActions {
    pub fn new(store: TodoStore, repo: TodoRepository<BrowserStorage>) -> Self {
        Self { store, repo }
    }

    /// Reactive state for rendering
    pub fn store(&self) -> TodoStore {
        self.store
    }

    /// Apply `op` without notifying, then wake only the fields it wrote
    fn dispatch(&self, op: impl FnOnce(&mut TodoState) -> Change) {
        let touched = {
            let mut state = self.store.write_untracked();
            commit_fields(&mut *state, &self.repo, op)
        };

        if touched.items {
            self.store.items().notify();
        }
        if touched.filter {
            self.store.filter().notify();
        }
        if touched.input_value {
            self.store.input_value().notify();
        }
        if touched.dialog {
            self.store.dialog().notify();
        }
        if touched.edit_draft {
            self.store.edit_draft().notify();
        }
    }

    pub fn set_input(&self, text: String) {
        self.dispatch(|state| state.set_input(text));
    }

    pub fn submit_input(&self) {
        self.dispatch(TodoState::submit_input);
    }

    pub fn toggle(&self, id: TodoId) {
        self.dispatch(|state| state.toggle(id));
    }

    pub fn begin_edit(&self, id: TodoId) {
        self.dispatch(|state| state.begin_edit(id));
    }

    pub fn set_edit_draft(&self, text: String) {
        self.dispatch(|state| state.set_edit_draft(text));
    }

    pub fn submit_edit(&self) {
        self.dispatch(TodoState::submit_edit);
    }

    pub fn cancel_edit(&self) {
        self.dispatch(TodoState::cancel_edit);
    }

    pub fn remove(&self, mode: RemoveMode) {
        self.dispatch(|state| state.remove(mode));
    }

    pub fn set_filter(&self, filter: Filter) {
        self.dispatch(|state| state.set_filter(filter));
    }
}

/// Get the todo actions from context
pub fn use_todo_actions() -> TodoActions {
    expect_context::<TodoActions>()
}
