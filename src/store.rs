//! Todo State Store
//!
//! Holds the todo list, the active filter and the draft texts. Uses Leptos
//! reactive_stores so the view re-renders per field.
//!
//! Every operation is a plain method on [`TodoState`] that reports what it
//! changed; [`commit`] applies one and writes the list back to storage when the
//! items changed. [`commit_fields`] also reports which fields were written so
//! the caller can notify only those.

use reactive_stores::Store;

use crate::models::{Filter, RemoveMode, TodoId, TodoItem};
use crate::storage::{KeyValueStorage, TodoRepository};
use crate::todos::{self, IdGenerator};

/// What an operation changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Ignored request (blank text, unknown id, nothing to remove)
    None,
    /// Transient view state only (filter, drafts, dialog)
    View,
    /// The todo list itself; must be persisted
    Items,
}

impl Change {
    pub fn touches_items(&self) -> bool {
        matches!(self, Change::Items)
    }
}

/// Edit dialog state; `edit` is only reachable while open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditDialog {
    #[default]
    Closed,
    Open(TodoId),
}

impl EditDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, EditDialog::Open(_))
    }
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All todos in insertion order
    pub items: Vec<TodoItem>,
    /// Active view filter (not persisted)
    pub filter: Filter,
    /// Draft text of the new-todo input
    pub input_value: String,
    pub dialog: EditDialog,
    /// Draft text inside the edit dialog
    pub edit_draft: String,
    pub ids: IdGenerator,
}

impl TodoState {
    /// State over a loaded list. Duplicate ids keep their first item.
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        let (items, dropped) = todos::dedupe_ids(items);
        if dropped > 0 {
            log::warn!("[STORE] Dropped {} todos with duplicate ids", dropped);
        }
        Self {
            ids: IdGenerator::seeded(&items),
            items,
            ..Default::default()
        }
    }

    pub fn add(&mut self, text: &str) -> Change {
        self.add_at(text, todos::now_millis())
    }

    /// Add with an explicit clock reading
    pub fn add_at(&mut self, text: &str, now_ms: TodoId) -> Change {
        let Some(text) = todos::normalize_text(text) else {
            return Change::None;
        };
        let id = self.ids.next(now_ms, &self.items);
        self.items = todos::appended(&self.items, TodoItem::new(id, text));
        log::debug!("[STORE] Added todo {}", id);
        Change::Items
    }

    pub fn set_input(&mut self, text: String) -> Change {
        self.input_value = text;
        Change::View
    }

    /// Add the input draft; the draft is cleared only when the add happened
    pub fn submit_input(&mut self) -> Change {
        let text = std::mem::take(&mut self.input_value);
        let change = self.add(&text);
        if !change.touches_items() {
            self.input_value = text;
        }
        change
    }

    pub fn toggle(&mut self, id: TodoId) -> Change {
        match todos::toggled(&self.items, id) {
            Some(next) => {
                self.items = next;
                Change::Items
            }
            None => Change::None,
        }
    }

    /// Open the dialog for `id` with its current text as the draft
    pub fn begin_edit(&mut self, id: TodoId) -> Change {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            return Change::None;
        };
        self.edit_draft = item.text.clone();
        self.dialog = EditDialog::Open(id);
        Change::View
    }

    pub fn set_edit_draft(&mut self, text: String) -> Change {
        self.edit_draft = text;
        Change::View
    }

    pub fn cancel_edit(&mut self) -> Change {
        if !self.dialog.is_open() {
            return Change::None;
        }
        self.dialog = EditDialog::Closed;
        self.edit_draft.clear();
        Change::View
    }

    /// Replace the text of `id`; closes the dialog on success
    pub fn edit(&mut self, id: TodoId, text: &str) -> Change {
        let Some(text) = todos::normalize_text(text) else {
            return Change::None;
        };
        let Some(next) = todos::retexted(&self.items, id, &text) else {
            return Change::None;
        };
        self.items = next;
        self.dialog = EditDialog::Closed;
        self.edit_draft.clear();
        Change::Items
    }

    /// Save the dialog draft into the item it was opened for
    pub fn submit_edit(&mut self) -> Change {
        match self.dialog {
            EditDialog::Open(id) => {
                let draft = self.edit_draft.clone();
                self.edit(id, &draft)
            }
            EditDialog::Closed => Change::None,
        }
    }

    pub fn remove(&mut self, mode: RemoveMode) -> Change {
        match todos::removed(&self.items, mode) {
            Some(next) => {
                self.items = next;
                Change::Items
            }
            None => Change::None,
        }
    }

    pub fn set_filter(&mut self, filter: Filter) -> Change {
        if self.filter == filter {
            return Change::None;
        }
        self.filter = filter;
        Change::View
    }

    /// Items passing the active filter; the list itself is left alone
    pub fn visible_items(&self) -> Vec<TodoItem> {
        todos::filtered(&self.items, self.filter)
    }

    /// Number of items not yet done
    pub fn remaining(&self) -> usize {
        todos::remaining(&self.items)
    }
}

/// Apply `op` and persist the list if it changed. Write failures are logged, never raised.
pub fn commit<S: KeyValueStorage>(
    state: &mut TodoState,
    repo: &TodoRepository<S>,
    op: impl FnOnce(&mut TodoState) -> Change,
) -> Change {
    let change = op(state);
    if change.touches_items() {
        if let Err(e) = repo.save(&state.items) {
            log::error!("[STORE] Failed to save todos under '{}': {}", repo.key(), e);
        }
    }
    change
}

/// Store fields written by one operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    pub items: bool,
    pub filter: bool,
    pub input_value: bool,
    pub dialog: bool,
    pub edit_draft: bool,
}

/// [`commit`], plus which view fields differ afterwards. `ids` is never read by the view.
pub fn commit_fields<S: KeyValueStorage>(
    state: &mut TodoState,
    repo: &TodoRepository<S>,
    op: impl FnOnce(&mut TodoState) -> Change,
) -> Touched {
    let filter = state.filter;
    let dialog = state.dialog;
    let input_value = state.input_value.clone();
    let edit_draft = state.edit_draft.clone();

    let change = commit(state, repo, op);

    Touched {
        items: change.touches_items(),
        filter: state.filter != filter,
        input_value: state.input_value != input_value,
        dialog: state.dialog != dialog,
        edit_draft: state.edit_draft != edit_draft,
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;
