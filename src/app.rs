//! Todo App
//!
//! Root component: loads the saved list and provides the store to children.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EditDialog, TodoInput, TodoList};
use crate::config::AppConfig;
use crate::context::TodoActions;
use crate::storage::{BrowserStorage, TodoRepository};
use crate::store::{TodoState, TodoStateStoreFields};
use crate::todos::remaining;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let repo = TodoRepository::new(BrowserStorage, config.storage_key);
    let state = TodoState::from_items(repo.load());
    log::info!("[APP] Loaded {} todos from '{}'", state.items.len(), repo.key());

    let actions = TodoActions::new(Store::new(state), repo);
    provide_context(actions);
    let store = actions.store();

    let summary = move || {
        let items = store.items().read();
        format!("{} items, {} left", items.len(), remaining(&items))
    };

    view! {
        <div class="app-wrapper">
            <h1>"Todos"</h1>

            <TodoInput />

            <TodoList />

            <p class="item-count">{summary}</p>

            <EditDialog />
        </div>
    }
}
