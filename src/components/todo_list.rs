//! Todo List Component
//!
//! Filter buttons, the filtered rows, and the bulk delete actions.

use leptos::prelude::*;

use crate::components::{FilterBar, TodoRow};
use crate::context::use_todo_actions;
use crate::models::RemoveMode;
use crate::store::TodoStateStoreFields;
use crate::todos::filtered;

#[component]
pub fn TodoList() -> impl IntoView {
    let actions = use_todo_actions();
    let store = actions.store();

    // Filtering copies; the stored list is never narrowed
    let visible = Memo::new(move |_| filtered(&store.items().read(), store.filter().get()));
    let has_visible = move || visible.with(|items| !items.is_empty());

    view! {
        <section class="todo-list">
            <h2 class="todo-list-heading">"Todo List"</h2>

            <FilterBar />

            // Text and done are part of the key so edits re-render the row
            <ul class="todo-items">
                <For
                    each=move || visible.get()
                    key=|item| (item.id, item.text.clone(), item.done)
                    children=move |item| view! { <TodoRow item=item /> }
                />
            </ul>

            <Show when=has_visible>
                <div class="bulk-actions">
                    <button class="bulk-btn" on:click=move |_| actions.remove(RemoveMode::Done)>
                        "Delete Done Tasks"
                    </button>
                    <button class="bulk-btn" on:click=move |_| actions.remove(RemoveMode::All)>
                        "Delete All Tasks"
                    </button>
                </div>
            </Show>
        </section>
    }
}
