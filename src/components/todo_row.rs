//! Todo Row Component
//!
//! A single todo in the list.

use leptos::prelude::*;

use crate::context::use_todo_actions;
use crate::models::{RemoveMode, TodoItem};

/// One todo: checkbox, text, edit and delete buttons
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let actions = use_todo_actions();

    let id = item.id;
    let done = item.done;

    view! {
        <li class=if done { "todo-row done" } else { "todo-row" }>
            <input
                type="checkbox"
                prop:checked=done
                on:change=move |_| actions.toggle(id)
            />

            <span class="todo-text">{item.text}</span>

            <button class="edit-btn" title="Edit" on:click=move |_| actions.begin_edit(id)>
                "✎"
            </button>

            <button class="delete-btn" title="Delete" on:click=move |_| actions.remove(RemoveMode::One(id))>
                "×"
            </button>
        </li>
    }
}
