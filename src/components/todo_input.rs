//! Todo Input Component
//!
//! Text box for new todos; Enter or "Add" submits.

use leptos::prelude::*;

use crate::context::use_todo_actions;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoInput() -> impl IntoView {
    let actions = use_todo_actions();
    let store = actions.store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions.submit_input();
    };

    view! {
        <form class="todo-input" on:submit=on_submit>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || store.input_value().get()
                on:input=move |ev| actions.set_input(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
