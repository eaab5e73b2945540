//! Edit Dialog Component
//!
//! Modal for renaming a todo. Shown while the store's dialog is open.

use leptos::prelude::*;

use crate::context::use_todo_actions;
use crate::store::TodoStateStoreFields;

#[component]
pub fn EditDialog() -> impl IntoView {
    let actions = use_todo_actions();
    let store = actions.store();

    let is_open = move || store.dialog().get().is_open();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions.submit_edit();
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| actions.cancel_edit()>
                <form
                    class="modal"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                    on:submit=on_submit
                >
                    <h3>"Edit task"</h3>
                    <input
                        type="text"
                        prop:value=move || store.edit_draft().get()
                        on:input=move |ev| actions.set_edit_draft(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="submit">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| actions.cancel_edit()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
