//! Filter Bar Component
//!
//! Buttons selecting which todos the list shows.

use leptos::prelude::*;

use crate::context::use_todo_actions;
use crate::models::Filter;
use crate::store::TodoStateStoreFields;

/// Filter options
pub const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Done, "Done"),
    (Filter::Undone, "Todo"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let actions = use_todo_actions();
    let store = actions.store();

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|&(filter, label)| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_tag()
                        on:click=move |_| actions.set_filter(filter)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
