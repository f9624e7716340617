//! Entry Table Component
//!
//! One row per entry, in state order.

use leptos::prelude::*;

use crate::components::EntryRow;
use crate::config::COLUMN_LABELS;
use crate::state::ChecklistStateStoreFields;
use crate::store::use_checklist_store;

#[component]
pub fn EntryTable() -> impl IntoView {
    let store = use_checklist_store();
    let (check_label, title_label, action_label) = COLUMN_LABELS;

    view! {
        <table class="entry-table">
            <thead>
                <tr>
                    <th class="centered">{check_label}</th>
                    <th class="centered">{title_label}</th>
                    <th class="centered">{action_label}</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.entries().get()
                    // Include mutable fields so toggles and renames re-render the row
                    key=|entry| (entry.id, entry.title.clone(), entry.completed)
                    children=move |entry| view! { <EntryRow entry=entry /> }
                />
            </tbody>
        </table>
    }
}
