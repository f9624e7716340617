//! New Entry Form Component
//!
//! Text input bound to the draft title plus the Add button.

use leptos::prelude::*;

use crate::config::INPUT_PLACEHOLDER;
use crate::state::{ChecklistStateStoreFields, Transition};
use crate::store::{dispatch, use_checklist_store};

const FORM_ID: &str = "new-entry-form";

#[component]
pub fn NewEntryForm() -> impl IntoView {
    let store = use_checklist_store();

    let add_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dispatch(&store, Transition::AddEntry);
    };

    view! {
        <div class="new-entry-row">
            <form id=FORM_ID class="new-entry-form" on:submit=add_entry>
                <input
                    type="text"
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || store.draft_title().get()
                    on:input=move |ev| {
                        dispatch(&store, Transition::InputChange(event_target_value(&ev)));
                    }
                />
            </form>
            // Submits the form above, so Enter and click share one path
            <button type="submit" form=FORM_ID class="btn btn-primary">"Add"</button>
        </div>
    }
}
