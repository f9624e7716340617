//! Status Banner Component
//!
//! Shows the loading line until the first fetch resolves and the error
//! message if it failed.

use leptos::prelude::*;

use crate::config::LOADING_TEXT;
use crate::state::ChecklistStateStoreFields;
use crate::store::use_checklist_store;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_checklist_store();

    view! {
        <Show when=move || store.loading().get()>
            <p class="status-line">{LOADING_TEXT}</p>
        </Show>
        <Show when=move || store.error().with(|error| !error.is_empty())>
            <div class="status-error" role="alert">
                {move || store.error().get()}
            </div>
        </Show>
    }
}
