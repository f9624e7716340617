//! Jadwal Kegiatan App
//!
//! Root component: owns the checklist store for this mount and starts the
//! one-shot initial load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use crate::api;
use crate::components::{EntryTable, NewEntryForm, StatusBanner};
use crate::config::HEADING;
use crate::store::provide_checklist_store;

#[component]
pub fn App() -> impl IntoView {
    let store = provide_checklist_store();

    // Load entries on mount. Nothing is tracked, so this runs once.
    Effect::new(move |_| {
        debug!("Mounted, requesting initial entries");
        spawn_local(api::load_initial_entries(store));
    });

    view! {
        <div class="checklist">
            <h2>{HEADING}</h2>

            <NewEntryForm />

            <StatusBanner />

            <EntryTable />
        </div>
    }
}
