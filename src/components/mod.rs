//! UI Components
//!
//! Leptos components for the checklist view.

mod entry_row;
mod entry_table;
mod new_entry_form;
mod status_banner;

pub use entry_row::EntryRow;
pub use entry_table::EntryTable;
pub use new_entry_form::NewEntryForm;
pub use status_banner::StatusBanner;
