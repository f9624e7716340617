//! Checklist Store
//!
//! Reactive wrapper around [`ChecklistState`], provided via context to the
//! component tree. All writes go through [`dispatch`].

use leptos::prelude::*;
use log::debug;
use reactive_stores::Store;

use crate::state::{ChecklistState, Transition};

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

/// Create a fresh store for one mount of the widget and provide it to children
pub fn provide_checklist_store() -> ChecklistStore {
    let store = Store::new(ChecklistState::new());
    provide_context(store);
    store
}

/// Get the checklist store from context
pub fn use_checklist_store() -> ChecklistStore {
    expect_context::<ChecklistStore>()
}

/// Apply a transition to the store.
///
/// Returns false when the store has already been disposed (the widget was
/// unmounted), in which case nothing happens.
pub fn dispatch(store: &ChecklistStore, transition: Transition) -> bool {
    let name = transition.name();
    let applied = store
        .try_update(|state| *state = state.apply(transition))
        .is_some();
    if applied {
        debug!("{} applied", name);
    } else {
        debug!("{} dropped, store disposed", name);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    #[test]
    fn test_dispatch_updates_live_store() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(ChecklistState::new()));

        assert!(dispatch(&store, Transition::InputChange("Belajar".to_string())));
        assert!(dispatch(&store, Transition::AddEntry));
        assert_eq!(store.with(|state| state.entries.clone()), vec![Entry::new(1, "Belajar")]);
    }

    #[test]
    fn test_dispatch_after_unmount_is_dropped() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(ChecklistState::new()));
        assert!(dispatch(&store, Transition::InputChange("x".to_string())));

        owner.cleanup();

        // A late fetch resolution must not reach the disposed state
        assert!(!dispatch(&store, Transition::FetchSuccess(vec![Entry::new(1, "late")])));
        assert!(!dispatch(&store, Transition::FetchError));
    }
}
