//! Entry Row Component
//!
//! Checkbox, title (or inline edit field) and action buttons for one entry.

use leptos::prelude::*;

use crate::models::Entry;
use crate::state::{ChecklistStateStoreFields, Transition};
use crate::store::{dispatch, use_checklist_store};

#[component]
pub fn EntryRow(entry: Entry) -> impl IntoView {
    let store = use_checklist_store();

    let id = entry.id;
    let completed = entry.completed;
    let title = entry.title;

    // Memo so keystrokes in the edit field don't rebuild the cell
    let editing = Memo::new(move |_| store.with(|state| state.is_editing(id)));
    let edit_input = NodeRef::<leptos::html::Input>::new();

    // Focus the edit field once it is in the DOM so Enter/Escape work right away
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_input.get() {
                let _ = input.focus();
            }
        }
    });

    let edit_text = move || {
        store
            .editing()
            .with(|session| session.as_ref().map(|session| session.text.clone()).unwrap_or_default())
    };

    view! {
        <tr class=if completed { "entry-row completed" } else { "entry-row" }>
            <td class="centered">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| {
                        dispatch(&store, Transition::ToggleEntry(id));
                    }
                />
            </td>

            <td class="entry-title">
                {move || if editing.get() {
                    view! {
                        <input
                            type="text"
                            class="edit-input"
                            node_ref=edit_input
                            prop:value=edit_text
                            on:input=move |ev| {
                                dispatch(&store, Transition::EditInput(event_target_value(&ev)));
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                match ev.key().as_str() {
                                    "Enter" => {
                                        dispatch(&store, Transition::CommitEdit);
                                    }
                                    "Escape" => {
                                        dispatch(&store, Transition::CancelEdit);
                                    }
                                    _ => {}
                                }
                            }
                        />
                    }.into_any()
                } else {
                    view! { <span>{title.clone()}</span> }.into_any()
                }}
            </td>

            <td class="centered">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <button
                            class="btn btn-info"
                            on:click=move |_| {
                                dispatch(&store, Transition::BeginEdit(id));
                            }
                        >
                            "Edit"
                        </button>
                    }
                >
                    <button
                        class="btn btn-success"
                        on:click=move |_| {
                            dispatch(&store, Transition::CommitEdit);
                        }
                    >
                        "Save"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| {
                            dispatch(&store, Transition::CancelEdit);
                        }
                    >
                        "Cancel"
                    </button>
                </Show>
                <button
                    class="btn btn-danger"
                    on:click=move |_| {
                        dispatch(&store, Transition::DeleteEntry(id));
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
