//! Checklist State
//!
//! The state container and its transition table. Every change to the
//! checklist goes through [`ChecklistState::apply`], which returns a new
//! snapshot and leaves the previous one untouched.

use reactive_stores::Store;

use crate::config::FETCH_ERROR_MESSAGE;
use crate::models::{EditSession, Entry};


/// Snapshot of the checklist widget
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ChecklistState {
    /// True until the initial fetch resolves, never set again afterwards
    pub loading: bool,
    /// Empty when there is no error
    pub error: String,
    /// Display order; newly added entries are prepended
    pub entries: Vec<Entry>,
    /// Text staged for the next add
    pub draft_title: String,
    /// Row being edited inline, if any
    pub editing: Option<EditSession>,
    /// Id handed to the next added entry. Only ever grows, and stops at
    /// `u32::MAX`, after which adds fill the lowest free id.
    pub next_id: u32,
}

impl Default for ChecklistState {
    fn default() -> Self {
        Self {
            loading: true,
            error: String::new(),
            entries: Vec::new(),
            draft_title: String::new(),
            editing: None,
            next_id: 1,
        }
    }
}

/// Named state transitions. All are total: unknown ids are ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    FetchSuccess(Vec<Entry>),
    FetchError,
    InputChange(String),
    AddEntry,
    ToggleEntry(u32),
    DeleteEntry(u32),
    BeginEdit(u32),
    EditInput(String),
    CommitEdit,
    CancelEdit,
}

impl Transition {
    /// Short label for logging, without the payload
    pub fn name(&self) -> &'static str {
        match self {
            Transition::FetchSuccess(_) => "FETCH_SUCCESS",
            Transition::FetchError => "FETCH_ERROR",
            Transition::InputChange(_) => "INPUT_CHANGE",
            Transition::AddEntry => "ADD_TODO",
            Transition::ToggleEntry(_) => "TOGGLE_TODO",
            Transition::DeleteEntry(_) => "DELETE_TODO",
            Transition::BeginEdit(_) => "BEGIN_EDIT",
            Transition::EditInput(_) => "EDIT_INPUT",
            Transition::CommitEdit => "COMMIT_EDIT",
            Transition::CancelEdit => "CANCEL_EDIT",
        }
    }
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition and return the resulting snapshot.
    pub fn apply(&self, transition: Transition) -> Self {
        match transition {
            Transition::FetchSuccess(entries) => {
                let next_id = entries
                    .iter()
                    .map(|entry| entry.id.saturating_add(1))
                    .fold(self.next_id, u32::max);
                let editing = self
                    .editing
                    .clone()
                    .filter(|session| entries.iter().any(|entry| entry.id == session.id));
                Self {
                    loading: false,
                    error: String::new(),
                    entries,
                    editing,
                    next_id,
                    ..self.clone()
                }
            }
            Transition::FetchError => Self {
                loading: false,
                error: FETCH_ERROR_MESSAGE.to_string(),
                ..self.clone()
            },
            Transition::InputChange(text) => Self {
                draft_title: text,
                ..self.clone()
            },
            Transition::AddEntry => {
                let mut entries = Vec::with_capacity(self.entries.len() + 1);
                entries.push(Entry::new(self.unused_id(), self.draft_title.clone()));
                entries.extend(self.entries.iter().cloned());
                Self {
                    entries,
                    draft_title: String::new(),
                    next_id: self.next_id.saturating_add(1),
                    ..self.clone()
                }
            }
            Transition::ToggleEntry(id) => Self {
                entries: self
                    .entries
                    .iter()
                    .map(|entry| {
                        if entry.id == id {
                            Entry { completed: !entry.completed, ..entry.clone() }
                        } else {
                            entry.clone()
                        }
                    })
                    .collect(),
                ..self.clone()
            },
            Transition::DeleteEntry(id) => Self {
                entries: self.entries.iter().filter(|entry| entry.id != id).cloned().collect(),
                editing: self.editing.clone().filter(|session| session.id != id),
                ..self.clone()
            },
            Transition::BeginEdit(id) => match self.entries.iter().find(|entry| entry.id == id) {
                Some(entry) => Self {
                    editing: Some(EditSession { id, text: entry.title.clone() }),
                    ..self.clone()
                },
                None => self.clone(),
            },
            Transition::EditInput(text) => match &self.editing {
                Some(session) => Self {
                    editing: Some(EditSession { id: session.id, text }),
                    ..self.clone()
                },
                None => self.clone(),
            },
            Transition::CommitEdit => {
                let Some(session) = &self.editing else {
                    return self.clone();
                };
                Self {
                    entries: self
                        .entries
                        .iter()
                        .map(|entry| {
                            if entry.id == session.id {
                                Entry { title: session.text.clone(), ..entry.clone() }
                            } else {
                                entry.clone()
                            }
                        })
                        .collect(),
                    editing: None,
                    ..self.clone()
                }
            }
            Transition::CancelEdit => Self {
                editing: None,
                ..self.clone()
            },
        }
    }

    /// Id for the next added entry: `next_id`, unless the counter has
    /// saturated onto a held id, then the smallest id no entry holds.
    fn unused_id(&self) -> u32 {
        let taken = |id: u32| self.entries.iter().any(|entry| entry.id == id);
        if !taken(self.next_id) {
            return self.next_id;
        }
        (1..=u32::MAX).find(|id| !taken(*id)).unwrap_or(self.next_id)
    }

    /// Whether `id` is the row currently in edit mode
    pub fn is_editing(&self, id: u32) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }
}
