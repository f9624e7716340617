//! Frontend Models
//!
//! Checklist data as received from the todo endpoint and held in state.

use serde::Deserialize;

/// One checklist row.
///
/// Upstream objects also carry `userId`; serde ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Entry {
    /// A fresh, not yet completed entry.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Row currently being edited inline, with its uncommitted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: u32,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_incomplete() {
        let entry = Entry::new(7, "Belanja");
        assert_eq!(entry.id, 7);
        assert_eq!(entry.title, "Belanja");
        assert!(!entry.completed);
    }

    #[test]
    fn test_deserialize_ignores_user_id() {
        let json = r#"{"userId":1,"id":3,"title":"fugiat veniam minus","completed":true}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, Entry { id: 3, title: "fugiat veniam minus".to_string(), completed: true });
    }
}
