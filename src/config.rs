//! Fixed Configuration
//!
//! Endpoint and UI copy. There is no runtime configuration.

/// Placeholder todo list fetched once on mount
pub const TODOS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Message stored in state whenever the initial fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch todos.";

pub const HEADING: &str = "Jadwal Kegiatan Harian";
pub const INPUT_PLACEHOLDER: &str = "Tambahkan Kegiatan";
pub const LOADING_TEXT: &str = "Memuat...";

/// Table header labels: (check, activity, action)
pub const COLUMN_LABELS: (&str, &str, &str) = ("Check", "Kegiatan", "Action");
