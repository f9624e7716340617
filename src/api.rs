//! Todo Endpoint Client
//!
//! The single outbound request made by the widget, issued once per mount.

use log::{info, warn};

use crate::config::TODOS_ENDPOINT;
use crate::error::FetchError;
use crate::models::Entry;
use crate::state::Transition;
use crate::store::{dispatch, ChecklistStore};

/// GET the placeholder todo list. No headers, retries or timeout.
pub async fn fetch_entries() -> Result<Vec<Entry>, FetchError> {
    let response = reqwest::Client::new().get(TODOS_ENDPOINT).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    decode_entries(&body)
}

/// Decode a response body. The whole array must decode or nothing does.
pub fn decode_entries(body: &str) -> Result<Vec<Entry>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch the initial entries and post exactly one outcome into the store.
pub async fn load_initial_entries(store: ChecklistStore) {
    let transition = match fetch_entries().await {
        Ok(entries) => {
            info!("Loaded {} entries from {}", entries.len(), TODOS_ENDPOINT);
            Transition::FetchSuccess(entries)
        }
        Err(e) => {
            warn!("Initial load failed: {}", e);
            Transition::FetchError
        }
    };
    dispatch(&store, transition);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_upstream_shape() {
        let body = r#"[
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 1, "id": 4, "title": "et porro tempora", "completed": true}
        ]"#;
        let entries = decode_entries(body).expect("decode failed");
        assert_eq!(
            entries,
            vec![
                Entry { id: 1, title: "delectus aut autem".to_string(), completed: false },
                Entry { id: 4, title: "et porro tempora".to_string(), completed: true },
            ]
        );
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_entries("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_object() {
        assert!(matches!(decode_entries("{}"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_partial_array() {
        let body = r#"[{"id": 1, "title": "ok", "completed": false}, {"id": "two", "title": "bad", "completed": false}]"#;
        assert!(matches!(decode_entries(body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_requires_completed() {
        let body = r#"[{"id": 1, "title": "no flag"}]"#;
        assert!(decode_entries(body).is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_entries("<html>502 Bad Gateway</html>").is_err());
    }
}
