//! Error Types
//!
//! Failures of the one outbound request. Callers log the detail and show
//! only [`crate::config::FETCH_ERROR_MESSAGE`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed todo list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(FetchError::Status(503).to_string(), "unexpected status 503");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: FetchError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("malformed todo list"));
    }
}
