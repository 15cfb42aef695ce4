use thiserror::Error;

/// Error types for counter service requests.
///
/// Transport errors are flattened to strings so the error stays `Clone`; the
/// taxonomy is intentionally coarse (no retry/backoff distinctions, the status
/// code is only formatted into the user-facing message).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("counter service returned HTTP {0}")]
    Status(u16),

    #[error("invalid counter response: {0}")]
    InvalidResponse(String),
}

impl From<String> for CounterApiError {
    fn from(error: String) -> Self {
        CounterApiError::Transport(error)
    }
}

impl From<&str> for CounterApiError {
    fn from(error: &str) -> Self {
        CounterApiError::Transport(error.to_string())
    }
}
