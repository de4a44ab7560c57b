//! Fetch error types

use thiserror::Error;

/// Errors from the single page fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Connection, DNS or protocol failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Any non-200 response, carrying the status code
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
