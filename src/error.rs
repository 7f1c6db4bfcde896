use std::time::Duration;
use thiserror::Error;

/// Why the search results page could not be fetched.
///
/// Each case is kept distinct so the caller can decide whether a fallback applies.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request blocked by target site (HTTP {status})")]
    Blocked { status: u16 },

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl FetchError {
    pub fn is_blocked(&self) -> bool {
        matches!(self, FetchError::Blocked { .. })
    }
}
