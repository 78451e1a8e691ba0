//! Error kinds surfaced by backend calls

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("search service answered with status {0}")]
    Status(u16),

    /// The payload was not JSON or lacked the expected fields
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("request ended without a reply")]
    Aborted,
}

impl SearchError {
    /// Short label for the status line.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network error",
            Self::Status(_) => "service error",
            Self::Malformed(_) => "malformed response",
            Self::Aborted => "request aborted",
        }
    }
}
