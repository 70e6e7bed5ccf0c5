//! Error types for the catalog transport.

use thiserror::Error;

/// Errors that can occur while talking to the catalog service.
///
/// Every variant carries a message that is safe to show to the user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (connection refused, reset, ...).
    #[error("network error: {0}")]
    Network(String),

    /// A success response did not have the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl RequestError {
    /// The HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RequestError::Decode(e.to_string())
        } else {
            RequestError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}
