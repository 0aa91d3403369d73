//! Lookup client error taxonomy.
//!
//! # Design
//! - Every variant is recoverable; callers log and keep their last good state.
//! - Malformed payload shapes are not errors (they decode to an empty page).

use thiserror::Error;

/// Failure while talking to the contacts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Response carried a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// Response body was not JSON.
    #[error("response body was not JSON: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a response status; `None` for 2xx.
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) {
            None
        } else {
            Some(Self::Status(status))
        }
    }
}
