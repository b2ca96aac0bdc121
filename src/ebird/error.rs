//! Error types for eBird API requests.

use thiserror::Error;

/// A specialized Result type for eBird API operations.
pub type Result<T> = std::result::Result<T, EbirdError>;

/// Errors that can occur while talking to the eBird API.
///
/// A non-2xx response always surfaces as [`EbirdError::Http`] with the
/// numeric status and the raw response body. No distinction is made
/// between bad parameters, a rejected token, and a remote outage; the
/// caller sees the status code and decides.
#[derive(Debug, Error)]
pub enum EbirdError {
    /// The API answered with a client or server error status.
    #[error("eBird API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (connect failure, timeout).
    #[error("request to eBird API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response had a success status but the body was not valid JSON.
    #[error("failed to decode eBird API response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl EbirdError {
    /// The HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
