//! Error types for the Wartezeiten client.

use thiserror::Error;


/// Client error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or undecodable response body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API answered with a non-success status.
    #[error("HTTP error! status: {status}, message: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// Request parameters cannot be sent as headers.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Returns the HTTP status code if the API rejected the request.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
