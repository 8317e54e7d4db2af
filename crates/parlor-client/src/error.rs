//! Error types for the client SDK.

use thiserror::Error;

/// Client SDK errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("Server error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the server, when it sent one
        message: String,
    },

    /// The server's response could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
