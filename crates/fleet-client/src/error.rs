//! Client error types.

use thiserror::Error;

/// Errors returned by [`crate::FleetClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The token was rejected (401/403).
    #[error("unauthorized: token missing, expired or rejected")]
    Unauthorized,

    /// Login failed or returned no token.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// HTTP transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}
