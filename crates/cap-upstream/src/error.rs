//! Upstream error types.

use thiserror::Error;

/// Errors that can occur when fetching the upstream dataset.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the upstream host.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse the upstream response.
    #[error("parse error: {0}")]
    Parse(String),
}
