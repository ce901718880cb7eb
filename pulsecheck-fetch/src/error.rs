//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
///
/// These never escape a probe; the prober folds them into a DOWN result.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed, or the client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint's method is not a valid HTTP method token.
    #[error("Invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// A header name or value cannot be sent.
    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// Header name as configured.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}
