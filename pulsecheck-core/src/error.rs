//! Core error types for Pulsecheck.

use thiserror::Error;

/// Core error type for Pulsecheck operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An endpoint descriptor failed validation.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
