//! Store error types.

use pulsecheck_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading monitor state or configuration.
///
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid YAML, or a record has the wrong shape.
    #[error("Error parsing YAML file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The top-level YAML value is not a list.
    #[error("YAML configuration must be a list of endpoints, found {0}")]
    NotAList(&'static str),

    /// A record parsed but is not a usable endpoint.
    #[error("Endpoint #{index}: {source}")]
    InvalidEndpoint {
        /// Zero-based position in the list.
        index: usize,
        /// Validation failure.
        #[source]
        source: CoreError,
    },
}
