//! Endpoint configuration.
//!
//! The configuration file is a YAML list of endpoint records:
//!
//! ```yaml
//! - name: fetch index page
//!   url: https://fetch.com/
//!   method: GET
//!   headers:
//!     user-agent: fetch-synthetic-monitor
//! - url: https://fetch.com/some/post/endpoint
//!   method: POST
//!   body: '{"foo":"bar"}'
//! ```

use pulsecheck_core::Endpoint;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

use crate::error::StoreError;

/// Endpoint list the monitor runs over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorConfig {
    /// Endpoints in configured order.
    pub endpoints: Vec<Endpoint>,
}

impl MonitorConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid YAML, is not a list at
    /// top level, or contains an invalid record.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml_str(&content)?;

        debug!(
            path = %path.display(),
            endpoints = config.endpoints.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Same as [`MonitorConfig::load_from`], minus the IO failure.
    pub fn from_yaml_str(content: &str) -> Result<Self, StoreError> {
        let value: Value = serde_yaml::from_str(content)?;
        if !value.is_sequence() {
            return Err(StoreError::NotAList(kind_of(&value)));
        }

        // Deserialize from the text, not the parsed value: plain scalars such
        // as `name: 123` or a header value of `2` then read as strings.
        let endpoints: Vec<Endpoint> = serde_yaml::from_str(content)?;
        for (index, endpoint) in endpoints.iter().enumerate() {
            endpoint
                .validate()
                .map_err(|source| StoreError::InvalidEndpoint { index, source })?;
        }

        debug!(endpoints = endpoints.len(), "Parsed endpoint list");
        Ok(Self { endpoints })
    }

    /// Number of configured endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns true if no endpoints are configured.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
