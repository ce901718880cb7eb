//! Endpoint descriptors.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::CoreError;

/// Name used for endpoints that do not carry one.
pub const DEFAULT_ENDPOINT_NAME: &str = "Unknown";

/// HTTP method used for endpoints that do not specify one.
pub const DEFAULT_METHOD: &str = "GET";

// ============================================================================
// Endpoint
// ============================================================================

/// One monitored HTTP target.
///
/// Deserialized from one record of the endpoint list. Only `url` is
/// required; `method` is upper-cased on load so `post` and `POST` are the
/// same endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Display name used in detailed reports.
    #[serde(default = "default_name", deserialize_with = "null_or_name")]
    pub name: String,
    /// Target URL.
    pub url: String,
    /// HTTP method, upper-case.
    #[serde(default = "default_method", deserialize_with = "uppercase_method")]
    pub method: String,
    /// Request headers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
    /// Optional request body, sent as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

fn default_name() -> String {
    DEFAULT_ENDPOINT_NAME.to_string()
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

fn null_or_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_name))
}

fn uppercase_method<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map_or_else(default_method, |method| method.to_uppercase()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Endpoint {
    /// Creates a `GET` endpoint with the default name and no headers or body.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            url: url.into(),
            method: default_method(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the HTTP method. The method is upper-cased.
    #[must_use]
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_uppercase();
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Checks the fields serde cannot enforce on its own.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidEndpoint`] if the URL or method is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.url.trim().is_empty() {
            return Err(CoreError::InvalidEndpoint(format!(
                "endpoint '{}' has an empty url",
                self.name
            )));
        }
        if self.method.trim().is_empty() {
            return Err(CoreError::InvalidEndpoint(format!(
                "endpoint '{}' has an empty method",
                self.name
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_gets_defaults() {
        let endpoint: Endpoint = serde_yaml::from_str("url: https://fetch.com/").unwrap();
        assert_eq!(endpoint.name, "Unknown");
        assert_eq!(endpoint.method, "GET");
        assert!(endpoint.headers.is_empty());
        assert!(endpoint.body.is_none());
    }

    #[test]
    fn test_method_is_uppercased() {
        let endpoint: Endpoint =
            serde_yaml::from_str("url: https://fetch.com/\nmethod: post").unwrap();
        assert_eq!(endpoint.method, "POST");
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let yaml = "url: https://fetch.com/\nname: ~\nmethod: ~\nheaders: ~\nbody: ~";
        let endpoint: Endpoint = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(endpoint, Endpoint::new("https://fetch.com/"));
    }

    #[test]
    fn test_full_record() {
        let yaml = r#"
name: fetch index page
url: https://fetch.com/some/post/endpoint
method: POST
headers:
  content-type: application/json
  user-agent: fetch-synthetic-monitor
body: '{"foo":"bar"}'
"#;
        let endpoint: Endpoint = serde_yaml::from_str(yaml).unwrap();
        let expected = Endpoint::new("https://fetch.com/some/post/endpoint")
            .with_name("fetch index page")
            .with_method("post")
            .with_header("content-type", "application/json")
            .with_header("user-agent", "fetch-synthetic-monitor")
            .with_body(r#"{"foo":"bar"}"#);
        assert_eq!(endpoint, expected);
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let result: Result<Endpoint, _> = serde_yaml::from_str("name: no url here");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_blank_url() {
        let endpoint = Endpoint::new("  ").with_name("blank");
        let err = endpoint.validate().unwrap_err();
        assert!(err.to_string().contains("blank"));
        assert!(Endpoint::new("http://x/").validate().is_ok());
    }
}
