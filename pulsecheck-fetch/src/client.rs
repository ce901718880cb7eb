//! HTTP client abstractions.

use pulsecheck_core::Endpoint;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

use crate::error::FetchError;
use crate::probe::DEFAULT_TIMEOUT;

/// User agent string for Pulsecheck.
const USER_AGENT: &str = concat!("pulsecheck/", env!("CARGO_PKG_VERSION"));

/// HTTP client that builds requests from endpoint descriptors.
///
/// There is no retry layer: one call is one request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client with the default probe timeout.
    ///
    /// # Errors
    ///
    /// Fails if the underlying client cannot be built (broken TLS setup).
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new HTTP client with a custom timeout.
    ///
    /// The timeout covers the whole exchange, body included.
    ///
    /// # Errors
    ///
    /// Fails if the underlying client cannot be built (broken TLS setup).
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner: client,
            timeout,
        })
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the request for an endpoint without sending it.
    ///
    /// # Errors
    ///
    /// Fails on a method or header that is not valid HTTP. A malformed URL
    /// is not detected here; reqwest reports it when the request is sent.
    pub fn build_request(&self, endpoint: &Endpoint) -> Result<RequestBuilder, FetchError> {
        let method = Method::from_bytes(endpoint.method.as_bytes())
            .map_err(|_| FetchError::InvalidMethod(endpoint.method.clone()))?;

        let mut headers = HeaderMap::with_capacity(endpoint.headers.len());
        for (name, value) in &endpoint.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let mut request = self.inner.request(method, &endpoint.url).headers(headers);
        if let Some(body) = &endpoint.body {
            request = request.body(body.clone());
        }
        Ok(request)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_applies_descriptor() {
        let client = HttpClient::new().unwrap();
        let endpoint = Endpoint::new("https://fetch.com/some/post/endpoint")
            .with_method("post")
            .with_header("content-type", "application/json")
            .with_body(r#"{"foo":"bar"}"#);

        let request = client.build_request(&endpoint).unwrap().build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "https://fetch.com/some/post/endpoint");
        assert_eq!(request.headers()["content-type"], "application/json");
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()),
            Some(br#"{"foo":"bar"}"#.as_slice())
        );
    }

    #[test]
    fn test_invalid_method_rejected() {
        let client = HttpClient::new().unwrap();
        let endpoint = Endpoint::new("https://fetch.com/").with_method("GE T");
        assert!(matches!(
            client.build_request(&endpoint),
            Err(FetchError::InvalidMethod(_))
        ));
    }

    #[test]
    fn test_invalid_header_rejected() {
        let client = HttpClient::new().unwrap();
        let endpoint = Endpoint::new("https://fetch.com/").with_header("bad header", "x");
        assert!(matches!(
            client.build_request(&endpoint),
            Err(FetchError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_custom_timeout() {
        let client = HttpClient::with_timeout(Duration::from_millis(250)).unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(250));
    }
}
