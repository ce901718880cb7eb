//! Endpoint probes.
//!
//! A probe sends exactly one request for an endpoint, times it, and reduces
//! whatever happened to UP or DOWN. Errors are folded into the result and
//! never reach the caller.

use async_trait::async_trait;
use pulsecheck_core::{Endpoint, ProbeStatus};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use crate::client::HttpClient;
use crate::error::FetchError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default latency threshold. Responses at or above it count as DOWN.
pub const DEFAULT_LATENCY_THRESHOLD: Duration = Duration::from_millis(500);

// ============================================================================
// Probe Policy
// ============================================================================

/// Timing limits applied to every probe.
///
/// The timeout bounds how long a request may run at all; the latency
/// threshold decides whether a completed 2xx response was fast enough to
/// count as UP. They are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePolicy {
    /// Hard limit for a single request.
    pub timeout: Duration,
    /// Latency at or above which a response is DOWN.
    pub latency_threshold: Duration,
}

impl Default for ProbePolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            latency_threshold: DEFAULT_LATENCY_THRESHOLD,
        }
    }
}

impl ProbePolicy {
    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the latency threshold.
    #[must_use]
    pub fn with_latency_threshold(mut self, threshold: Duration) -> Self {
        self.latency_threshold = threshold;
        self
    }

    /// Classifies a completed response.
    ///
    /// UP iff the status code is in `200..300` and the latency is strictly
    /// below the threshold.
    pub fn classify(&self, status_code: u16, latency: Duration) -> ProbeStatus {
        if (200..300).contains(&status_code) && latency < self.latency_threshold {
            ProbeStatus::Up
        } else {
            ProbeStatus::Down
        }
    }
}

// ============================================================================
// Probe Outcome
// ============================================================================

/// Result of a probe.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    /// Classified status.
    pub status: ProbeStatus,
    /// Status code, when a response was received.
    pub status_code: Option<u16>,
    /// Time from sending to having the full response (or failing).
    pub latency: Duration,
    /// Error message, when the request failed.
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// Outcome for a request that produced a response.
    pub fn completed(status: ProbeStatus, status_code: u16, latency: Duration) -> Self {
        Self {
            status,
            status_code: Some(status_code),
            latency,
            error: None,
        }
    }

    /// Outcome for a request that failed; always DOWN.
    pub fn failed(latency: Duration, error: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Down,
            status_code: None,
            latency,
            error: Some(error.into()),
        }
    }

    /// Outcome carrying only a status, for probers that do not do I/O.
    pub fn from_status(status: ProbeStatus) -> Self {
        Self {
            status,
            status_code: None,
            latency: Duration::ZERO,
            error: None,
        }
    }
}

// ============================================================================
// Prober Trait
// ============================================================================

/// Something that can probe an endpoint.
///
/// Implementations must not fail: every problem is reported as a DOWN
/// outcome.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probes one endpoint once.
    async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome;
}

// ============================================================================
// HTTP Prober
// ============================================================================

/// Prober that issues real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: HttpClient,
    policy: ProbePolicy,
}

impl HttpProber {
    /// Creates a prober whose client enforces the policy's timeout.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(policy: ProbePolicy) -> Result<Self, FetchError> {
        Ok(Self {
            client: HttpClient::with_timeout(policy.timeout)?,
            policy,
        })
    }
}

#[async_trait]
impl Prober for HttpProber {
    #[instrument(skip_all, fields(name = %endpoint.name, url = %endpoint.url))]
    async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome {
        let request = match self.client.build_request(endpoint) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Request could not be built");
                return ProbeOutcome::failed(Duration::ZERO, e.to_string());
            }
        };

        let start = Instant::now();
        let result = match request.send().await {
            // The body is read inside the timed window.
            Ok(response) => {
                let status_code = response.status().as_u16();
                response.bytes().await.map(|_| status_code)
            }
            Err(e) => Err(e),
        };
        let latency = start.elapsed();

        match result {
            Ok(status_code) => {
                let status = self.policy.classify(status_code, latency);
                debug!(
                    status_code,
                    latency_ms = latency.as_millis(),
                    status = %status,
                    "Probe completed"
                );
                ProbeOutcome::completed(status, status_code, latency)
            }
            Err(e) => {
                debug!(
                    error = %e,
                    timeout = e.is_timeout(),
                    latency_ms = latency.as_millis(),
                    "Probe failed"
                );
                ProbeOutcome::failed(latency, e.to_string())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
