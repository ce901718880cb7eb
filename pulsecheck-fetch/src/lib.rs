// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Pulsecheck Fetch
//!
//! HTTP probing for the Pulsecheck endpoint monitor.
//!
//! - [`client::HttpClient`] - reqwest wrapper that turns an [`Endpoint`]
//!   descriptor into a request
//! - [`probe::ProbePolicy`] - timeout and latency threshold, plus the UP/DOWN
//!   classification rule
//! - [`probe::Prober`] - trait the monitor probes through
//! - [`probe::HttpProber`] - production prober
//!
//! A probe never fails: transport errors, timeouts, slow or non-2xx
//! responses all come back as [`ProbeStatus::Down`].
//!
//! ## Example
//!
//! ```ignore
//! use pulsecheck_core::Endpoint;
//! use pulsecheck_fetch::{HttpProber, ProbePolicy, Prober};
//!
//! let prober = HttpProber::new(ProbePolicy::default())?;
//! let outcome = prober.probe(&Endpoint::new("https://fetch.com/")).await;
//! println!("{}", outcome.status);
//! ```
//!
//! [`Endpoint`]: pulsecheck_core::Endpoint
//! [`ProbeStatus::Down`]: pulsecheck_core::ProbeStatus::Down

pub mod client;
pub mod error;
pub mod probe;

// Re-export key types at crate root
pub use client::HttpClient;
pub use error::FetchError;
pub use probe::{
    DEFAULT_LATENCY_THRESHOLD, DEFAULT_TIMEOUT, HttpProber, ProbeOutcome, ProbePolicy, Prober,
};
