// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Pulsecheck Store
//!
//! State and configuration for the Pulsecheck monitor.
//!
//! This crate provides:
//!
//! - **`AvailabilityStore`**: cumulative per-domain UP/DOWN counters, shared
//!   between the monitor and whoever renders reports
//! - **`MonitorConfig`**: the endpoint list, loaded from a YAML file
//!
//! ## Usage
//!
//! ```ignore
//! use pulsecheck_core::{AvailabilityTracker, ProbeStatus};
//! use pulsecheck_store::{AvailabilityStore, MonitorConfig};
//!
//! let config = MonitorConfig::load_from(Path::new("endpoints.yaml"))?;
//! let store = AvailabilityStore::new();
//!
//! store.record("fetch.com", ProbeStatus::Up);
//! assert_eq!(store.availability("fetch.com"), 100);
//! ```

pub mod availability_store;
pub mod config;
pub mod error;

pub use availability_store::AvailabilityStore;
pub use config::MonitorConfig;
pub use error::StoreError;
#[cfg(test)]
mod config_tests;
