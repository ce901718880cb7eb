// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Pulsecheck Core
//!
//! Core types, models, and traits for the Pulsecheck endpoint monitor.
//!
//! This crate provides the foundational abstractions shared by the other
//! Pulsecheck crates:
//!
//! - Domain models (endpoints, probe statuses, per-domain counters)
//! - Domain grouping of endpoint URLs
//! - The [`AvailabilityTracker`] trait the monitor aggregates through
//! - Error types
//!
//! ## Key Types
//!
//! ### Endpoint Types
//! - [`Endpoint`] - One monitored HTTP target as loaded from the config file
//!
//! ### Status Types
//! - [`ProbeStatus`] - Binary UP/DOWN classification of a single probe
//! - [`DomainCounts`] - Cumulative UP/DOWN counters for one domain
//! - [`DomainAvailability`] - Counters plus derived availability percentage

pub mod domain;
pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{DomainAvailability, DomainCounts, Endpoint, ProbeStatus};

// Domain grouping
pub use domain::extract_domain;

// Re-export traits
pub use traits::AvailabilityTracker;
