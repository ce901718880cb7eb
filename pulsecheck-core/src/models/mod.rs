//! Domain models for Pulsecheck.
//!
//! ## Submodules
//!
//! - `endpoint` - Endpoint descriptors loaded from configuration
//! - `status` - Probe statuses and per-domain availability counters

mod endpoint;
mod status;

// Re-export everything at the models level
pub use endpoint::Endpoint;
pub use status::{DomainAvailability, DomainCounts, ProbeStatus};
