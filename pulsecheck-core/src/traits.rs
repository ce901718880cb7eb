//! Trait definitions for Pulsecheck.
//!
//! The monitor only talks to its aggregate state through
//! [`AvailabilityTracker`], so the cumulative store can be swapped for a
//! different counting scheme without touching the scheduling loop.

use crate::models::{DomainAvailability, DomainCounts, ProbeStatus};

/// Per-domain aggregation of probe results.
///
/// Implementations must be safe to call from concurrent probe tasks: every
/// `record` is applied atomically, with no partially applied increments.
pub trait AvailabilityTracker: Send + Sync {
    /// Records one probe result for a domain, creating its counters on first
    /// observation.
    fn record(&self, domain: &str, status: ProbeStatus);

    /// Returns the counters for a domain. Unseen domains report zero counts.
    fn counts(&self, domain: &str) -> DomainCounts;

    /// Returns every domain currently tracked.
    ///
    /// The order is implementation-defined.
    fn domains(&self) -> Vec<String>;

    /// Returns the rounded availability percentage for a domain.
    ///
    /// A domain with no observations has an availability of 0.
    fn availability(&self, domain: &str) -> u8 {
        self.counts(domain).availability()
    }

    /// Returns counters and availability for every tracked domain.
    fn snapshot(&self) -> Vec<DomainAvailability> {
        self.domains()
            .into_iter()
            .map(|domain| {
                let counts = self.counts(&domain);
                DomainAvailability::new(domain, counts)
            })
            .collect()
    }
}
