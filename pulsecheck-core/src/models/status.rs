//! Probe status and per-domain availability types.
//!
//! This module contains the aggregation vocabulary:
//! - [`ProbeStatus`] - Result of one probe
//! - [`DomainCounts`] - Cumulative counters per domain
//! - [`DomainAvailability`] - Counters with the derived percentage

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Probe Status
// ============================================================================

/// Binary classification of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeStatus {
    /// 2xx response received under the latency threshold.
    Up,
    /// Anything else, including every transport failure.
    Down,
}

impl ProbeStatus {
    /// Returns the report label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }

    /// Returns true for [`ProbeStatus::Up`].
    pub fn is_up(&self) -> bool {
        *self == Self::Up
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Domain Counts
// ============================================================================

/// Cumulative UP/DOWN counters for one domain.
///
/// Counters only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainCounts {
    /// Number of UP observations.
    pub up: u64,
    /// Number of DOWN observations.
    pub down: u64,
}

impl DomainCounts {
    /// Creates counters with the given values.
    pub fn new(up: u64, down: u64) -> Self {
        Self { up, down }
    }

    /// Increments the counter matching `status`.
    pub fn record(&mut self, status: ProbeStatus) {
        match status {
            ProbeStatus::Up => self.up = self.up.saturating_add(1),
            ProbeStatus::Down => self.down = self.down.saturating_add(1),
        }
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.up.saturating_add(self.down)
    }

    /// Availability as a rounded percentage in `0..=100`.
    ///
    /// Halfway values round to even (1 of 8 is 12%, 7 of 8 is 88%). No
    /// observations yields 0.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn availability(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let percent = (100.0 * (self.up as f64 / total as f64)).round_ties_even();
        percent.clamp(0.0, 100.0) as u8
    }
}

// ============================================================================
// Domain Availability
// ============================================================================

/// Reportable availability of one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAvailability {
    /// Domain key.
    pub domain: String,
    /// Counters at the time of the snapshot.
    pub counts: DomainCounts,
    /// Rounded availability percentage.
    pub availability: u8,
}

impl DomainAvailability {
    /// Derives the availability from the counters.
    pub fn new(domain: impl Into<String>, counts: DomainCounts) -> Self {
        Self {
            domain: domain.into(),
            availability: counts.availability(),
            counts,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_status_display() {
        assert_eq!(ProbeStatus::Up.to_string(), "UP");
        assert_eq!(ProbeStatus::Down.to_string(), "DOWN");
    }

    #[test]
    fn test_no_observations_is_zero() {
        assert_eq!(DomainCounts::default().availability(), 0);
    }

    #[test]
    fn test_availability_rounding() {
        let cases = [
            ((4, 0), 100),
            ((0, 4), 0),
            ((2, 2), 50),
            ((1, 2), 33),
            ((2, 1), 67),
            ((1, 7), 12),
            ((7, 1), 88),
            ((199, 1), 100),
            ((1, 199), 0),
        ];

        for ((up, down), expected) in cases {
            let counts = DomainCounts::new(up, down);
            assert_eq!(counts.availability(), expected, "Failed for {up} up / {down} down");
        }
    }

    #[test]
    fn test_record_is_monotonic() {
        let mut counts = DomainCounts::default();
        let script = [
            ProbeStatus::Up,
            ProbeStatus::Down,
            ProbeStatus::Down,
            ProbeStatus::Up,
            ProbeStatus::Up,
            ProbeStatus::Down,
        ];

        let mut previous = counts.availability();
        for status in script {
            counts.record(status);
            let current = counts.availability();
            match status {
                ProbeStatus::Up => assert!(current >= previous),
                ProbeStatus::Down => assert!(current <= previous),
            }
            previous = current;
        }
        assert_eq!(counts, DomainCounts::new(3, 3));
    }

    #[test]
    fn test_domain_availability_derives_percentage() {
        let report = DomainAvailability::new("fetch.com", DomainCounts::new(3, 1));
        assert_eq!(report.availability, 75);
        assert_eq!(report.counts.total(), 4);
    }

    #[test]
    fn test_status_serde_uppercase() {
        assert_eq!(serde_yaml::to_string(&ProbeStatus::Down).unwrap().trim(), "DOWN");
    }
}
