//! JSON report lines.

use anyhow::Result;
use pulsecheck_core::DomainAvailability;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for one domain's availability.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityOutput<'a> {
    pub domain: &'a str,
    pub availability: u8,
    pub up: u64,
    pub down: u64,
}

impl<'a> From<&'a DomainAvailability> for AvailabilityOutput<'a> {
    fn from(report: &'a DomainAvailability) -> Self {
        Self {
            domain: &report.domain,
            availability: report.availability,
            up: report.counts.up,
            down: report.counts.down,
        }
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter; one object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    /// Formats one availability report as a single-line JSON object.
    pub fn format_availability(&self, report: &DomainAvailability) -> Result<String> {
        Ok(serde_json::to_string(&AvailabilityOutput::from(report))?)
    }
}
