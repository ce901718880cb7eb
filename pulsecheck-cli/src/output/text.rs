//! Plain text report lines.

use pulsecheck_core::{DomainAvailability, Endpoint, ProbeStatus};

/// Message logged when the monitor is cancelled.
const SHUTDOWN_MESSAGE: &str = "Monitoring stopped by user.";

/// Text formatter for monitor events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new() -> Self {
        Self
    }

    /// `<domain> has <pct>% availability percentage`
    pub fn format_availability(&self, report: &DomainAvailability) -> String {
        format!(
            "{} has {}% availability percentage",
            report.domain, report.availability
        )
    }

    /// `Endpoint '<name>' (<url>) is <UP|DOWN>.`
    pub fn format_endpoint(&self, endpoint: &Endpoint, status: ProbeStatus) -> String {
        format!("Endpoint '{}' ({}) is {}.", endpoint.name, endpoint.url, status)
    }

    /// Shutdown notice.
    pub fn format_shutdown(&self) -> &'static str {
        SHUTDOWN_MESSAGE
    }
}
