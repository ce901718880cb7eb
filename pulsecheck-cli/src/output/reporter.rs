//! Report sinks.
//!
//! The monitor emits three kinds of events: one status per probed endpoint,
//! one availability line per tracked domain after each cycle, and a shutdown
//! notice. A [`Reporter`] decides which of them are shown and where.

use pulsecheck_core::{DomainAvailability, Endpoint, ProbeStatus};
use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

use super::{JsonFormatter, TextFormatter};
use crate::OutputFormat;

// ============================================================================
// Reporter Trait
// ============================================================================

/// Receives monitor events.
pub trait Reporter: Send + Sync {
    /// One endpoint was probed.
    fn endpoint_status(&self, endpoint: &Endpoint, status: ProbeStatus);

    /// Availability of one domain at the end of a cycle.
    fn domain_availability(&self, report: &DomainAvailability);

    /// The monitor was cancelled.
    fn shutdown(&self);
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn endpoint_status(&self, endpoint: &Endpoint, status: ProbeStatus) {
        (**self).endpoint_status(endpoint, status);
    }

    fn domain_availability(&self, report: &DomainAvailability) {
        (**self).domain_availability(report);
    }

    fn shutdown(&self) {
        (**self).shutdown();
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn endpoint_status(&self, endpoint: &Endpoint, status: ProbeStatus) {
        (**self).endpoint_status(endpoint, status);
    }

    fn domain_availability(&self, report: &DomainAvailability) {
        (**self).domain_availability(report);
    }

    fn shutdown(&self) {
        (**self).shutdown();
    }
}

// ============================================================================
// Log Reporter
// ============================================================================

/// Detailed reporter: every event becomes a timestamped log line.
///
/// Lines go through `tracing`, so the timestamp and destination come from
/// the subscriber installed at startup.
#[derive(Debug, Default)]
pub struct LogReporter {
    formatter: TextFormatter,
}

impl LogReporter {
    /// Creates a new log reporter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for LogReporter {
    fn endpoint_status(&self, endpoint: &Endpoint, status: ProbeStatus) {
        info!("{}", self.formatter.format_endpoint(endpoint, status));
    }

    fn domain_availability(&self, report: &DomainAvailability) {
        info!("{}", self.formatter.format_availability(report));
    }

    fn shutdown(&self) {
        info!("{}", self.formatter.format_shutdown());
    }
}

// ============================================================================
// Plain Reporter
// ============================================================================

/// Default reporter: availability lines only, no timestamps.
///
/// Endpoint statuses and the shutdown notice are dropped.
#[derive(Debug)]
pub struct PlainReporter<W = Stdout> {
    out: Mutex<W>,
    format: OutputFormat,
}

impl PlainReporter<Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> PlainReporter<W> {
    /// Reporter writing to an arbitrary sink.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out: Mutex::new(out),
            format,
        }
    }

    /// Consumes the reporter and returns its sink.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, report: &DomainAvailability) -> String {
        match self.format {
            OutputFormat::Text => TextFormatter::new().format_availability(report),
            OutputFormat::Json => JsonFormatter::new()
                .format_availability(report)
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Failed to encode availability as JSON");
                    TextFormatter::new().format_availability(report)
                }),
        }
    }
}

impl<W: Write + Send> Reporter for PlainReporter<W> {
    fn endpoint_status(&self, _endpoint: &Endpoint, _status: ProbeStatus) {}

    fn domain_availability(&self, report: &DomainAvailability) {
        let line = self.render(report);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write availability line");
        }
    }

    fn shutdown(&self) {}
}
