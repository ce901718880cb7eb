//! Monitoring loop.
//!
//! A [`Monitor`] probes every configured endpoint once per cycle, folds the
//! results into the shared tracker, reports availability for every domain
//! seen so far, then sleeps. It runs until its cancellation token fires.

use futures::stream::{self, StreamExt};
use pulsecheck_core::{AvailabilityTracker, Endpoint, extract_domain};
use pulsecheck_fetch::Prober;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::output::Reporter;

/// Default pause between cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(15);

/// Default number of probes in flight within one cycle.
pub const DEFAULT_CONCURRENCY: usize = 1;

// ============================================================================
// Monitor Settings
// ============================================================================

/// Scheduling settings for the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSettings {
    /// Pause after each cycle.
    pub interval: Duration,
    /// Probes allowed in flight at once. 1 probes strictly in sequence.
    pub concurrency: usize,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl MonitorSettings {
    /// Sets the pause between cycles.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the probe concurrency. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

// ============================================================================
// Monitor
// ============================================================================

/// Drives probe cycles over a fixed endpoint list.
pub struct Monitor<P, R> {
    endpoints: Vec<Endpoint>,
    prober: P,
    reporter: R,
    tracker: Arc<dyn AvailabilityTracker>,
    settings: MonitorSettings,
    cycles: u64,
}

impl<P: Prober, R: Reporter> Monitor<P, R> {
    /// Creates a monitor with default settings.
    pub fn new(
        endpoints: Vec<Endpoint>,
        prober: P,
        reporter: R,
        tracker: Arc<dyn AvailabilityTracker>,
    ) -> Self {
        Self {
            endpoints,
            prober,
            reporter,
            tracker,
            settings: MonitorSettings::default(),
            cycles: 0,
        }
    }

    /// Replaces the scheduling settings.
    #[must_use]
    pub fn with_settings(mut self, settings: MonitorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Number of fully completed cycles.
    #[cfg(test)]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs cycles until `token` is cancelled.
    ///
    /// Cancellation is observed at every await point: an in-flight cycle is
    /// abandoned where it stands, without its availability report. Probes it
    /// already recorded stay recorded.
    pub async fn run(&mut self, token: CancellationToken) {
        debug!(
            endpoints = self.endpoints.len(),
            interval_secs = self.settings.interval.as_secs_f64(),
            concurrency = self.settings.concurrency,
            "Monitor started"
        );

        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => break,
                () = self.run_cycle() => {}
            }

            tokio::select! {
                biased;
                () = token.cancelled() => break,
                () = tokio::time::sleep(self.settings.interval) => {}
            }
        }

        debug!(cycles = self.cycles, "Monitor cancelled");
        self.reporter.shutdown();
    }

    /// Runs a single cycle: probe everything, then report every domain.
    ///
    /// Results are consumed in configured order even when probes overlap, so
    /// recording and endpoint events follow the endpoint list.
    pub async fn run_cycle(&mut self) {
        let started = Instant::now();
        let prober = &self.prober;

        let mut probes = stream::iter(&self.endpoints)
            .map(|endpoint| async move { (endpoint, prober.probe(endpoint).await) })
            .buffered(self.settings.concurrency);

        while let Some((endpoint, outcome)) = probes.next().await {
            self.tracker
                .record(extract_domain(&endpoint.url), outcome.status);
            self.reporter.endpoint_status(endpoint, outcome.status);
        }

        for report in self.tracker.snapshot() {
            self.reporter.domain_availability(&report);
        }

        self.cycles += 1;
        debug!(
            cycle = self.cycles,
            elapsed_ms = started.elapsed().as_millis(),
            "Cycle complete"
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
