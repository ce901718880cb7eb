// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Pulsecheck - continuous HTTP endpoint health monitoring.
//!
//! # Examples
//!
//! ```bash
//! # Print per-domain availability every 15 seconds
//! pulsecheck endpoints.yaml
//!
//! # Timestamped log of every probe and every availability line
//! pulsecheck endpoints.yaml --detailed
//!
//! # JSON lines, probing four endpoints at a time every 30 seconds
//! pulsecheck endpoints.yaml --format json --concurrency 4 --interval 30
//! ```

mod monitor;
mod output;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use pulsecheck_fetch::{HttpProber, ProbePolicy};
use pulsecheck_store::{AvailabilityStore, MonitorConfig, StoreError};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{Subscriber, warn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use monitor::{DEFAULT_CONCURRENCY, Monitor, MonitorSettings};
use output::{LogReporter, PlainReporter, Reporter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Pulsecheck - HTTP endpoint availability monitor.
#[derive(Debug, Parser)]
#[command(name = "pulsecheck")]
#[command(about = "Continuously probe HTTP endpoints and report per-domain availability")]
#[command(long_about = r#"
Pulsecheck probes every endpoint in a YAML configuration file on a fixed
interval and reports the cumulative availability of each domain.

An endpoint is UP when it answers with a 2xx status in under the latency
threshold. Anything else, including timeouts and connection errors, is DOWN.

Examples:
  pulsecheck endpoints.yaml                 # Availability lines only
  pulsecheck endpoints.yaml --detailed      # Timestamped log of every probe
  pulsecheck endpoints.yaml --format json   # One JSON object per domain
"#)]
#[command(version)]
pub struct Cli {
    /// Path to the YAML endpoint list.
    pub config_file: PathBuf,

    /// Log every probe result and availability line with a timestamp.
    #[arg(long)]
    pub detailed: bool,

    /// Seconds to wait between cycles.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Latency in milliseconds at or above which a response counts as DOWN.
    #[arg(long, default_value_t = 500)]
    pub latency_threshold: u64,

    /// Number of endpoints probed at once within a cycle.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Output format for availability lines (ignored with --detailed).
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// `<domain> has <pct>% availability percentage`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// The configuration file could not be read or parsed.
    ConfigError = 2,
}

impl Cli {
    fn probe_policy(&self) -> ProbePolicy {
        ProbePolicy::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_latency_threshold(Duration::from_millis(self.latency_threshold))
    }

    fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings::default()
            .with_interval(Duration::from_secs(self.interval))
            .with_concurrency(self.concurrency)
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

/// Local wall-clock timestamps, e.g. `2024-05-01 12:00:00,123 -`.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S,%3f -"))
    }
}

/// Filter for the pulsecheck crates, derived from the output flags.
fn log_filter(detailed: bool, verbose: bool) -> EnvFilter {
    match (detailed, verbose) {
        (_, true) => EnvFilter::new("pulsecheck=debug,info"),
        (true, false) => EnvFilter::new("pulsecheck=info"),
        (false, false) => EnvFilter::new("pulsecheck=warn"),
    }
}

/// Layer for `--detailed`: `<timestamp> - <message>`, no level or target.
fn detailed_layer<S, W>(writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_target(false)
        .with_level(false)
        .with_ansi(ansi)
        .with_timer(LocalTimer)
        .with_writer(writer)
}

fn setup_logging(detailed: bool, verbose: bool) {
    let ansi = std::io::stderr().is_terminal();
    let filter = log_filter(detailed, verbose);

    if detailed {
        tracing_subscriber::registry()
            .with(detailed_layer(std::io::stderr, ansi))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(ansi)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.detailed, cli.verbose);

    let token = CancellationToken::new();
    tokio::spawn(shutdown_signal(token.clone()));

    let code = match run(&cli, token).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.downcast_ref::<StoreError>().is_some() {
                ExitCode::ConfigError
            } else {
                ExitCode::Error
            }
        }
    };
    std::process::exit(code as i32);
}

/// Loads the configuration and monitors until `token` is cancelled.
async fn run(cli: &Cli, token: CancellationToken) -> Result<()> {
    let config = MonitorConfig::load_from(&cli.config_file)?;

    let prober = HttpProber::new(cli.probe_policy()).context("Failed to build HTTP client")?;

    let reporter: Box<dyn Reporter> = if cli.detailed {
        Box::new(LogReporter::new())
    } else {
        Box::new(PlainReporter::stdout(cli.format))
    };

    let mut monitor = Monitor::new(
        config.endpoints,
        prober,
        reporter,
        Arc::new(AvailabilityStore::new()),
    )
    .with_settings(cli.monitor_settings());

    monitor.run(token).await;
    Ok(())
}

/// Cancels `token` on Ctrl+C or SIGTERM.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    token.cancel();
}

// ============================================================================
// Tests
// ============================================================================
