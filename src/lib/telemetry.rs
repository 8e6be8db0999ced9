//! Telemetry initialization and validation span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr next to user-facing messages, so the default filter is
/// `warn`; set `RUST_LOG` for more.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one validation call.
pub struct ValidationSpan {
    span: Span,
    started_at: Instant,
    operation: &'static str,
}

impl ValidationSpan {
    /// Start a span for `operation` on `path`.
    pub fn start(operation: &'static str, path: &str) -> Self {
        let span = info_span!(
            target: "deploy_path_guard::validate",
            "validation",
            operation,
            path
        );
        Self {
            span,
            started_at: Instant::now(),
            operation,
        }
    }

    /// Record an intermediate step inside the span.
    pub fn step(&self, step: &'static str) {
        let _entered = self.span.enter();
        debug!(
            target: "deploy_path_guard::validate",
            operation = self.operation,
            step,
            "Validation step"
        );
    }

    /// Close the span while recording the outcome and exit code.
    pub fn finish(self, outcome: &'static str, exit_code: Option<u8>) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        info!(
            target: "deploy_path_guard::validate",
            operation = self.operation,
            outcome,
            exit_code,
            elapsed_us,
            "Completed path validation"
        );
    }
}
