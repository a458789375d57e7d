//! File logging for the TUI.
//!
//! Invariants:
//! - Nothing is written to stdout or stderr while the terminal is in raw mode.
//! - The returned guard must be held until exit so buffered lines are flushed.

use std::path::Path;

use anyhow::{Context, Result};
use keydeck_config::constants::DEFAULT_LOG_FILE_NAME;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a daily-rolling, non-blocking file subscriber in `log_dir`.
///
/// Filtering follows `RUST_LOG`.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, DEFAULT_LOG_FILE_NAME);
    let (writer, guard) = non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
