//! keydeck - keyboard-driven dashboard shell.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration, terminal and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Key dispatch or palette ranking (see `keydeck::dispatcher` and `keydeck::palette`).
//! - Configuration parsing (see `keydeck_config`).
//!
//! Invariants:
//! - Logging is initialized before the terminal enters raw mode.
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use keydeck::app::App;
use keydeck::cli::Cli;
use keydeck::host::{ActivitySink, JsonlActivitySink, TracingActivitySink};
use keydeck::records::{InMemorySource, JsonDirSource, RecordSnapshot, RecordSource};
use keydeck::runtime::{event_loop, logging, terminal};
use keydeck_config::constants::DEFAULT_UI_TICK_MS;
use keydeck_config::{Config, ConfigLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guard must live for the whole of main() so buffered log lines are flushed
    let _log_guard = logging::init(&cli.log_dir)?;

    let config = load_config(&cli)?;
    tracing::info!(
        leader = %config.palette.leader_key,
        toggle = %config.palette.toggle_key,
        timeout_ms = config.palette.chord_timeout_ms,
        "Configuration loaded"
    );

    let source = record_source(&config);
    let activity = activity_sink(&cli)?;
    let mut app = App::from_config(&config, source, activity)
        .context("failed to build keyboard dispatcher from configuration")?;

    let (mut term, guard) = terminal::setup(cli.no_mouse)?;
    let result = event_loop::run(
        &mut term,
        &mut app,
        Duration::from_millis(DEFAULT_UI_TICK_MS),
    )
    .await;

    app.dispatcher.detach();
    drop(guard);
    term.show_cursor().context("failed to restore cursor")?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Event loop exited with an error");
    }
    result
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    loader = loader
        .from_file()
        .context("failed to read configuration file")?
        .from_env()
        .context("failed to read configuration from environment")?;

    if let Some(millis) = cli.chord_timeout_ms {
        loader = loader.with_chord_timeout_ms(millis);
    }
    if let Some(key) = &cli.leader_key {
        loader = loader.with_leader_key(key.clone());
    }
    if let Some(key) = &cli.palette_key {
        loader = loader.with_toggle_key(key.clone());
    }
    if let Some(dir) = &cli.data_dir {
        loader = loader.with_data_dir(dir.clone());
    }

    loader.build().context("invalid configuration")
}

fn record_source(config: &Config) -> Box<dyn RecordSource> {
    match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Reading records from directory");
            Box::new(JsonDirSource::new(dir.clone()))
        }
        None => {
            tracing::info!("No data directory configured, palette shows static commands only");
            Box::new(InMemorySource::new(RecordSnapshot::default()))
        }
    }
}

fn activity_sink(cli: &Cli) -> Result<Arc<dyn ActivitySink>> {
    match &cli.activity_log {
        Some(path) => {
            let sink = JsonlActivitySink::open(path)
                .with_context(|| format!("failed to open activity log {}", path.display()))?;
            Ok(Arc::new(sink))
        }
        None => Ok(Arc::new(TracingActivitySink)),
    }
}
