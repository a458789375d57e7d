//! Capabilities injected by the host application.
//!
//! Responsibilities:
//! - Define the navigation capability consumed by actions (`Navigator`).
//! - Define the best-effort activity log sink (`ActivitySink`) and its implementations.
//!
//! Does NOT handle:
//! - Route rendering or validation (the host owns its routes).
//! - Deciding what to record (callers pick the kind and details).
//!
//! Invariants:
//! - Activity sink failures never reach the dispatcher; callers log and continue.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

/// Fire-and-forget routing capability.
pub trait Navigator {
    /// Route the host to `path`.
    fn navigate(&mut self, path: &str);
}

/// In-process router that remembers where it has been.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: String,
    history: Vec<String>,
}

impl Router {
    /// Create a router starting at `start`.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            history: Vec::new(),
        }
    }

    /// The current route.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Previously visited routes, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for Router {
    fn navigate(&mut self, path: &str) {
        if self.current == path {
            return;
        }
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.history.push(previous);
    }
}

/// What kind of interaction an activity record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A keyboard shortcut fired
    Shortcut,
    /// A palette item was executed
    Palette,
    /// The host changed route
    Navigation,
}

/// Errors raised while writing an activity record.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("failed to open activity log at {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write activity record")]
    Write(#[from] std::io::Error),

    #[error("failed to encode activity record")]
    Encode(#[from] serde_json::Error),

    #[error("activity log lock poisoned")]
    Poisoned,
}

/// Best-effort sink for interaction history.
pub trait ActivitySink {
    /// Record one interaction.
    fn record(&self, kind: ActivityKind, details: &str) -> Result<(), ActivityError>;
}

impl<T: ActivitySink + ?Sized> ActivitySink for Arc<T> {
    fn record(&self, kind: ActivityKind, details: &str) -> Result<(), ActivityError> {
        (**self).record(kind, details)
    }
}

/// Records activity as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingActivitySink;

impl ActivitySink for TracingActivitySink {
    fn record(&self, kind: ActivityKind, details: &str) -> Result<(), ActivityError> {
        tracing::info!(?kind, details, "activity");
        Ok(())
    }
}

/// Drops every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullActivitySink;

impl ActivitySink for NullActivitySink {
    fn record(&self, _kind: ActivityKind, _details: &str) -> Result<(), ActivityError> {
        Ok(())
    }
}

#[derive(Serialize)]
struct ActivityRecord<'a> {
    timestamp: String,
    kind: ActivityKind,
    details: &'a str,
}

/// Appends activity records as JSON lines.
#[derive(Debug)]
pub struct JsonlActivitySink {
    file: Mutex<File>,
}

impl JsonlActivitySink {
    /// Open (or create) the log file in append mode.
    pub fn open(path: &Path) -> Result<Self, ActivityError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ActivityError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ActivitySink for JsonlActivitySink {
    fn record(&self, kind: ActivityKind, details: &str) -> Result<(), ActivityError> {
        let record = ActivityRecord {
            timestamp: Utc::now().to_rfc3339(),
            kind,
            details,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = self.file.lock().map_err(|_| ActivityError::Poisoned)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Record an interaction, logging (not propagating) sink failures.
pub fn record_best_effort(sink: &dyn ActivitySink, kind: ActivityKind, details: &str) {
    if let Err(e) = sink.record(kind, details) {
        tracing::warn!(error = %e, ?kind, "Failed to record activity");
    }
}
