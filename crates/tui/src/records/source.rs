//! Record loaders backing the command palette.
//!
//! Responsibilities:
//! - Define the four-loader `RecordSource` seam.
//! - Take a `RecordSnapshot` that degrades a failing loader to an empty list.
//! - Provide in-memory and JSON-directory implementations.
//!
//! Does NOT handle:
//! - Caching or watching files (every call reads current data).
//!
//! Invariants:
//! - A missing data file is an empty list, not an error.
//! - `snapshot` never fails; loader errors are logged at warn.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{CalendarEvent, ContentItem, MemoryEntry, Task};

/// Errors raised by a record loader.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("record source unavailable: {0}")]
    Unavailable(String),
}

/// Four independent loaders returning the current record lists.
pub trait RecordSource {
    fn tasks(&self) -> Result<Vec<Task>, RecordError>;
    fn content(&self) -> Result<Vec<ContentItem>, RecordError>;
    fn events(&self) -> Result<Vec<CalendarEvent>, RecordError>;
    fn memories(&self) -> Result<Vec<MemoryEntry>, RecordError>;

    /// Load every record kind, treating a failed kind as empty.
    fn snapshot(&self) -> RecordSnapshot {
        RecordSnapshot {
            tasks: or_empty("tasks", self.tasks()),
            content: or_empty("content", self.content()),
            events: or_empty("events", self.events()),
            memories: or_empty("memories", self.memories()),
        }
    }
}

fn or_empty<T>(kind: &'static str, result: Result<Vec<T>, RecordError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(kind, error = %e, "Record loader failed; using empty list");
            Vec::new()
        }
    }
}

/// All domain records observed at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSnapshot {
    pub tasks: Vec<Task>,
    pub content: Vec<ContentItem>,
    pub events: Vec<CalendarEvent>,
    pub memories: Vec<MemoryEntry>,
}

impl RecordSnapshot {
    /// Total number of records across kinds.
    pub fn len(&self) -> usize {
        self.tasks.len() + self.content.len() + self.events.len() + self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Record source over lists held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: RecordSnapshot,
}

impl InMemorySource {
    pub fn new(snapshot: RecordSnapshot) -> Self {
        Self { snapshot }
    }

    /// Replace the held records; the next palette open observes them.
    pub fn replace(&mut self, snapshot: RecordSnapshot) {
        self.snapshot = snapshot;
    }
}

impl RecordSource for InMemorySource {
    fn tasks(&self) -> Result<Vec<Task>, RecordError> {
        Ok(self.snapshot.tasks.clone())
    }

    fn content(&self) -> Result<Vec<ContentItem>, RecordError> {
        Ok(self.snapshot.content.clone())
    }

    fn events(&self) -> Result<Vec<CalendarEvent>, RecordError> {
        Ok(self.snapshot.events.clone())
    }

    fn memories(&self) -> Result<Vec<MemoryEntry>, RecordError> {
        Ok(self.snapshot.memories.clone())
    }
}

/// Record source reading JSON arrays from a data directory.
///
/// Expects `tasks.json`, `content.json`, `events.json` and `memory.json`.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub const TASKS_FILE: &'static str = "tasks.json";
    pub const CONTENT_FILE: &'static str = "content.json";
    pub const EVENTS_FILE: &'static str = "events.json";
    pub const MEMORY_FILE: &'static str = "memory.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, RecordError> {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Record file missing");
                return Ok(Vec::new());
            }
            Err(source) => return Err(RecordError::Read { path, source }),
        };
        serde_json::from_str(&raw).map_err(|source| RecordError::Parse { path, source })
    }
}

impl RecordSource for JsonDirSource {
    fn tasks(&self) -> Result<Vec<Task>, RecordError> {
        self.load(Self::TASKS_FILE)
    }

    fn content(&self) -> Result<Vec<ContentItem>, RecordError> {
        self.load(Self::CONTENT_FILE)
    }

    fn events(&self) -> Result<Vec<CalendarEvent>, RecordError> {
        self.load(Self::EVENTS_FILE)
    }

    fn memories(&self) -> Result<Vec<MemoryEntry>, RecordError> {
        self.load(Self::MEMORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TaskStatus;

    struct BrokenTasks;

    impl RecordSource for BrokenTasks {
        fn tasks(&self) -> Result<Vec<Task>, RecordError> {
            Err(RecordError::Unavailable("offline".to_string()))
        }
        fn content(&self) -> Result<Vec<ContentItem>, RecordError> {
            Ok(Vec::new())
        }
        fn events(&self) -> Result<Vec<CalendarEvent>, RecordError> {
            Ok(Vec::new())
        }
        fn memories(&self) -> Result<Vec<MemoryEntry>, RecordError> {
            Ok(vec![MemoryEntry {
                id: "m1".to_string(),
                title: "Note".to_string(),
                content: String::new(),
                category: None,
                tags: Vec::new(),
            }])
        }
    }

    #[test]
    fn snapshot_degrades_failed_kind() {
        let snapshot = BrokenTasks.snapshot();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.memories.len(), 1);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn json_dir_missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonDirSource::new(dir.path());
        assert!(source.snapshot().is_empty());
    }

    #[test]
    fn json_dir_reads_tasks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(JsonDirSource::TASKS_FILE),
            r#"[{"id": "t1", "title": "Write docs", "status": "review"}]"#,
        )
        .unwrap();

        let tasks = JsonDirSource::new(dir.path()).tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Review);
    }

    #[test]
    fn json_dir_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(JsonDirSource::EVENTS_FILE), "{not json").unwrap();

        let source = JsonDirSource::new(dir.path());
        assert!(matches!(source.events(), Err(RecordError::Parse { .. })));
        assert!(source.snapshot().events.is_empty());
    }
}
