//! Dashboard domain records surfaced in the command palette.
//!
//! Responsibilities:
//! - Define the task, content, calendar event and memory record shapes.
//! - Expose the record source seam (`RecordSource`) and its implementations.
//!
//! Does NOT handle:
//! - Mapping records to palette items (see `palette::registry`).
//! - Editing or persisting records (the host owns its data files).
//!
//! Invariants:
//! - Record ids are stable strings; palette item ids are derived from them.

mod source;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use source::{InMemorySource, JsonDirSource, RecordError, RecordSnapshot, RecordSource};

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Backlog,
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Human-readable label used in palette keywords.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }
}

/// A unit of work on the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Agent or person the task is assigned to
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Production stage of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStage {
    #[default]
    Idea,
    Scripting,
    Filming,
    Editing,
    Published,
}

impl ContentStage {
    /// Human-readable label used in palette keywords.
    pub fn label(self) -> &'static str {
        match self {
            ContentStage::Idea => "idea",
            ContentStage::Scripting => "scripting",
            ContentStage::Filming => "filming",
            ContentStage::Editing => "editing",
            ContentStage::Published => "published",
        }
    }
}

/// A piece of content moving through the production pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub stage: ContentStage,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A scheduled calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub agent: Option<String>,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A stored note or memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
