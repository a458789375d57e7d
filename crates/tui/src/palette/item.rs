//! Palette item shape shared by static and record-backed entries.

use std::fmt;

use crate::action::Action;

/// What an item stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Navigation,
    Action,
    Task,
    Content,
    Event,
    Memory,
}

impl CommandKind {
    /// Type literal, also appended to record keywords.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Navigation => "navigation",
            CommandKind::Action => "action",
            CommandKind::Task => "task",
            CommandKind::Content => "content",
            CommandKind::Event => "event",
            CommandKind::Memory => "memory",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit presented in the command palette.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandItem {
    /// Unique within one registry build
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub kind: CommandKind,
    pub keywords: Vec<String>,
    /// Higher sorts first
    pub priority: i32,
    pub action: Action,
}

impl CommandItem {
    /// Text the scorer inspects: title, subtitle and keywords joined by spaces.
    ///
    /// A missing subtitle still contributes its separator, so an item without
    /// one reads `"Tasks  tasks todo"`.
    pub fn searchable_text(&self) -> String {
        let subtitle = self.subtitle.as_deref().unwrap_or("");
        format!("{} {} {}", self.title, subtitle, self.keywords.join(" "))
    }
}
