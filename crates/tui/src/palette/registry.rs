//! Command registry: the unified item set behind the palette.
//!
//! Responsibilities:
//! - Define the static catalog (navigation targets and quick actions).
//! - Map each domain record to exactly one `CommandItem`.
//!
//! Does NOT handle:
//! - Query scoring or ordering (see `palette::ranker`).
//! - Loading records (see `records`).
//!
//! Invariants:
//! - `build` is total and side-effect free; the same inputs yield the same items in the same order.
//! - Item ids are `<kind>:<record id>` for records and `nav:`/`action:` slugs for static items.

use chrono::{DateTime, Utc};

use crate::action::{Action, HostCommand};
use crate::palette::item::{CommandItem, CommandKind};
use crate::records::{
    CalendarEvent, ContentItem, ContentStage, MemoryEntry, RecordSnapshot, Task, TaskStatus,
};

pub const NAVIGATION_PRIORITY: i32 = 100;
pub const QUICK_ACTION_PRIORITY: i32 = 90;

const TASK_ACTIVE_PRIORITY: i32 = 80;
const TASK_PRIORITY: i32 = 50;
const CONTENT_ACTIVE_PRIORITY: i32 = 70;
const CONTENT_PRIORITY: i32 = 40;
const EVENT_UPCOMING_PRIORITY: i32 = 60;
const EVENT_PAST_PRIORITY: i32 = 30;
const MEMORY_PRIORITY: i32 = 20;

/// A dashboard page reachable by route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    pub slug: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub keywords: &'static [&'static str],
}

/// Dashboard pages in display order.
pub const NAV_TARGETS: [NavTarget; 7] = [
    NavTarget {
        slug: "dashboard",
        title: "Dashboard",
        path: "/",
        keywords: &["home", "overview"],
    },
    NavTarget {
        slug: "tasks",
        title: "Tasks",
        path: "/tasks",
        keywords: &["tasks", "todo"],
    },
    NavTarget {
        slug: "content",
        title: "Content",
        path: "/content",
        keywords: &["content", "pipeline", "videos"],
    },
    NavTarget {
        slug: "calendar",
        title: "Calendar",
        path: "/calendar",
        keywords: &["calendar", "events", "schedule"],
    },
    NavTarget {
        slug: "memory",
        title: "Memory",
        path: "/memory",
        keywords: &["memory", "notes", "knowledge"],
    },
    NavTarget {
        slug: "team",
        title: "Team",
        path: "/team",
        keywords: &["team", "agents", "people"],
    },
    NavTarget {
        slug: "settings",
        title: "Settings",
        path: "/settings",
        keywords: &["settings", "preferences", "config"],
    },
];

/// Look up a page title by route.
pub fn route_title(path: &str) -> Option<&'static str> {
    NAV_TARGETS.iter().find(|t| t.path == path).map(|t| t.title)
}

/// Navigation targets and quick actions, always present in the palette.
pub fn static_items() -> Vec<CommandItem> {
    let navigation = NAV_TARGETS.iter().map(|target| CommandItem {
        id: format!("nav:{}", target.slug),
        title: target.title.to_string(),
        subtitle: None,
        kind: CommandKind::Navigation,
        keywords: target.keywords.iter().map(|k| k.to_string()).collect(),
        priority: NAVIGATION_PRIORITY,
        action: Action::Navigate(target.path.to_string()),
    });

    let quick_actions = [
        (
            "new-task",
            "New Task",
            "Create a task",
            &["create", "add", "task"][..],
            Action::Host(HostCommand::NewTask),
        ),
        (
            "toggle-theme",
            "Toggle Theme",
            "Switch light and dark mode",
            &["theme", "dark", "light"][..],
            Action::Host(HostCommand::ToggleTheme),
        ),
        (
            "refresh-data",
            "Refresh Data",
            "Reload dashboard records",
            &["refresh", "reload", "sync"][..],
            Action::Host(HostCommand::RefreshData),
        ),
        (
            "keyboard-shortcuts",
            "Keyboard Shortcuts",
            "Show all shortcuts",
            &["help", "keys", "shortcuts"][..],
            Action::ToggleHelp,
        ),
    ]
    .into_iter()
    .map(|(slug, title, subtitle, keywords, action)| CommandItem {
        id: format!("action:{}", slug),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        kind: CommandKind::Action,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        priority: QUICK_ACTION_PRIORITY,
        action,
    });

    navigation.chain(quick_actions).collect()
}

/// The item set for one palette session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandRegistry {
    items: Vec<CommandItem>,
}

impl CommandRegistry {
    /// Build the full item set from static items and a record snapshot.
    ///
    /// `now` decides whether a calendar event is still upcoming.
    pub fn build(static_items: &[CommandItem], records: &RecordSnapshot, now: DateTime<Utc>) -> Self {
        let mut items = Vec::with_capacity(static_items.len() + records.len());
        items.extend_from_slice(static_items);
        items.extend(records.tasks.iter().map(task_item));
        items.extend(records.content.iter().map(content_item));
        items.extend(records.events.iter().map(|e| event_item(e, now)));
        items.extend(records.memories.iter().map(memory_item));
        Self { items }
    }

    pub fn items(&self) -> &[CommandItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CommandItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Collects non-empty keyword fields, then appends the type literal.
#[derive(Default)]
struct Keywords(Vec<String>);

impl Keywords {
    fn push(mut self, field: &str) -> Self {
        let field = field.trim();
        if !field.is_empty() {
            self.0.push(field.to_string());
        }
        self
    }

    fn push_opt(self, field: Option<&str>) -> Self {
        match field {
            Some(field) => self.push(field),
            None => self,
        }
    }

    fn push_all(self, fields: &[String]) -> Self {
        fields.iter().fold(self, |acc, f| acc.push(f))
    }

    fn finish(mut self, kind: CommandKind) -> Vec<String> {
        self.0.push(kind.as_str().to_string());
        self.0
    }
}

fn task_item(task: &Task) -> CommandItem {
    let priority = if task.status == TaskStatus::InProgress {
        TASK_ACTIVE_PRIORITY
    } else {
        TASK_PRIORITY
    };
    CommandItem {
        id: format!("task:{}", task.id),
        title: task.title.clone(),
        subtitle: Some(task.status.label().to_string()),
        kind: CommandKind::Task,
        keywords: Keywords::default()
            .push(&task.title)
            .push_opt(task.description.as_deref())
            .push_opt(task.agent.as_deref())
            .push(task.status.label())
            .push_all(&task.tags)
            .finish(CommandKind::Task),
        priority,
        action: Action::Navigate("/tasks".to_string()),
    }
}

fn content_item(item: &ContentItem) -> CommandItem {
    let priority = if item.stage == ContentStage::Filming {
        CONTENT_ACTIVE_PRIORITY
    } else {
        CONTENT_PRIORITY
    };
    CommandItem {
        id: format!("content:{}", item.id),
        title: item.title.clone(),
        subtitle: Some(item.stage.label().to_string()),
        kind: CommandKind::Content,
        keywords: Keywords::default()
            .push(&item.title)
            .push_opt(item.description.as_deref())
            .push_opt(item.agent.as_deref())
            .push(item.stage.label())
            .push_all(&item.tags)
            .finish(CommandKind::Content),
        priority,
        action: Action::Navigate("/content".to_string()),
    }
}

fn event_item(event: &CalendarEvent, now: DateTime<Utc>) -> CommandItem {
    let priority = if event.start > now {
        EVENT_UPCOMING_PRIORITY
    } else {
        EVENT_PAST_PRIORITY
    };
    CommandItem {
        id: format!("event:{}", event.id),
        title: event.title.clone(),
        subtitle: Some(event.start.format("%Y-%m-%d %H:%M").to_string()),
        kind: CommandKind::Event,
        keywords: Keywords::default()
            .push(&event.title)
            .push_opt(event.description.as_deref())
            .push_opt(event.agent.as_deref())
            .push_opt(event.category.as_deref())
            .finish(CommandKind::Event),
        priority,
        action: Action::Navigate("/calendar".to_string()),
    }
}

fn memory_item(entry: &MemoryEntry) -> CommandItem {
    CommandItem {
        id: format!("memory:{}", entry.id),
        title: entry.title.clone(),
        subtitle: entry.category.clone(),
        kind: CommandKind::Memory,
        keywords: Keywords::default()
            .push(&entry.title)
            .push(&entry.content)
            .push_opt(entry.category.as_deref())
            .push_all(&entry.tags)
            .finish(CommandKind::Memory),
        priority: MEMORY_PRIORITY,
        action: Action::Navigate("/memory".to_string()),
    }
}
