//! Keybinding configuration types.
//!
//! Responsibilities:
//! - Define overridable keybinding action identifiers (`KeybindAction`).
//! - Define `KeybindOverrides` for user-defined keybinding customizations.
//!
//! Does NOT handle:
//! - Keybinding parsing or validation (see `keybind` module at crate root).
//! - Runtime key event matching (see TUI crate).
//!
//! Invariants:
//! - `KeybindAction` uses snake_case serialization for config file consistency.
//! - `KeybindOverrides` uses `BTreeMap` for deterministic serialization.
//! - Only actions explicitly listed in overrides override the defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An overridable keybinding action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Go to the dashboard overview
    GoDashboard,
    /// Go to the task board
    GoTasks,
    /// Go to the content pipeline
    GoContent,
    /// Go to the calendar
    GoCalendar,
    /// Go to the memory browser
    GoMemory,
    /// Go to the team page
    GoTeam,
    /// Go to settings
    GoSettings,
    /// Create a new task
    NewTask,
    /// Jump the calendar to today
    JumpToToday,
    /// Toggle between light and dark theme
    ToggleTheme,
    /// Reload dashboard data
    RefreshData,
    /// Open the keyboard shortcuts overlay
    Help,
    /// Quit the application
    Quit,
}

impl KeybindAction {
    /// Every overridable action in declaration order.
    pub const ALL: [KeybindAction; 13] = [
        Self::GoDashboard,
        Self::GoTasks,
        Self::GoContent,
        Self::GoCalendar,
        Self::GoMemory,
        Self::GoTeam,
        Self::GoSettings,
        Self::NewTask,
        Self::JumpToToday,
        Self::ToggleTheme,
        Self::RefreshData,
        Self::Help,
        Self::Quit,
    ];
}

impl fmt::Display for KeybindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GoDashboard => "go_dashboard",
            Self::GoTasks => "go_tasks",
            Self::GoContent => "go_content",
            Self::GoCalendar => "go_calendar",
            Self::GoMemory => "go_memory",
            Self::GoTeam => "go_team",
            Self::GoSettings => "go_settings",
            Self::NewTask => "new_task",
            Self::JumpToToday => "jump_to_today",
            Self::ToggleTheme => "toggle_theme",
            Self::RefreshData => "refresh_data",
            Self::Help => "help",
            Self::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// User-defined keybinding overrides.
///
/// Maps action identifiers to key sequences (`"F1"`, `"Alt+t"`, `"g x"`).
/// Only actions listed here override the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeybindOverrides {
    /// Map of action -> key sequence string.
    pub overrides: BTreeMap<KeybindAction, String>,
}

impl KeybindOverrides {
    /// Returns true if there are no overrides configured.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the override for a specific action, if any.
    pub fn get(&self, action: KeybindAction) -> Option<&str> {
        self.overrides.get(&action).map(|s| s.as_str())
    }
}
