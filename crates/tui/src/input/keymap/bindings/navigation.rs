//! Leader chords that route to dashboard pages.
//!
//! Invariants:
//! - One chord per page, in page order.

use keydeck_config::KeybindAction;
use keydeck_config::keybind::KeyCodeName;

use crate::action::Action;

use super::super::{Category, KeyBinding, KeyPattern};

pub(super) fn bindings(leader: KeyCodeName) -> Vec<KeyBinding> {
    [
        ('d', "Go to Dashboard", "/", KeybindAction::GoDashboard),
        ('t', "Go to Tasks", "/tasks", KeybindAction::GoTasks),
        ('c', "Go to Content", "/content", KeybindAction::GoContent),
        ('e', "Go to Calendar", "/calendar", KeybindAction::GoCalendar),
        ('m', "Go to Memory", "/memory", KeybindAction::GoMemory),
        ('a', "Go to Team", "/team", KeybindAction::GoTeam),
        ('s', "Go to Settings", "/settings", KeybindAction::GoSettings),
    ]
    .into_iter()
    .map(|(follower, description, path, bindable)| KeyBinding {
        keys: KeyPattern::Chord(leader, KeyCodeName::Char(follower)),
        modifier: None,
        category: Category::Navigation,
        description,
        bindable: Some(bindable),
        action: Action::Navigate(path.to_string()),
    })
    .collect()
}
