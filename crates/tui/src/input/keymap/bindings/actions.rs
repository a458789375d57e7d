//! Single-key and modified shortcuts.
//!
//! Invariants:
//! - `t` precedes `Shift+t`; exact modifier matching keeps them apart.

use keydeck_config::KeybindAction;
use keydeck_config::keybind::KeyCodeName;

use crate::action::{Action, HostCommand};

use super::super::{Category, KeyBinding, KeyPattern, Modifier};

pub(super) fn bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding {
            keys: KeyPattern::Single(KeyCodeName::Char('n')),
            modifier: None,
            category: Category::Actions,
            description: "New task",
            bindable: Some(KeybindAction::NewTask),
            action: Action::Host(HostCommand::NewTask),
        },
        KeyBinding {
            keys: KeyPattern::Single(KeyCodeName::Char('t')),
            modifier: None,
            category: Category::Actions,
            description: "Jump calendar to today",
            bindable: Some(KeybindAction::JumpToToday),
            action: Action::Host(HostCommand::JumpToToday),
        },
        KeyBinding {
            keys: KeyPattern::Single(KeyCodeName::Char('t')),
            modifier: Some(Modifier::Shift),
            category: Category::Actions,
            description: "Toggle theme",
            bindable: Some(KeybindAction::ToggleTheme),
            action: Action::Host(HostCommand::ToggleTheme),
        },
        KeyBinding {
            keys: KeyPattern::Single(KeyCodeName::Char('r')),
            modifier: None,
            category: Category::Actions,
            description: "Refresh data",
            bindable: Some(KeybindAction::RefreshData),
            action: Action::Host(HostCommand::RefreshData),
        },
        KeyBinding {
            keys: KeyPattern::Single(KeyCodeName::Char('?')),
            modifier: None,
            category: Category::General,
            description: "Keyboard shortcuts",
            bindable: Some(KeybindAction::Help),
            action: Action::ToggleHelp,
        },
        KeyBinding {
            keys: KeyPattern::Single(KeyCodeName::Esc),
            modifier: None,
            category: Category::General,
            description: "Close overlay",
            bindable: None,
            action: Action::CancelOverlay,
        },
        KeyBinding {
            keys: KeyPattern::Single(KeyCodeName::Char('q')),
            modifier: None,
            category: Category::General,
            description: "Quit",
            bindable: Some(KeybindAction::Quit),
            action: Action::Quit,
        },
    ]
}
