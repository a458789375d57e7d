//! Keybinding catalog and shortcut resolver.
//!
//! Responsibilities:
//! - Define the binding shape (single key, modified key or chord) and its help metadata.
//! - Resolve single keys and completed chords against bindings in declaration order.
//!
//! Non-responsibilities:
//! - Tracking chord state or timers (see `dispatcher`).
//! - Applying actions (the host does that).
//!
//! Invariants:
//! - Bindings are consulted in declaration order and the first match wins; overlaps are not detected.
//! - Chord bindings are only reachable through `resolve_chord`, never `resolve_single`.
//! - A single binding's modifier requirement must equal the held modifiers exactly.

use std::fmt;

use keydeck_config::KeybindAction;
use keydeck_config::keybind::{KeyCodeName, ModifierFlags};

use crate::action::Action;
use crate::input::key::KeyInput;

mod bindings;
pub mod overrides;

/// Modifier a single-key binding may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Command on macOS, Control elsewhere
    CmdCtrl,
    Shift,
    Alt,
}

impl Modifier {
    /// The exact modifier set this requirement matches.
    pub fn flags(self) -> ModifierFlags {
        match self {
            Modifier::CmdCtrl => ModifierFlags {
                ctrl: true,
                ..ModifierFlags::NONE
            },
            Modifier::Shift => ModifierFlags {
                shift: true,
                ..ModifierFlags::NONE
            },
            Modifier::Alt => ModifierFlags {
                alt: true,
                ..ModifierFlags::NONE
            },
        }
    }

    /// Requirement for a held set, or `None` when more than one modifier is held.
    pub fn from_flags(flags: ModifierFlags) -> Option<Option<Self>> {
        match (flags.ctrl, flags.shift, flags.alt) {
            (false, false, false) => Some(None),
            (true, false, false) => Some(Some(Modifier::CmdCtrl)),
            (false, true, false) => Some(Some(Modifier::Shift)),
            (false, false, true) => Some(Some(Modifier::Alt)),
            _ => None,
        }
    }
}

/// Key shape of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Single(KeyCodeName),
    Chord(KeyCodeName, KeyCodeName),
}

/// Help grouping; has no effect on matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Actions,
    Palette,
    General,
}

impl Category {
    pub const ORDER: [Category; 4] = [
        Category::Navigation,
        Category::Actions,
        Category::Palette,
        Category::General,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Actions => "Actions",
            Category::Palette => "Command Palette",
            Category::General => "General",
        }
    }
}

/// A registered shortcut.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub keys: KeyPattern,
    pub modifier: Option<Modifier>,
    pub category: Category,
    pub description: &'static str,
    /// Config identifier when users may re-key this binding
    pub bindable: Option<KeybindAction>,
    pub action: Action,
}

impl KeyBinding {
    pub fn is_chord(&self) -> bool {
        matches!(self.keys, KeyPattern::Chord(..))
    }

    fn matches_single(&self, input: &KeyInput) -> bool {
        let KeyPattern::Single(token) = self.keys else {
            return false;
        };
        let required = self.modifier.map_or(ModifierFlags::NONE, Modifier::flags);
        token == input.token && required == input.modifiers
    }

    fn matches_chord(&self, leader: KeyCodeName, follower: KeyCodeName) -> bool {
        matches!(self.keys, KeyPattern::Chord(l, f) if l == leader && f == follower)
    }
}

/// Display form, e.g. `g t`, `Shift+t`, `?`.
impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.keys, self.modifier) {
            (KeyPattern::Chord(leader, follower), _) => write!(f, "{} {}", leader, follower),
            (KeyPattern::Single(token), None) => write!(f, "{}", token),
            (KeyPattern::Single(token), Some(m)) => write!(f, "{}+{}", m.flags(), token),
        }
    }
}

/// Ordered binding table plus the chord leader.
#[derive(Debug, Clone, PartialEq)]
pub struct Keymap {
    leader: KeyCodeName,
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    /// Default catalog with chords under `leader`.
    pub fn new(leader: KeyCodeName) -> Self {
        Self {
            leader,
            bindings: bindings::all(leader),
        }
    }

    /// Arbitrary bindings, in the order given.
    pub fn from_bindings(leader: KeyCodeName, bindings: Vec<KeyBinding>) -> Self {
        Self { leader, bindings }
    }

    pub fn leader(&self) -> KeyCodeName {
        self.leader
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// True when `input` starts a chord: the leader with nothing held.
    pub fn is_leader(&self, input: &KeyInput) -> bool {
        input.token == self.leader && input.modifiers.is_empty()
    }

    /// First non-chord binding matching the key and held modifiers.
    pub fn resolve_single(&self, input: &KeyInput) -> Option<&KeyBinding> {
        self.bindings.iter().find(|b| b.matches_single(input))
    }

    /// First chord binding for `leader` then `follower`.
    pub fn resolve_chord(&self, leader: KeyCodeName, follower: &KeyInput) -> Option<&KeyBinding> {
        self.bindings
            .iter()
            .find(|b| b.matches_chord(leader, follower.token))
    }

    /// Chord followers available after the leader, for the pending hint.
    pub fn chord_followers(&self, leader: KeyCodeName) -> Vec<&KeyBinding> {
        self.bindings
            .iter()
            .filter(|b| matches!(b.keys, KeyPattern::Chord(l, _) if l == leader))
            .collect()
    }

    pub fn binding_for(&self, action: KeybindAction) -> Option<&KeyBinding> {
        self.bindings.iter().find(|b| b.bindable == Some(action))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new(KeyCodeName::Char('g'))
    }
}
