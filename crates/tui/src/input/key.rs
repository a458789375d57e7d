//! Normalised key input consumed by the dispatcher.
//!
//! Responsibilities:
//! - Convert crossterm key events into `KeyInput` tokens comparable with parsed key strings.
//! - Carry the focus target so the dispatcher can suppress shortcuts while text is edited.
//!
//! Invariants:
//! - Only key presses convert; release and repeat events yield `None`.
//! - Ctrl, Super and Meta all set the `ctrl` flag.
//! - Letters are lower-case with `shift` set for upper-case input; other symbols never carry `shift`.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use keydeck_config::keybind::{KeyCodeName, ModifierFlags, ParsedKey};

/// Where keyboard focus sits when a key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputTarget {
    /// Nothing editable is focused
    #[default]
    Surface,
    TextInput,
    TextArea,
    ContentEditable,
}

impl InputTarget {
    pub fn is_text_editing(self) -> bool {
        !matches!(self, InputTarget::Surface)
    }
}

/// One key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub token: KeyCodeName,
    pub modifiers: ModifierFlags,
    pub target: InputTarget,
}

impl KeyInput {
    /// Unmodified key on the surface.
    pub fn plain(token: KeyCodeName) -> Self {
        Self {
            token,
            modifiers: ModifierFlags::NONE,
            target: InputTarget::Surface,
        }
    }

    /// Unmodified character key on the surface.
    pub fn char(c: char) -> Self {
        Self::from_parsed(ParsedKey {
            code: KeyCodeName::Char(c.to_ascii_lowercase()),
            modifiers: ModifierFlags {
                shift: c.is_ascii_uppercase(),
                ..ModifierFlags::NONE
            },
        })
    }

    pub fn from_parsed(key: ParsedKey) -> Self {
        Self {
            token: key.code,
            modifiers: key.modifiers,
            target: InputTarget::Surface,
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierFlags) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_target(mut self, target: InputTarget) -> Self {
        self.target = target;
        self
    }

    pub fn as_parsed(&self) -> ParsedKey {
        ParsedKey {
            code: self.token,
            modifiers: self.modifiers,
        }
    }

    /// Normalise a crossterm event. Returns `None` for non-press events and keys with no token.
    pub fn from_event(event: KeyEvent, target: InputTarget) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        let mut modifiers = ModifierFlags {
            ctrl: event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        };

        let token = match event.code {
            KeyCode::Char(' ') => KeyCodeName::Space,
            KeyCode::Char(c) if c.is_alphabetic() => {
                if c.is_uppercase() {
                    modifiers.shift = true;
                }
                KeyCodeName::Char(c.to_lowercase().next().unwrap_or(c))
            }
            KeyCode::Char(c) => {
                modifiers.shift = false;
                KeyCodeName::Char(c)
            }
            KeyCode::F(n) => KeyCodeName::F(n),
            KeyCode::Esc => KeyCodeName::Esc,
            KeyCode::Enter => KeyCodeName::Enter,
            KeyCode::Tab => KeyCodeName::Tab,
            KeyCode::BackTab => {
                modifiers.shift = true;
                KeyCodeName::Tab
            }
            KeyCode::Backspace => KeyCodeName::Backspace,
            KeyCode::Delete => KeyCodeName::Delete,
            KeyCode::Insert => KeyCodeName::Insert,
            KeyCode::Home => KeyCodeName::Home,
            KeyCode::End => KeyCodeName::End,
            KeyCode::PageUp => KeyCodeName::PageUp,
            KeyCode::PageDown => KeyCodeName::PageDown,
            KeyCode::Up => KeyCodeName::Up,
            KeyCode::Down => KeyCodeName::Down,
            KeyCode::Left => KeyCodeName::Left,
            KeyCode::Right => KeyCodeName::Right,
            _ => return None,
        };

        Some(Self {
            token,
            modifiers,
            target,
        })
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_parsed().fmt(f)
    }
}
