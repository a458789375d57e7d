//! Keybinding parsing and validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings into structured representations.
//! - Parse two-key chord sequences (`"g t"`).
//! - Validate keybinding overrides for conflicts and invalid syntax.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Runtime key event matching.
//!
//! Invariants:
//! - `Cmd`, `Command`, `Meta` and `Super` are aliases of `Ctrl`.
//! - Letters are stored lower-case; an upper-case letter implies Shift.
//! - Shift is dropped for non-letter symbols (`?` already encodes it).

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::types::keybind::KeybindAction;

/// Errors that can occur when parsing or validating keybindings.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// Invalid key syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'q', 'Ctrl+x', 'Shift+Tab', 'F1', 'g t'")]
    InvalidSyntax {
        /// The invalid key string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },

    /// Chord sequence that cannot be bound
    #[error("Invalid chord '{key}': {reason}")]
    InvalidChord {
        /// The chord string
        key: String,
        /// Why the chord was rejected
        reason: String,
    },

    /// More than one modifier on a single key
    #[error("Too many modifiers in '{key}': a binding takes at most one of Cmd/Ctrl, Shift, Alt")]
    TooManyModifiers {
        /// The offending key string
        key: String,
    },

    /// Conflicting keybindings
    #[error("Conflicting keybindings: '{key}' is assigned to both {action1} and {action2}")]
    Conflict {
        /// The conflicting key
        key: String,
        /// First action using this key
        action1: String,
        /// Second action using this key
        action2: String,
    },

    /// Reserved keybinding
    #[error("Reserved keybinding: '{key}' cannot be overridden")]
    ReservedKey {
        /// The reserved key
        key: String,
    },
}

/// A parsed key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    /// The key token
    pub code: KeyCodeName,
    /// Modifier flags
    pub modifiers: ModifierFlags,
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}+{}", self.modifiers, self.code)
        }
    }
}

/// Key token names shared by config strings and runtime key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    /// A character key, lower-case for letters (e.g., 'a', '1', '?')
    Char(char),
    /// Function key F1-F20
    F(u8),
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Tab key (Shift+Tab is Tab with the shift flag)
    Tab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Insert key
    Insert,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier flags for key combinations.
///
/// `ctrl` covers both Control and Command so bindings behave the same on
/// every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    /// Control or Command key pressed
    pub ctrl: bool,
    /// Shift key pressed
    pub shift: bool,
    /// Alt/Option key pressed
    pub alt: bool,
}

impl ModifierFlags {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Returns true when no modifier is held.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }

    /// Number of modifiers held.
    pub fn count(&self) -> usize {
        usize::from(self.ctrl) + usize::from(self.shift) + usize::from(self.alt)
    }
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// A bindable key sequence: one key, or a leader/follower chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySequence {
    /// A single key, possibly modified
    Single(ParsedKey),
    /// Two unmodified keys pressed one after the other
    Chord(KeyCodeName, KeyCodeName),
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(key) => write!(f, "{}", key),
            Self::Chord(leader, follower) => write!(f, "{} {}", leader, follower),
        }
    }
}

/// Parse a key string like "Ctrl+x", "F1", "Shift+Tab" into structured form.
///
/// # Examples
///
/// ```
/// use keydeck_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("Cmd+k").unwrap();
/// assert_eq!(key.code, KeyCodeName::Char('k'));
/// assert!(key.modifiers.ctrl);
///
/// let key = parse_key("T").unwrap();
/// assert_eq!(key.code, KeyCodeName::Char('t'));
/// assert!(key.modifiers.shift);
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    // A lone '+' is the plus key, not a separator
    let parts: Vec<&str> = if key_str == "+" {
        vec!["+"]
    } else {
        key_str.split('+').map(|s| s.trim()).collect()
    };

    let mut modifiers = ModifierFlags::default();
    let mut key_name = "";

    for part in &parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" | "meta" | "super" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" | "opt" => modifiers.alt = true,
            _ => {
                if key_name.is_empty() {
                    key_name = part;
                } else {
                    // Multiple non-modifier parts is invalid
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }
    }

    if key_name.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let code = match parse_key_code(key_name)? {
        KeyCodeName::Char(c) if c.is_ascii_uppercase() => {
            modifiers.shift = true;
            KeyCodeName::Char(c.to_ascii_lowercase())
        }
        KeyCodeName::Char(c) if !c.is_alphabetic() => {
            modifiers.shift = false;
            KeyCodeName::Char(c)
        }
        other => other,
    };

    Ok(ParsedKey { code, modifiers })
}

/// Parse a bindable sequence: a single key, or two space-separated keys.
///
/// Chord keys must be unmodified and the sequence is at most two keys long.
///
/// ```
/// use keydeck_config::keybind::{parse_sequence, KeyCodeName, KeySequence};
///
/// let seq = parse_sequence("g t").unwrap();
/// assert_eq!(seq, KeySequence::Chord(KeyCodeName::Char('g'), KeyCodeName::Char('t')));
/// ```
pub fn parse_sequence(key_str: &str) -> Result<KeySequence, KeybindError> {
    let parts: Vec<&str> = key_str.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        }),
        [single] => parse_key(single).map(KeySequence::Single),
        [leader, follower] => {
            let leader_key = parse_key(leader)?;
            let follower_key = parse_key(follower)?;
            if !leader_key.modifiers.is_empty() || !follower_key.modifiers.is_empty() {
                return Err(KeybindError::InvalidChord {
                    key: key_str.trim().to_string(),
                    reason: "chord keys cannot carry modifiers".to_string(),
                });
            }
            Ok(KeySequence::Chord(leader_key.code, follower_key.code))
        }
        _ => Err(KeybindError::InvalidChord {
            key: key_str.trim().to_string(),
            reason: "chords are exactly two keys".to_string(),
        }),
    }
}

/// Parse a key code name (without modifiers).
fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    match name_lower.as_str() {
        "esc" | "escape" => return Ok(KeyCodeName::Esc),
        "enter" | "return" => return Ok(KeyCodeName::Enter),
        "space" => return Ok(KeyCodeName::Space),
        "tab" => return Ok(KeyCodeName::Tab),
        "backspace" => return Ok(KeyCodeName::Backspace),
        "delete" | "del" => return Ok(KeyCodeName::Delete),
        "insert" | "ins" => return Ok(KeyCodeName::Insert),
        "home" => return Ok(KeyCodeName::Home),
        "end" => return Ok(KeyCodeName::End),
        "pageup" | "page_up" | "pgup" => return Ok(KeyCodeName::PageUp),
        "pagedown" | "page_down" | "pgdn" => return Ok(KeyCodeName::PageDown),
        "up" => return Ok(KeyCodeName::Up),
        "down" => return Ok(KeyCodeName::Down),
        "left" => return Ok(KeyCodeName::Left),
        "right" => return Ok(KeyCodeName::Right),
        _ => {}
    }

    // Check for function keys (F1-F20)
    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(KeyCodeName::F(num));
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCodeName::Char(c));
    }

    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

/// Keys that should not be allowed for override
/// (e.g., Ctrl+C for copy, Ctrl+Z for suspend).
pub const RESERVED_KEYS: &[&str] = &["Ctrl+c", "Ctrl+z"];

/// Shift is ignored here so `Ctrl+C` is caught as well as `Ctrl+c`.
fn is_reserved(sequence: &KeySequence) -> bool {
    let KeySequence::Single(key) = sequence else {
        return false;
    };
    RESERVED_KEYS
        .iter()
        .filter_map(|reserved| parse_key(reserved).ok())
        .any(|reserved| {
            reserved.code == key.code
                && reserved.modifiers.ctrl == key.modifiers.ctrl
                && reserved.modifiers.alt == key.modifiers.alt
        })
}

/// Validate a set of keybinding overrides.
///
/// Rejects unparsable strings, reserved keys, keys with more than one
/// modifier, and two actions sharing one sequence.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use keydeck_config::keybind::validate_overrides;
/// use keydeck_config::KeybindAction;
///
/// let mut overrides = BTreeMap::new();
/// overrides.insert(KeybindAction::Quit, "F1".to_string());
/// overrides.insert(KeybindAction::GoTasks, "g x".to_string());
///
/// assert!(validate_overrides(&overrides).is_ok());
/// ```
pub fn validate_overrides(overrides: &BTreeMap<KeybindAction, String>) -> Result<(), KeybindError> {
    let mut seen: BTreeMap<String, KeybindAction> = BTreeMap::new();

    for (action, key_str) in overrides {
        let sequence = parse_sequence(key_str).map_err(|e| match e {
            KeybindError::InvalidChord { .. } => e,
            other => KeybindError::InvalidSyntax {
                key: format!("{} for action '{}': {}", key_str, action, other),
            },
        })?;

        if is_reserved(&sequence) {
            return Err(KeybindError::ReservedKey {
                key: key_str.clone(),
            });
        }

        if let KeySequence::Single(key) = sequence
            && key.modifiers.count() > 1
        {
            return Err(KeybindError::TooManyModifiers {
                key: key_str.clone(),
            });
        }

        let normalized = sequence.to_string();
        if let Some(existing) = seen.get(&normalized) {
            return Err(KeybindError::Conflict {
                key: key_str.clone(),
                action1: existing.to_string(),
                action2: action.to_string(),
            });
        }
        seen.insert(normalized, *action);
    }

    Ok(())
}
