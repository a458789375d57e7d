//! Keybinding override resolution.
//!
//! Bridges the config crate's `KeybindOverrides` with the runtime keymap by
//! re-keying bindings flagged `bindable`.
//!
//! Responsibilities:
//! - Convert parsed key sequences into binding patterns.
//! - Apply user overrides to a `Keymap`, giving overridden bindings precedence.
//!
//! Does NOT handle:
//! - Parsing key strings (handled by `keydeck_config::keybind`).
//! - Runtime keybinding changes (overrides are applied once at startup).
//!
//! Invariants:
//! - Invalid override sets are logged and the defaults are kept unchanged.
//! - An override is placed ahead of default bindings so it shadows a default on the same key.

use keydeck_config::KeybindOverrides;
use keydeck_config::keybind::{KeyCodeName, KeySequence, parse_sequence, validate_overrides};

use super::{KeyBinding, KeyPattern, Keymap, Modifier};

/// Convert a parsed sequence into a binding shape.
///
/// Returns `None` when the sequence holds more than one modifier or is a
/// chord under a different leader, since neither could ever fire.
pub(crate) fn pattern_for(
    sequence: KeySequence,
    leader: KeyCodeName,
) -> Option<(KeyPattern, Option<Modifier>)> {
    match sequence {
        KeySequence::Single(key) => {
            Modifier::from_flags(key.modifiers).map(|m| (KeyPattern::Single(key.code), m))
        }
        KeySequence::Chord(first, second) if first == leader => {
            Some((KeyPattern::Chord(first, second), None))
        }
        KeySequence::Chord(..) => None,
    }
}

impl Keymap {
    /// Apply user overrides.
    pub fn with_overrides(self, overrides: &KeybindOverrides) -> Self {
        if overrides.is_empty() {
            tracing::debug!("No keybinding overrides configured");
            return self;
        }

        if let Err(e) = validate_overrides(&overrides.overrides) {
            tracing::warn!(
                "Keybinding validation failed: {}. Using default keybindings.",
                e
            );
            return self;
        }

        let leader = self.leader;
        let mut overridden: Vec<KeyBinding> = Vec::new();
        let mut defaults: Vec<KeyBinding> = Vec::new();

        for mut binding in self.bindings {
            let Some(action) = binding.bindable else {
                defaults.push(binding);
                continue;
            };
            let Some(key_str) = overrides.get(action) else {
                defaults.push(binding);
                continue;
            };

            let pattern = parse_sequence(key_str)
                .ok()
                .and_then(|seq| pattern_for(seq, leader));
            match pattern {
                Some((keys, modifier)) => {
                    binding.keys = keys;
                    binding.modifier = modifier;
                    overridden.push(binding);
                }
                None => {
                    tracing::warn!(
                        %action,
                        key = %key_str,
                        "Keybinding override can never fire; keeping default"
                    );
                    defaults.push(binding);
                }
            }
        }

        tracing::info!("Loaded {} keybinding override(s)", overridden.len());
        overridden.extend(defaults);
        Self {
            leader,
            bindings: overridden,
        }
    }
}
