//! Keyboard input: normalisation, keybinding catalog and help content.
//!
//! Responsibilities:
//! - Normalise terminal key events into dispatcher input.
//! - Define the shared keybinding catalog used by dispatch and the help overlay.
//!
//! Non-responsibilities:
//! - Chord state (handled by `dispatcher`).
//! - Mutating application state (handled by App via Actions).
//!
//! Invariants:
//! - Keybinding metadata is the single source of truth for help output.

pub mod help;
pub mod key;
pub mod keymap;
