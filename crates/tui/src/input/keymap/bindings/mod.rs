//! Default keybinding definitions.
//!
//! Responsibilities:
//! - Provide the ordered default binding groups for the keymap resolver.
//!
//! Does NOT handle:
//! - Resolving input events into Actions.
//! - Rendering help content.
//!
//! Invariants:
//! - Binding order is stable for deterministic resolution and help output.

mod actions;
mod navigation;

use keydeck_config::keybind::KeyCodeName;

use super::KeyBinding;

pub(super) fn all(leader: KeyCodeName) -> Vec<KeyBinding> {
    let mut bindings = Vec::new();
    bindings.extend(navigation::bindings(leader));
    bindings.extend(actions::bindings());
    bindings
}
