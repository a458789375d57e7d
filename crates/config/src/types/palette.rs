//! Palette and chord timing configuration.
//!
//! Invariants:
//! - Every field has a serde default so partial config files load.
//! - Values are validated by `ConfigLoader::build`, not here.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_BROWSE_LIMIT, DEFAULT_CHORD_TIMEOUT_MS, DEFAULT_LEADER_KEY,
    DEFAULT_PALETTE_TOGGLE_KEY, DEFAULT_SEARCH_LIMIT,
};

/// Settings for the keyboard dispatcher and command palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// How long a chord leader waits for its follower.
    pub chord_timeout_ms: u64,
    /// Key that starts a chord sequence.
    pub leader_key: String,
    /// Key combination that opens and closes the palette.
    pub toggle_key: String,
    /// Rows shown for an empty query.
    pub browse_limit: usize,
    /// Rows shown for a non-empty query.
    pub search_limit: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            chord_timeout_ms: DEFAULT_CHORD_TIMEOUT_MS,
            leader_key: DEFAULT_LEADER_KEY.to_string(),
            toggle_key: DEFAULT_PALETTE_TOGGLE_KEY.to_string(),
            browse_limit: DEFAULT_BROWSE_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl PaletteConfig {
    /// Chord timeout as a `Duration`.
    pub fn chord_timeout(&self) -> Duration {
        Duration::from_millis(self.chord_timeout_ms)
    }
}
