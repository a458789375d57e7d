//! Configuration type definitions for keydeck.
//!
//! Responsibilities:
//! - Define the top-level `Config` and its palette and keybinding sections.
//! - Ensure consistent defaults across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Keybinding parsing or validation (see `keybind` module at crate root).

pub mod keybind;
mod palette;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use keybind::{KeybindAction, KeybindOverrides};
pub use palette::PaletteConfig;

/// Fully resolved keydeck configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dispatcher and palette settings
    pub palette: PaletteConfig,
    /// User keybinding overrides
    pub keybindings: KeybindOverrides,
    /// Directory holding the dashboard record files
    pub data_dir: Option<PathBuf>,
}
