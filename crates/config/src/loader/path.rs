//! Path helpers for configuration file locations.
//!
//! Uses the `directories` crate for platform-appropriate paths.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/keydeck/config.json`
/// - macOS: `~/Library/Application Support/keydeck/config.json`
/// - Windows: `%AppData%\keydeck\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "keydeck")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}
