//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `KEYDECK_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Path to a config file, overriding the platform default.
pub(crate) const CONFIG_PATH_VAR: &str = "KEYDECK_CONFIG_PATH";
const CHORD_TIMEOUT_VAR: &str = "KEYDECK_CHORD_TIMEOUT_MS";
const LEADER_KEY_VAR: &str = "KEYDECK_LEADER_KEY";
const PALETTE_KEY_VAR: &str = "KEYDECK_PALETTE_KEY";
const DATA_DIR_VAR: &str = "KEYDECK_DATA_DIR";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(timeout) = env_var_or_none(CHORD_TIMEOUT_VAR) {
        let millis: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: CHORD_TIMEOUT_VAR.to_string(),
            message: "must be a number of milliseconds".to_string(),
        })?;
        loader.set_chord_timeout_ms(Some(millis));
    }
    if let Some(leader) = env_var_or_none(LEADER_KEY_VAR) {
        loader.set_leader_key(Some(leader));
    }
    if let Some(toggle) = env_var_or_none(PALETTE_KEY_VAR) {
        loader.set_toggle_key(Some(toggle));
    }
    if let Some(dir) = env_var_or_none(DATA_DIR_VAR) {
        loader.set_data_dir(Some(PathBuf::from(dir)));
    }
    Ok(())
}
