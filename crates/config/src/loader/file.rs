//! Config file loading.
//!
//! Responsibilities:
//! - Resolve the config file path (explicit, `KEYDECK_CONFIG_PATH`, or platform default).
//! - Read and deserialize the JSON config file into the loader.
//!
//! Invariants:
//! - File settings are applied before environment variables (env vars take precedence).
//! - A missing file at the default location yields the built-in defaults.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::env::{CONFIG_PATH_VAR, env_var_or_none};
use super::error::ConfigError;
use super::path::default_config_path;
use crate::types::Config;

/// Load the config file into the loader, if one exists.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => match env_var_or_none(CONFIG_PATH_VAR) {
            Some(path) => (PathBuf::from(path), true),
            None => (
                default_config_path()
                    .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
                false,
            ),
        },
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileMissing { path });
        }
        tracing::debug!(path = %path.display(), "No config file found, using defaults");
        return Ok(());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.clone(),
        source,
    })?;
    let config: Config =
        serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
            path: path.clone(),
            source,
        })?;

    tracing::info!(path = %path.display(), "Loaded config file");
    loader.set_file_config(Some(config));
    Ok(())
}
