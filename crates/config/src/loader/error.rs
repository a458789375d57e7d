//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Wrap keybinding validation errors from the `keybind` module.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).

use std::path::PathBuf;
use thiserror::Error;

use crate::keybind::KeybindError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Config file not found at {path}")]
    ConfigFileMissing { path: PathBuf },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid chord timeout: {message}")]
    InvalidChordTimeout { message: String },

    #[error("invalid leader key '{key}': {message}")]
    InvalidLeaderKey { key: String, message: String },

    #[error("invalid palette toggle key '{key}': {message}")]
    InvalidToggleKey { key: String, message: String },

    #[error("invalid {field}: {message}")]
    InvalidLimit { field: &'static str, message: String },

    #[error(transparent)]
    Keybind(#[from] KeybindError),
}
