//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from a JSON config file and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Validate the merged configuration before handing it to the TUI.
//!
//! Invariants / Assumptions:
//! - Builder methods (CLI) > environment variables > config file > defaults.
//! - A missing default config file is not an error; a missing explicit one is.

mod builder;
mod env;
mod error;
mod file;
mod path;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use path::default_config_path;
