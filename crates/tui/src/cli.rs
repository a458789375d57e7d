//! Command-line argument parsing for keydeck.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `keydeck_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for keydeck.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --leader-key, --config-path)
/// 2. Environment variables (e.g., KEYDECK_LEADER_KEY)
/// 3. Configuration file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "keydeck",
    about = "Keyboard-driven dashboard with chord shortcuts and a fuzzy command palette",
    version,
    after_help = "Examples:\n  keydeck\n  keydeck --data-dir ./demos/data\n  keydeck --leader-key space --palette-key Ctrl+p\n  keydeck --log-dir /tmp/keydeck --no-mouse\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory holding tasks.json, content.json, events.json and memory.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// How long a chord leader waits for its second key, in milliseconds
    #[arg(long)]
    pub chord_timeout_ms: Option<u64>,

    /// Key that starts a chord sequence
    #[arg(long)]
    pub leader_key: Option<String>,

    /// Key combination that toggles the command palette
    #[arg(long)]
    pub palette_key: Option<String>,

    /// Append shortcut and palette activity as JSON lines to this file
    #[arg(long)]
    pub activity_log: Option<PathBuf>,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["keydeck"]);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(cli.config_path.is_none());
        assert!(cli.chord_timeout_ms.is_none());
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_cli_no_mouse_flag() {
        let cli = Cli::parse_from(["keydeck", "--no-mouse"]);
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_cli_chord_and_palette_overrides() {
        let cli = Cli::parse_from([
            "keydeck",
            "--chord-timeout-ms",
            "1500",
            "--leader-key",
            "space",
            "--palette-key",
            "Ctrl+p",
        ]);
        assert_eq!(cli.chord_timeout_ms, Some(1500));
        assert_eq!(cli.leader_key.as_deref(), Some("space"));
        assert_eq!(cli.palette_key.as_deref(), Some("Ctrl+p"));
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        let result = Cli::try_parse_from(["keydeck", "--chord-timeout-ms", "soon"]);
        assert!(result.is_err());
    }
}
