//! Centralized constants for the keydeck workspace.
//!
//! Default values used across crates to avoid magic number duplication.

// =============================================================================
// Chord Sequences
// =============================================================================

/// Time a pending chord leader stays live before it expires, in milliseconds.
pub const DEFAULT_CHORD_TIMEOUT_MS: u64 = 2000;

/// Smallest accepted chord timeout in milliseconds.
pub const MIN_CHORD_TIMEOUT_MS: u64 = 100;

/// Largest accepted chord timeout in milliseconds.
pub const MAX_CHORD_TIMEOUT_MS: u64 = 10_000;

/// Default key that starts a chord sequence.
pub const DEFAULT_LEADER_KEY: &str = "g";

// =============================================================================
// Command Palette
// =============================================================================

/// Default key combination that toggles the command palette.
pub const DEFAULT_PALETTE_TOGGLE_KEY: &str = "Cmd+k";

/// Rows shown when the palette query is empty.
pub const DEFAULT_BROWSE_LIMIT: usize = 10;

/// Rows shown for a non-empty palette query.
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default UI tick interval for redraws in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Default log file name inside the log directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "keydeck.log";
