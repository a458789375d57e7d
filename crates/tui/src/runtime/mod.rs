//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - File logging setup
//! - The async event loop
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `keydeck::app` and `keydeck::ui`).
//!
//! Invariants:
//! - Logging is initialised before the terminal enters raw mode.

pub mod event_loop;
pub mod logging;
pub mod terminal;
