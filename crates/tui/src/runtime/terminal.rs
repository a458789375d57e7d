//! Terminal setup and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen.
//! - Ensure terminal state is restored on exit, even during panics.
//!
//! Invariants:
//! - The guard must live for the duration of the session.
//! - Drop must not panic.

use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Restores terminal state when dropped.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Create a new terminal guard.
    ///
    /// # Arguments
    /// * `no_mouse` - Whether mouse capture was disabled during setup
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}

/// Put the terminal into TUI mode and return it with its restore guard.
pub fn setup(no_mouse: bool) -> Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }

    let guard = TerminalGuard::new(no_mouse);
    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
    Ok((terminal, guard))
}
