//! Main async loop: terminal events, chord deadline and redraw tick.
//!
//! Responsibilities:
//! - Redraw after every wake-up.
//! - Feed key events to the app and wake at the pending chord deadline.
//!
//! Invariants:
//! - The chord deadline is re-read each iteration, so a cancelled or replaced
//!   timer never wakes the loop for a stale chord.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::ui;

/// Slack past the deadline so the timer is strictly due when polled.
const DEADLINE_SLACK: Duration = Duration::from_millis(1);

/// Run until the app asks to quit or the event stream ends.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick_interval = tokio::time::interval(tick);

    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("failed to draw frame")?;
        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }

        let deadline = app.dispatcher.next_deadline();
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => handle_event(app, event),
                Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                None => break,
            },
            _ = sleep_until(deadline) => {
                app.tick();
            }
            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}

/// Apply one terminal event to the app.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => app.handle_key(key),
        Event::Resize(width, height) => {
            tracing::trace!(width, height, "Terminal resized");
        }
        _ => {}
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline + DEADLINE_SLACK))
                .await
        }
        None => std::future::pending().await,
    }
}
