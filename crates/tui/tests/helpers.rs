//! Test helpers for keydeck integration tests.
//!
//! Provides key event constructors, fixtures for the dispatcher, palette
//! and app tests, and a `TestBackend` harness for rendering tests.

#![allow(dead_code)]

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keydeck::app::App;
use keydeck::dispatcher::{KeyboardDispatcher, PaletteToggle};
use keydeck::input::keymap::Keymap;
use keydeck::palette::{PaletteController, RankLimits};
use keydeck::records::{
    CalendarEvent, ContentItem, ContentStage, InMemorySource, MemoryEntry, RecordSnapshot, Task,
    TaskStatus,
};
use keydeck::timer::ManualClock;
use ratatui::{Terminal, backend::TestBackend};

pub const CHORD_TIMEOUT: Duration = Duration::from_millis(2000);

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a Shift+character key event as terminals report it.
pub fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c.to_ascii_uppercase()), KeyModifiers::SHIFT)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Type each character of `text` into the app.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(c));
    }
}

/// A dispatcher on a manual clock with the default keymap.
pub fn dispatcher_with_clock() -> (KeyboardDispatcher, ManualClock) {
    let clock = ManualClock::new();
    let dispatcher =
        KeyboardDispatcher::new(Keymap::default(), PaletteToggle::default(), CHORD_TIMEOUT)
            .with_clock(Box::new(clock.clone()));
    (dispatcher, clock)
}

/// An app over `snapshot`, driven by a manual clock.
pub fn app_with_records(snapshot: RecordSnapshot) -> (App, ManualClock) {
    let (dispatcher, clock) = dispatcher_with_clock();
    let palette = PaletteController::new(
        Box::new(InMemorySource::new(snapshot)),
        RankLimits::default(),
    );
    (App::new(dispatcher, palette), clock)
}

/// An app with no records.
pub fn empty_app() -> (App, ManualClock) {
    app_with_records(RecordSnapshot::default())
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

pub fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        agent: None,
        status,
        tags: Vec::new(),
    }
}

/// One record of each kind plus a few extra tasks.
pub fn sample_snapshot() -> RecordSnapshot {
    RecordSnapshot {
        tasks: vec![
            task("t1", "Write release notes", TaskStatus::InProgress),
            task("t2", "Review pull requests", TaskStatus::Review),
            task("t3", "Plan sprint", TaskStatus::Todo),
        ],
        content: vec![ContentItem {
            id: "c1".to_string(),
            title: "Launch video".to_string(),
            description: Some("Product walkthrough".to_string()),
            agent: Some("nova".to_string()),
            stage: ContentStage::Filming,
            tags: vec!["youtube".to_string()],
        }],
        events: vec![CalendarEvent {
            id: "e1".to_string(),
            title: "Standup".to_string(),
            description: None,
            agent: None,
            start: Utc.with_ymd_and_hms(2026, 3, 11, 9, 30, 0).unwrap(),
            category: Some("meeting".to_string()),
        }],
        memories: vec![MemoryEntry {
            id: "m1".to_string(),
            title: "Deployment checklist".to_string(),
            content: "Run migrations before switching traffic".to_string(),
            category: Some("ops".to_string()),
            tags: vec!["deploy".to_string()],
        }],
    }
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a harness around an app with no records.
    pub fn new(width: u16, height: u16) -> Self {
        let (app, _clock) = empty_app();
        Self::with_app(app, width, height)
    }

    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        let app = &self.app;
        self.terminal
            .draw(|f| keydeck::ui::render(f, app))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string for snapshot testing.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
