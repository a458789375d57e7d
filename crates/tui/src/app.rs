//! Host application shell around the dispatcher and palette.
//!
//! Responsibilities:
//! - Route terminal key events through the dispatcher, then the palette.
//! - Apply resulting actions to host state (route, theme, overlays, quit).
//! - Record navigation and palette activity best-effort.
//!
//! Does NOT handle:
//! - Drawing (see `ui`).
//! - Terminal setup or the async loop (see `runtime`).
//!
//! Invariants:
//! - The palette owns its open state; the renderer only reads it.
//! - While the palette is open, keys are dispatched with a text-input focus target.
//! - Actions are applied in the order the dispatcher produced them.

use std::sync::Arc;

use chrono::Utc;
use crossterm::event::KeyEvent;
use keydeck_config::Config;
use keydeck_config::keybind::KeybindError;

use crate::action::{Action, HostCommand};
use crate::dispatcher::KeyboardDispatcher;
use crate::host::{ActivityKind, ActivitySink, Navigator, NullActivitySink, Router, record_best_effort};
use crate::input::key::{InputTarget, KeyInput};
use crate::palette::{PaletteController, RankLimits};
use crate::palette::registry::route_title;
use crate::records::RecordSource;
use crate::ui::theme::ThemeMode;

pub struct App {
    pub dispatcher: KeyboardDispatcher,
    pub palette: PaletteController,
    pub router: Router,
    pub theme: ThemeMode,
    pub show_help: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    toggle_label: String,
    activity: Arc<dyn ActivitySink>,
}

impl App {
    pub fn new(dispatcher: KeyboardDispatcher, palette: PaletteController) -> Self {
        let toggle_label = dispatcher.toggle().key().to_string();
        Self {
            dispatcher,
            palette,
            router: Router::default(),
            theme: ThemeMode::default(),
            show_help: false,
            should_quit: false,
            status: None,
            toggle_label,
            activity: Arc::new(NullActivitySink),
        }
    }

    /// Build from validated configuration.
    pub fn from_config(
        config: &Config,
        source: Box<dyn RecordSource>,
        activity: Arc<dyn ActivitySink>,
    ) -> Result<Self, KeybindError> {
        let dispatcher = KeyboardDispatcher::from_config(config)?
            .with_activity_sink(Box::new(activity.clone()));
        let palette = PaletteController::new(source, RankLimits::from(&config.palette));
        Ok(Self::new(dispatcher, palette)
            .with_toggle_label(config.palette.toggle_key.clone())
            .with_activity_sink(activity))
    }

    /// Label for the palette toggle as the user wrote it (e.g. `Cmd+k`).
    pub fn with_toggle_label(mut self, label: String) -> Self {
        self.toggle_label = label;
        self
    }

    pub fn with_activity_sink(mut self, activity: Arc<dyn ActivitySink>) -> Self {
        self.activity = activity;
        self
    }

    pub fn toggle_label(&self) -> &str {
        &self.toggle_label
    }

    pub fn focus_target(&self) -> InputTarget {
        if self.palette.is_open() {
            InputTarget::TextInput
        } else {
            InputTarget::Surface
        }
    }

    /// Handle one terminal key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(input) = KeyInput::from_event(key, self.focus_target()) else {
            return;
        };

        let mut actions = self.dispatcher.handle_key(&input);
        if actions.is_empty()
            && self.palette.is_open()
            && let Some(action) = self.palette.handle_key(key)
        {
            record_best_effort(self.activity.as_ref(), ActivityKind::Palette, &action.label());
            actions.push(action);
        }

        for action in actions {
            self.apply(action);
        }
    }

    /// Service the chord timer. Returns true when the screen should redraw.
    pub fn tick(&mut self) -> bool {
        self.dispatcher.poll_timer()
    }

    pub fn apply(&mut self, action: Action) {
        tracing::debug!(action = %action.label(), "Applying action");
        match action {
            Action::Navigate(path) => self.navigate_to(&path),
            Action::TogglePalette => {
                self.palette.toggle();
                if self.palette.is_open() {
                    self.show_help = false;
                }
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::CancelOverlay => {
                if self.palette.is_open() {
                    self.palette.close();
                } else {
                    self.show_help = false;
                }
            }
            Action::Quit => self.should_quit = true,
            Action::Host(command) => self.run_host_command(command),
            Action::Invoke(callback) => callback.call(),
        }
    }

    fn navigate_to(&mut self, path: &str) {
        self.router.navigate(path);
        record_best_effort(self.activity.as_ref(), ActivityKind::Navigation, path);
    }

    fn run_host_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::NewTask => {
                self.navigate_to("/tasks");
                self.status = Some("New task".to_string());
            }
            HostCommand::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.status = Some(format!("{} theme", self.theme.display_name()));
            }
            HostCommand::RefreshData => {
                let records = if self.palette.is_open() {
                    self.palette.reload_at(Utc::now())
                } else {
                    self.palette.source().snapshot().len()
                };
                tracing::info!(records, "Refreshed dashboard data");
                self.status = Some(format!("Loaded {} records", records));
            }
            HostCommand::JumpToToday => {
                self.navigate_to("/calendar");
                self.status = Some(format!("Today is {}", Utc::now().format("%Y-%m-%d")));
            }
        }
    }

    /// Title of the current page.
    pub fn page_title(&self) -> &'static str {
        route_title(self.router.current()).unwrap_or("Not Found")
    }
}
