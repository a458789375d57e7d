//! Command palette interaction state.
//!
//! Responsibilities:
//! - Track open state, query text, selection and the ranked shortlist.
//! - Reload records into the registry when the palette opens.
//! - Translate palette-scoped key presses into selection changes or an executed action.
//!
//! Does NOT handle:
//! - Global shortcuts or the toggle combination (see `dispatcher`).
//! - Rendering (see `ui::palette`).
//!
//! Invariants:
//! - `selected_index` is always 0 or a valid index into `ranked`.
//! - Every query change re-ranks and resets the selection to 0.
//! - Closing clears the query and selection; executing an item always closes.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::palette::item::CommandItem;
use crate::palette::ranker::{RankLimits, rank};
use crate::palette::registry::{CommandRegistry, static_items};
use crate::records::RecordSource;

pub struct PaletteController {
    open: bool,
    query: String,
    selected_index: usize,
    ranked: Vec<CommandItem>,
    registry: CommandRegistry,
    static_items: Vec<CommandItem>,
    source: Box<dyn RecordSource>,
    limits: RankLimits,
}

impl PaletteController {
    /// Create a closed palette over the default static catalog.
    pub fn new(source: Box<dyn RecordSource>, limits: RankLimits) -> Self {
        Self::with_static_items(source, limits, static_items())
    }

    pub fn with_static_items(
        source: Box<dyn RecordSource>,
        limits: RankLimits,
        static_items: Vec<CommandItem>,
    ) -> Self {
        Self {
            open: false,
            query: String::new(),
            selected_index: 0,
            ranked: Vec::new(),
            registry: CommandRegistry::default(),
            static_items,
            source,
            limits,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn ranked(&self) -> &[CommandItem] {
        &self.ranked
    }

    pub fn selected(&self) -> Option<&CommandItem> {
        self.ranked.get(self.selected_index)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn source(&self) -> &dyn RecordSource {
        self.source.as_ref()
    }

    /// Open the palette, reloading records as of now.
    pub fn open(&mut self) {
        self.open_at(Utc::now());
    }

    /// Open the palette, treating `now` as the current time for event priorities.
    pub fn open_at(&mut self, now: DateTime<Utc>) {
        self.reload_at(now);
        self.open = true;
        self.query.clear();
        self.rerank();
    }

    /// Rebuild the registry from the record source. Returns the number of records loaded.
    pub fn reload_at(&mut self, now: DateTime<Utc>) -> usize {
        let snapshot = self.source.snapshot();
        self.registry = CommandRegistry::build(&self.static_items, &snapshot, now);
        tracing::debug!(
            items = self.registry.len(),
            records = snapshot.len(),
            "Rebuilt command registry"
        );
        if self.open {
            self.rerank();
        }
        snapshot.len()
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.selected_index = 0;
        self.ranked.clear();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.rerank();
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.ranked.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.ranked.len().saturating_sub(1);
    }

    /// Take the selected item's action and close. Returns `None` on an empty list.
    pub fn execute_selected(&mut self) -> Option<Action> {
        let item = self.ranked.get(self.selected_index)?;
        let action = item.action.clone();
        tracing::debug!(id = %item.id, "Executing palette item");
        self.close();
        Some(action)
    }

    /// Handle a key while the palette is open.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if !self.open || key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                None
            }
            KeyCode::Enter => self.execute_selected(),
            KeyCode::Down => {
                self.select_next();
                None
            }
            KeyCode::Up => {
                self.select_prev();
                None
            }
            KeyCode::Home => {
                self.select_first();
                None
            }
            KeyCode::End => {
                self.select_last();
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.set_query(String::new());
                None
            }
            KeyCode::Backspace => {
                let mut query = std::mem::take(&mut self.query);
                query.pop();
                self.set_query(query);
                None
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                let mut query = std::mem::take(&mut self.query);
                query.push(c);
                self.set_query(query);
                None
            }
            _ => None,
        }
    }

    fn rerank(&mut self) {
        self.ranked = rank(&self.query, self.registry.items(), self.limits);
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{InMemorySource, RecordSnapshot, Task, TaskStatus};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn palette() -> PaletteController {
        let source = InMemorySource::new(RecordSnapshot {
            tasks: vec![Task {
                id: "42".to_string(),
                title: "Record launch video".to_string(),
                description: None,
                agent: None,
                status: TaskStatus::InProgress,
                tags: Vec::new(),
            }],
            ..Default::default()
        });
        PaletteController::new(Box::new(source), RankLimits::default())
    }

    #[test]
    fn open_loads_records_and_browses() {
        let mut p = palette();
        p.open();
        assert!(p.is_open());
        assert_eq!(p.registry().len(), 12);
        assert_eq!(p.ranked().len(), 10);
        assert_eq!(p.ranked()[0].id, "nav:dashboard");
    }

    #[test]
    fn typing_reranks_and_resets_selection() {
        let mut p = palette();
        p.open();
        p.select_next();
        p.select_next();
        assert_eq!(p.selected_index(), 2);

        p.handle_key(key(KeyCode::Char('l')));
        p.handle_key(key(KeyCode::Char('a')));
        assert_eq!(p.query(), "la");
        assert_eq!(p.selected_index(), 0);
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut p = palette();
        p.open();
        p.set_query("launch");
        let len = p.ranked().len();
        assert!(len >= 1);

        p.select_prev();
        assert_eq!(p.selected_index(), 0);
        for _ in 0..20 {
            p.select_next();
        }
        assert_eq!(p.selected_index(), len - 1);
    }

    #[test]
    fn enter_executes_and_closes() {
        let mut p = palette();
        p.open();
        p.set_query("launch video");
        let action = p.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Some(Action::Navigate("/tasks".to_string())));
        assert!(!p.is_open());
        assert_eq!(p.query(), "");
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut p = palette();
        p.open();
        p.set_query("qqqqqq");
        assert!(p.ranked().is_empty());
        assert_eq!(p.handle_key(key(KeyCode::Enter)), None);
        assert!(p.is_open());
    }

    #[test]
    fn ctrl_u_and_backspace_edit_query() {
        let mut p = palette();
        p.open();
        p.set_query("tasks");
        p.handle_key(key(KeyCode::Backspace));
        assert_eq!(p.query(), "task");
        p.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(p.query(), "");
    }

    #[test]
    fn esc_closes_and_clears() {
        let mut p = palette();
        p.open();
        p.set_query("cal");
        p.handle_key(key(KeyCode::Esc));
        assert!(!p.is_open());
        assert_eq!(p.query(), "");
        assert_eq!(p.selected_index(), 0);
    }

    #[test]
    fn reopen_sees_new_records() {
        let mut p = palette();
        p.open();
        p.close();
        p.source = Box::new(InMemorySource::default());
        p.open();
        assert_eq!(p.registry().len(), 11);
    }
}
