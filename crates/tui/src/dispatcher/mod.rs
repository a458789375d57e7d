//! Keyboard dispatcher: chord-aware shortcut state machine.
//!
//! Responsibilities:
//! - Own the keymap, dispatch state, expiry timer and clock for one view.
//! - Run the palette toggle listener on every key, regardless of focus.
//! - Apply transition effects (timer start/cancel, action collection) at the boundary.
//!
//! Does NOT handle:
//! - Applying actions to the host (see `app::App::apply`).
//! - Palette query editing (see `palette::controller`).
//!
//! Invariants:
//! - At most one chord is pending and at most one timer is armed.
//! - A detached dispatcher ignores input and holds no pending chord.
//! - Dispatch never fails; unmatched keys are silent no-ops.

mod state;
mod transition;

use std::time::{Duration, Instant};

use keydeck_config::Config;
use keydeck_config::keybind::{KeyCodeName, KeybindError, ModifierFlags, ParsedKey, parse_key};

use crate::action::Action;
use crate::host::{ActivityKind, ActivitySink, NullActivitySink, record_best_effort};
use crate::input::key::KeyInput;
use crate::input::keymap::Keymap;
use crate::timer::{Clock, SequenceTimer, SystemClock};

pub use state::{DispatchEvent, DispatchState, Effect, PendingChord, TransitionContext};
pub use transition::transition;

/// Listener for the palette open/close combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteToggle {
    key: ParsedKey,
}

impl PaletteToggle {
    pub fn new(key: ParsedKey) -> Self {
        Self { key }
    }

    /// Parse a key string such as `Cmd+k`.
    pub fn parse(key_str: &str) -> Result<Self, KeybindError> {
        parse_key(key_str).map(Self::new)
    }

    pub fn key(&self) -> ParsedKey {
        self.key
    }

    pub fn matches(&self, input: &KeyInput) -> bool {
        input.token == self.key.code && input.modifiers == self.key.modifiers
    }
}

impl Default for PaletteToggle {
    fn default() -> Self {
        Self::new(ParsedKey {
            code: KeyCodeName::Char('k'),
            modifiers: ModifierFlags {
                ctrl: true,
                ..ModifierFlags::NONE
            },
        })
    }
}

pub struct KeyboardDispatcher {
    keymap: Keymap,
    toggle: PaletteToggle,
    state: DispatchState,
    timer: SequenceTimer,
    clock: Box<dyn Clock>,
    activity: Box<dyn ActivitySink>,
    chord_timeout: Duration,
    next_generation: u64,
    attached: bool,
}

impl KeyboardDispatcher {
    /// Create an attached dispatcher on the system clock.
    pub fn new(keymap: Keymap, toggle: PaletteToggle, chord_timeout: Duration) -> Self {
        Self {
            keymap,
            toggle,
            state: DispatchState::Idle,
            timer: SequenceTimer::new(),
            clock: Box::new(SystemClock),
            activity: Box::new(NullActivitySink),
            chord_timeout,
            next_generation: 0,
            attached: true,
        }
    }

    /// Build from validated configuration: leader, toggle, timeout and overrides.
    pub fn from_config(config: &Config) -> Result<Self, KeybindError> {
        let leader = parse_key(&config.palette.leader_key)?;
        let toggle = PaletteToggle::parse(&config.palette.toggle_key)?;
        let keymap = Keymap::new(leader.code).with_overrides(&config.keybindings);
        Ok(Self::new(keymap, toggle, config.palette.chord_timeout()))
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_activity_sink(mut self, sink: Box<dyn ActivitySink>) -> Self {
        self.activity = sink;
        self
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn toggle(&self) -> &PaletteToggle {
        &self.toggle
    }

    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop listening; cancels any pending chord.
    pub fn detach(&mut self) {
        self.attached = false;
        self.timer.cancel();
        self.state = DispatchState::Idle;
    }

    /// The leader of the pending chord, for the footer hint.
    pub fn pending_leader(&self) -> Option<KeyCodeName> {
        self.state.pending().map(|p| p.leader)
    }

    /// When the event loop should next call `poll_timer`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Dispatch one key-down event. Returns the actions to apply, in order.
    pub fn handle_key(&mut self, input: &KeyInput) -> Vec<Action> {
        if !self.attached {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.toggle.matches(input) {
            record_best_effort(self.activity.as_ref(), ActivityKind::Palette, "toggle");
            actions.push(Action::TogglePalette);
        }

        actions.extend(self.step(DispatchEvent::Key(*input)));
        actions
    }

    /// Expire the pending chord if its deadline has passed. Returns true if one expired.
    pub fn poll_timer(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        let Some(generation) = self.timer.take_due(self.clock.now()) else {
            return false;
        };
        let before = self.state;
        self.step(DispatchEvent::ChordExpired { generation });
        before != self.state
    }

    fn step(&mut self, event: DispatchEvent) -> Vec<Action> {
        self.next_generation += 1;
        let ctx = TransitionContext {
            keymap: &self.keymap,
            now: self.clock.now(),
            chord_timeout: self.chord_timeout,
            next_generation: self.next_generation,
        };
        let (next, effects) = transition(&self.state, &event, &ctx);
        self.log_change(&next, &event);
        self.state = next;

        let mut actions = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartTimer {
                    generation,
                    deadline,
                } => self.timer.start(generation, deadline),
                Effect::CancelTimer => self.timer.cancel(),
                Effect::Invoke(action) => {
                    record_best_effort(
                        self.activity.as_ref(),
                        ActivityKind::Shortcut,
                        &action.label(),
                    );
                    actions.push(action);
                }
            }
        }
        actions
    }

    fn log_change(&self, next: &DispatchState, event: &DispatchEvent) {
        match (&self.state, next, event) {
            (DispatchState::Idle, DispatchState::PendingChord(p), _) => {
                tracing::debug!(leader = %p.leader, "Chord started");
            }
            (DispatchState::PendingChord(p), DispatchState::Idle, DispatchEvent::ChordExpired { .. }) => {
                tracing::debug!(leader = %p.leader, "Chord expired");
            }
            (DispatchState::PendingChord(p), _, DispatchEvent::Key(input)) => {
                tracing::trace!(leader = %p.leader, follower = %input, "Chord ended");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::key::InputTarget;
    use crate::timer::ManualClock;

    fn dispatcher(clock: &ManualClock) -> KeyboardDispatcher {
        KeyboardDispatcher::new(
            Keymap::default(),
            PaletteToggle::default(),
            Duration::from_millis(2000),
        )
        .with_clock(Box::new(clock.clone()))
    }

    fn cmd_k() -> KeyInput {
        KeyInput::from_parsed(parse_key("Cmd+k").unwrap())
    }

    #[test]
    fn chord_arms_single_timer() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);
        assert!(d.handle_key(&KeyInput::char('g')).is_empty());
        assert_eq!(d.pending_leader(), Some(KeyCodeName::Char('g')));
        assert!(d.next_deadline().is_some());

        let actions = d.handle_key(&KeyInput::char('c'));
        assert_eq!(actions, vec![Action::Navigate("/content".to_string())]);
        assert!(d.next_deadline().is_none());
        assert_eq!(d.state(), &DispatchState::Idle);
    }

    #[test]
    fn timer_expiry_returns_to_idle() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);
        d.handle_key(&KeyInput::char('g'));

        clock.advance(Duration::from_millis(1999));
        assert!(!d.poll_timer());
        assert!(d.pending_leader().is_some());

        clock.advance(Duration::from_millis(2));
        assert!(d.poll_timer());
        assert!(d.pending_leader().is_none());
        assert!(d.handle_key(&KeyInput::char('t')).contains(&Action::Host(
            crate::action::HostCommand::JumpToToday
        )));
    }

    #[test]
    fn toggle_fires_while_typing() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);
        let typed = cmd_k().with_target(InputTarget::TextInput);
        assert_eq!(d.handle_key(&typed), vec![Action::TogglePalette]);

        let n = KeyInput::char('n').with_target(InputTarget::TextInput);
        assert!(d.handle_key(&n).is_empty());
    }

    #[test]
    fn detached_dispatcher_ignores_input() {
        let clock = ManualClock::new();
        let mut d = dispatcher(&clock);
        d.handle_key(&KeyInput::char('g'));
        d.detach();
        assert!(d.pending_leader().is_none());
        assert!(d.handle_key(&KeyInput::char('q')).is_empty());

        d.attach();
        assert_eq!(d.handle_key(&KeyInput::char('q')), vec![Action::Quit]);
    }

    #[test]
    fn from_config_uses_custom_leader() {
        let mut config = Config::default();
        config.palette.leader_key = ",".to_string();
        let mut d = KeyboardDispatcher::from_config(&config).unwrap();
        d.handle_key(&KeyInput::char(','));
        assert_eq!(d.pending_leader(), Some(KeyCodeName::Char(',')));
        assert_eq!(
            d.handle_key(&KeyInput::char('m')),
            vec![Action::Navigate("/memory".to_string())]
        );
    }
}
