//! Dispatcher state, events and effects.

use std::time::{Duration, Instant};

use keydeck_config::keybind::KeyCodeName;

use crate::action::Action;
use crate::input::key::KeyInput;
use crate::input::keymap::Keymap;

/// The leader of a chord waiting for its follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingChord {
    pub leader: KeyCodeName,
    /// Keys arriving after this instant no longer complete the chord
    pub expires_at: Instant,
    /// Identifies the expiry timer armed for this chord
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    PendingChord(PendingChord),
}

impl DispatchState {
    pub fn pending(&self) -> Option<&PendingChord> {
        match self {
            DispatchState::Idle => None,
            DispatchState::PendingChord(p) => Some(p),
        }
    }
}

/// Input to the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchEvent {
    Key(KeyInput),
    /// The expiry timer armed under `generation` fired
    ChordExpired { generation: u64 },
}

/// Side effect the boundary must apply after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartTimer { generation: u64, deadline: Instant },
    CancelTimer,
    Invoke(Action),
}

/// Read-only inputs a transition needs besides state and event.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub keymap: &'a Keymap,
    pub now: Instant,
    pub chord_timeout: Duration,
    /// Generation to use if this transition arms a timer
    pub next_generation: u64,
}
