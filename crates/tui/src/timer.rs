//! Chord expiry timer and clock abstraction.
//!
//! Responsibilities:
//! - Hold at most one pending expiry `(generation, deadline)`.
//! - Abstract the time source so chord timeouts can be driven by a simulated clock.
//!
//! Does NOT handle:
//! - Sleeping or waking the task (the event loop sleeps until `deadline()`).
//! - Deciding what an expiry means (see `dispatcher`).
//!
//! Invariants:
//! - Starting a timer replaces any pending one.
//! - A timer fires at most once; `take_due` clears it.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock: Send {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Simulated clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the
/// dispatcher owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    generation: u64,
    deadline: Instant,
}

/// Single-shot, cancelable expiry timer.
#[derive(Debug, Default)]
pub struct SequenceTimer {
    pending: Option<Pending>,
}

impl SequenceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending expiry.
    pub fn start(&mut self, generation: u64, deadline: Instant) {
        self.pending = Some(Pending {
            generation,
            deadline,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending expiry is due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Return and clear the pending generation once `now` has passed its deadline.
    pub fn take_due(&mut self, now: Instant) -> Option<u64> {
        match self.pending {
            Some(p) if now > p.deadline => {
                self.pending = None;
                Some(p.generation)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_replaces_pending() {
        let clock = ManualClock::new();
        let mut timer = SequenceTimer::new();
        timer.start(1, clock.now() + Duration::from_millis(100));
        timer.start(2, clock.now() + Duration::from_millis(200));

        clock.advance(Duration::from_millis(201));
        assert_eq!(timer.take_due(clock.now()), Some(2));
        assert!(!timer.is_armed());
    }

    #[test]
    fn not_due_at_exact_deadline() {
        let clock = ManualClock::new();
        let mut timer = SequenceTimer::new();
        let deadline = clock.now() + Duration::from_millis(2000);
        timer.start(7, deadline);

        clock.advance(Duration::from_millis(2000));
        assert_eq!(timer.take_due(clock.now()), None);
        clock.advance(Duration::from_millis(1));
        assert_eq!(timer.take_due(clock.now()), Some(7));
        assert_eq!(timer.take_due(clock.now()), None);
    }

    #[test]
    fn cancel_clears_deadline() {
        let mut timer = SequenceTimer::new();
        timer.start(1, Instant::now());
        timer.cancel();
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new();
        let b = a.clone();
        let before = b.now();
        a.advance(Duration::from_secs(3));
        assert_eq!(b.now() - before, Duration::from_secs(3));
    }
}
