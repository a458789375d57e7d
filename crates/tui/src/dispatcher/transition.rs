//! Pure transition function of the keyboard dispatcher.
//!
//! Invariants:
//! - Only `Idle` and `PendingChord` are ever produced.
//! - Every transition out of `PendingChord` emits `CancelTimer`.
//! - A stale `ChordExpired` (wrong generation, or no chord pending) changes nothing.
//! - Rules apply in order: focus suppression, chord resolution, chord initiation, single-key resolution.

use keydeck_config::keybind::KeyCodeName;

use super::state::{DispatchEvent, DispatchState, Effect, PendingChord, TransitionContext};
use crate::input::key::KeyInput;

/// Compute the next state and the effects to apply.
pub fn transition(
    state: &DispatchState,
    event: &DispatchEvent,
    ctx: &TransitionContext<'_>,
) -> (DispatchState, Vec<Effect>) {
    match event {
        DispatchEvent::ChordExpired { generation } => match state {
            DispatchState::PendingChord(p) if p.generation == *generation => {
                (DispatchState::Idle, Vec::new())
            }
            _ => (*state, Vec::new()),
        },
        DispatchEvent::Key(input) => on_key(state, input, ctx),
    }
}

fn on_key(
    state: &DispatchState,
    input: &KeyInput,
    ctx: &TransitionContext<'_>,
) -> (DispatchState, Vec<Effect>) {
    if input.target.is_text_editing() && input.token != KeyCodeName::Esc {
        return (*state, Vec::new());
    }

    match state {
        DispatchState::PendingChord(pending) if ctx.now > pending.expires_at => {
            // The expiry timer has not been serviced yet; expire first, then
            // treat the key as a fresh one.
            let (next, mut effects) = on_idle_key(input, ctx);
            effects.insert(0, Effect::CancelTimer);
            (next, effects)
        }
        DispatchState::PendingChord(pending) => {
            let mut effects = vec![Effect::CancelTimer];
            if let Some(binding) = ctx.keymap.resolve_chord(pending.leader, input) {
                effects.push(Effect::Invoke(binding.action.clone()));
            }
            (DispatchState::Idle, effects)
        }
        DispatchState::Idle => on_idle_key(input, ctx),
    }
}

fn on_idle_key(input: &KeyInput, ctx: &TransitionContext<'_>) -> (DispatchState, Vec<Effect>) {
    if ctx.keymap.is_leader(input) {
        let deadline = ctx.now + ctx.chord_timeout;
        let pending = PendingChord {
            leader: input.token,
            expires_at: deadline,
            generation: ctx.next_generation,
        };
        return (
            DispatchState::PendingChord(pending),
            vec![Effect::StartTimer {
                generation: ctx.next_generation,
                deadline,
            }],
        );
    }

    match ctx.keymap.resolve_single(input) {
        Some(binding) => (
            DispatchState::Idle,
            vec![Effect::Invoke(binding.action.clone())],
        ),
        None => (DispatchState::Idle, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, HostCommand};
    use crate::input::key::InputTarget;
    use crate::input::keymap::Keymap;
    use std::time::{Duration, Instant};

    fn ctx(keymap: &Keymap, now: Instant) -> TransitionContext<'_> {
        TransitionContext {
            keymap,
            now,
            chord_timeout: Duration::from_millis(2000),
            next_generation: 1,
        }
    }

    fn key(c: char) -> DispatchEvent {
        DispatchEvent::Key(KeyInput::char(c))
    }

    fn pending(now: Instant) -> DispatchState {
        DispatchState::PendingChord(PendingChord {
            leader: KeyCodeName::Char('g'),
            expires_at: now + Duration::from_millis(2000),
            generation: 1,
        })
    }

    #[test]
    fn leader_starts_chord_and_timer() {
        let keymap = Keymap::default();
        let now = Instant::now();
        let (state, effects) = transition(&DispatchState::Idle, &key('g'), &ctx(&keymap, now));
        assert_eq!(state, pending(now));
        assert_eq!(
            effects,
            vec![Effect::StartTimer {
                generation: 1,
                deadline: now + Duration::from_millis(2000)
            }]
        );
    }

    #[test]
    fn follower_completes_chord() {
        let keymap = Keymap::default();
        let now = Instant::now();
        let (state, effects) = transition(&pending(now), &key('t'), &ctx(&keymap, now));
        assert_eq!(state, DispatchState::Idle);
        assert_eq!(
            effects,
            vec![
                Effect::CancelTimer,
                Effect::Invoke(Action::Navigate("/tasks".to_string()))
            ]
        );
    }

    #[test]
    fn failed_chord_swallows_key() {
        let keymap = Keymap::default();
        let now = Instant::now();
        // 'n' alone would be New Task, but after the leader it is swallowed.
        let (state, effects) = transition(&pending(now), &key('n'), &ctx(&keymap, now));
        assert_eq!(state, DispatchState::Idle);
        assert_eq!(effects, vec![Effect::CancelTimer]);
    }

    #[test]
    fn late_key_is_processed_fresh() {
        let keymap = Keymap::default();
        let start = Instant::now();
        let late = start + Duration::from_millis(2001);
        let (state, effects) = transition(&pending(start), &key('n'), &ctx(&keymap, late));
        assert_eq!(state, DispatchState::Idle);
        assert_eq!(
            effects,
            vec![
                Effect::CancelTimer,
                Effect::Invoke(Action::Host(HostCommand::NewTask))
            ]
        );
    }

    #[test]
    fn key_at_deadline_still_completes() {
        let keymap = Keymap::default();
        let start = Instant::now();
        let at = start + Duration::from_millis(2000);
        let (_, effects) = transition(&pending(start), &key('t'), &ctx(&keymap, at));
        assert!(effects.contains(&Effect::Invoke(Action::Navigate("/tasks".to_string()))));
    }

    #[test]
    fn stale_expiry_is_noop() {
        let keymap = Keymap::default();
        let now = Instant::now();
        let stale = DispatchEvent::ChordExpired { generation: 99 };
        let (state, effects) = transition(&pending(now), &stale, &ctx(&keymap, now));
        assert_eq!(state, pending(now));
        assert!(effects.is_empty());

        let (state, _) = transition(&DispatchState::Idle, &stale, &ctx(&keymap, now));
        assert_eq!(state, DispatchState::Idle);
    }

    #[test]
    fn matching_expiry_returns_to_idle() {
        let keymap = Keymap::default();
        let now = Instant::now();
        let expired = DispatchEvent::ChordExpired { generation: 1 };
        let (state, effects) = transition(&pending(now), &expired, &ctx(&keymap, now));
        assert_eq!(state, DispatchState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn text_focus_suppresses_all_but_escape() {
        let keymap = Keymap::default();
        let now = Instant::now();
        let typed = DispatchEvent::Key(KeyInput::char('n').with_target(InputTarget::TextInput));
        let (state, effects) = transition(&DispatchState::Idle, &typed, &ctx(&keymap, now));
        assert_eq!(state, DispatchState::Idle);
        assert!(effects.is_empty());

        let esc = DispatchEvent::Key(
            KeyInput::plain(KeyCodeName::Esc).with_target(InputTarget::TextArea),
        );
        let (_, effects) = transition(&DispatchState::Idle, &esc, &ctx(&keymap, now));
        assert_eq!(effects, vec![Effect::Invoke(Action::CancelOverlay)]);
    }

    #[test]
    fn modified_leader_is_not_a_chord() {
        let keymap = Keymap::default();
        let now = Instant::now();
        let shift_g = DispatchEvent::Key(KeyInput::char('G'));
        let (state, effects) = transition(&DispatchState::Idle, &shift_g, &ctx(&keymap, now));
        assert_eq!(state, DispatchState::Idle);
        assert!(effects.is_empty());
    }
}
