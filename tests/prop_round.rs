//! Property-based tests for the round state machine.
//!
//! Random input sequences are fed through `step` and the round invariants
//! are checked after every tick.

use proptest::prelude::*;

use eternal_edge::sim::{RoundPhase, RoundState, TickInput, angular_distance, step};
use eternal_edge::Tuning;

fn inputs() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(
        (prop::bool::weighted(0.2), prop::bool::weighted(0.005)).prop_map(|(throw, reset)| {
            TickInput {
                throw,
                reset,
                idle_mode: false,
            }
        }),
        0..3000,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Bookkeeping and separation invariants hold after every step.
    #[test]
    fn prop_round_invariants(inputs in inputs()) {
        let mut state = RoundState::default();
        let total = state.tuning.total_knives;
        let threshold = state.tuning.collision_threshold;

        for input in &inputs {
            let before = state.throws_remaining();
            step(&mut state, input);

            prop_assert!(!(state.is_lost() && state.is_cleared()));
            prop_assert_eq!(state.throws_remaining() as usize + state.knives.len(), total as usize);
            prop_assert!(state.rotation() >= 0.0 && state.rotation() < 360.0);
            if state.is_terminal() {
                prop_assert!(state.in_flight.is_none());
            }
            if !input.reset {
                // Only a clean landing changes the count, by exactly one
                prop_assert!(before - state.throws_remaining() <= 1);
            }
            prop_assert_eq!(state.is_cleared(), state.throws_remaining() == 0);

            for (i, a) in state.knives.iter().enumerate() {
                for b in &state.knives[i + 1..] {
                    prop_assert!(angular_distance(a.angle, b.angle, false) >= threshold);
                }
            }
        }
    }

    /// Without throws, ticks only turn the disk.
    #[test]
    fn prop_idle_ticks_only_rotate(ticks in 0u32..2000, step_deg in 1u32..10) {
        let tuning = Tuning { rotation_step: step_deg as f32, ..Tuning::default() };
        let mut state = RoundState::new(tuning);
        let idle = TickInput::default();
        for _ in 0..ticks {
            prop_assert!(step(&mut state, &idle).is_none());
        }
        prop_assert_eq!(state.rotation(), ((ticks * step_deg) % 360) as f32);
        prop_assert_eq!(state.throws_remaining(), tuning.total_knives);
        prop_assert!(state.knives.is_empty());
        prop_assert_eq!(state.phase(), RoundPhase::Ready);
    }

    /// Throw requests are no-ops while airborne or after the round ends.
    #[test]
    fn prop_throw_requests_ignored_when_not_ready(inputs in inputs()) {
        let mut state = RoundState::default();
        for input in &inputs {
            step(&mut state, input);
            if state.phase() != RoundPhase::Ready {
                let before = state.clone();
                prop_assert!(!state.request_throw());
                prop_assert_eq!(&state, &before);
            }
        }
    }

    /// Reset always returns to a fresh round, and twice is the same as once.
    #[test]
    fn prop_reset_restores_ready(inputs in inputs()) {
        let mut state = RoundState::default();
        for input in &inputs {
            step(&mut state, input);
        }
        state.reset();
        let once = state.clone();
        state.reset();
        prop_assert_eq!(&state, &once);

        let mut fresh = RoundState::default();
        fresh.time_ticks = state.time_ticks;
        prop_assert_eq!(&state, &fresh);
    }
}
