//! Idle/demo mode player
//!
//! Splits the disk into one evenly spaced slot per knife and throws whenever
//! the knife would land on an empty slot. Finished rounds restart after a
//! short pause so the demo loops forever.

use super::collision::{angular_distance, collides};
use super::state::{RoundPhase, RoundState};
use super::tick::TickInput;
use crate::consts::IDLE_RESTART_TICKS;

/// Fill in the throw/reset commands the autopilot wants this tick
pub fn drive(state: &RoundState, input: &mut TickInput) {
    match state.phase() {
        RoundPhase::Ready => {
            if wants_throw(state) {
                input.throw = true;
            }
        }
        RoundPhase::Lost | RoundPhase::Cleared => {
            let ended = state.ended_at_tick.unwrap_or(state.time_ticks);
            if state.time_ticks.saturating_sub(ended) >= IDLE_RESTART_TICKS {
                input.reset = true;
            }
        }
        RoundPhase::InFlight => {}
    }
}

/// True if a throw now lands on a free slot without hitting anything
pub fn wants_throw(state: &RoundState) -> bool {
    let tuning = &state.tuning;
    let landing = state.predicted_landing_angle();
    if collides(landing, state.embedded_angles(), tuning) {
        return false;
    }

    let spacing = 360.0 / tuning.total_knives as f32;
    let slot = (landing / spacing).round() * spacing;
    angular_distance(landing, slot, false) <= tuning.rotation_step.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EmbeddedKnife, RoundEvent};
    use crate::sim::tick::step;

    #[test]
    fn test_autopilot_clears_default_level() {
        let mut state = RoundState::default();
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        let mut cleared = false;
        for _ in 0..10_000 {
            match step(&mut state, &input) {
                Some(RoundEvent::Cleared { .. }) => {
                    cleared = true;
                    break;
                }
                Some(RoundEvent::Lost { angle }) => panic!("autopilot collided at {angle}"),
                _ => {}
            }
        }

        assert!(cleared);
        assert_eq!(state.knives.len(), 20);
        for knife in &state.knives {
            assert_eq!(knife.angle % 18.0, 0.0);
        }
    }

    #[test]
    fn test_waits_for_slot() {
        let mut state = RoundState::default();
        // Rotation 0 lands at 320°, which is 4° off the 324° slot
        assert!(!wants_throw(&state));
        // Rotation 14 lands at 306° = 17 * 18
        for _ in 0..7 {
            state.tick();
        }
        assert!(wants_throw(&state));
    }

    #[test]
    fn test_skips_occupied_slot() {
        let mut state = RoundState::default();
        for _ in 0..7 {
            state.tick();
        }
        state.knives.push(EmbeddedKnife { angle: 306.0 });
        assert!(!wants_throw(&state));
    }

    #[test]
    fn test_restarts_finished_round_after_pause() {
        let mut state = RoundState::default();
        state.lost = true;
        state.ended_at_tick = Some(state.time_ticks);

        let mut input = TickInput::default();
        drive(&state, &mut input);
        assert!(!input.reset);

        for _ in 0..IDLE_RESTART_TICKS {
            state.tick();
        }
        drive(&state, &mut input);
        assert!(input.reset);
        assert!(!input.throw);
    }
}
