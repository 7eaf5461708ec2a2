//! Fixed timestep simulation tick
//!
//! Applies the inputs gathered since the last step, then advances the round
//! by exactly one step.

use super::autopilot;
use super::state::{RoundEvent, RoundState};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Throw the waiting knife (space)
    pub throw: bool,
    /// Start the round over
    pub reset: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Drop one-shot commands once a step has consumed them
    pub fn clear_one_shots(&mut self) {
        self.throw = false;
        self.reset = false;
    }
}

/// Advance the round by one fixed step
pub fn step(state: &mut RoundState, input: &TickInput) -> Option<RoundEvent> {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot::drive(state, &mut input);
    }

    if input.reset {
        state.reset();
        log::info!("Round reset");
    }

    if input.throw && state.request_throw() {
        log::debug!(
            "Knife thrown at rotation {:.0}°, {} left",
            state.rotation(),
            state.throws_remaining()
        );
    }

    state.tick()
}

/// Take as many fixed steps as the frame budget allows out of `accumulator`.
/// At most one step of leftover time is carried into the next frame.
pub fn drain_substeps(accumulator: &mut f32) -> u32 {
    let mut substeps = 0;
    while *accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
        *accumulator -= SIM_DT;
        substeps += 1;
    }
    *accumulator = accumulator.min(SIM_DT);
    substeps
}
