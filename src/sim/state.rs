//! Round state and core simulation types
//!
//! Everything a round needs to be replayed or resumed lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{collides, landing_angle};
use crate::normalize_degrees;
use crate::tuning::Tuning;

/// Where the round is in its throw cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Knife waiting for a throw
    Ready,
    /// Knife travelling toward the disk
    InFlight,
    /// A throw hit an embedded knife
    Lost,
    /// Every knife embedded cleanly
    Cleared,
}

/// Outcome of a throw, reported by the tick that resolved it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// Knife stuck at `angle`; `remaining` throws left
    Embedded { angle: f32, remaining: u32 },
    /// Knife struck another knife at `angle`
    Lost { angle: f32 },
    /// Final knife stuck at `angle`
    Cleared { angle: f32 },
}

/// The rotating target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    /// Degrees, [0, 360)
    pub rotation: f32,
    pub center: Vec2,
    pub radius: f32,
}

impl Disk {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            rotation: 0.0,
            center,
            radius,
        }
    }

    pub fn rotate(&mut self, step: f32) {
        self.rotation = normalize_degrees(self.rotation + step);
    }

    /// Screen-independent angle of a disk-relative angle after rotation
    #[inline]
    pub fn world_angle(&self, disk_angle: f32) -> f32 {
        normalize_degrees(disk_angle + self.rotation)
    }
}

/// A knife stuck in the disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedKnife {
    /// Disk-relative angle in degrees, fixed at impact
    pub angle: f32,
}

/// The knife currently travelling upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrownKnife {
    /// Tip position on the vertical axis
    pub y: f32,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub tuning: Tuning,
    pub disk: Disk,
    /// Embedded knives in impact order
    pub knives: Vec<EmbeddedKnife>,
    pub in_flight: Option<ThrownKnife>,
    pub throws_remaining: u32,
    pub lost: bool,
    pub cleared: bool,
    /// Simulation tick counter, survives resets
    pub time_ticks: u64,
    /// Tick on which the round became terminal
    pub ended_at_tick: Option<u64>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl RoundState {
    /// Create a fresh round
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            disk: Disk::new(tuning.disk_center, tuning.disk_radius),
            knives: Vec::with_capacity(tuning.total_knives as usize),
            in_flight: None,
            throws_remaining: tuning.total_knives,
            lost: false,
            // An empty budget has nothing left to throw
            cleared: tuning.total_knives == 0,
            time_ticks: 0,
            ended_at_tick: None,
        }
    }

    /// Return to the start of a round, discarding any throw in progress
    pub fn reset(&mut self) {
        self.disk = Disk::new(self.tuning.disk_center, self.tuning.disk_radius);
        self.knives.clear();
        self.in_flight = None;
        self.throws_remaining = self.tuning.total_knives;
        self.lost = false;
        self.cleared = self.tuning.total_knives == 0;
        self.ended_at_tick = None;
    }

    /// Start a throw. Ignored while a knife is airborne or the round is over.
    pub fn request_throw(&mut self) -> bool {
        if self.in_flight.is_some() || self.is_terminal() || self.throws_remaining == 0 {
            return false;
        }
        self.in_flight = Some(ThrownKnife {
            y: self.tuning.knife_start_y(),
        });
        true
    }

    /// Advance one fixed simulation step
    pub fn tick(&mut self) -> Option<RoundEvent> {
        self.time_ticks += 1;
        self.disk.rotate(self.tuning.rotation_step);

        let knife = self.in_flight.as_mut()?;
        knife.y -= self.tuning.knife_speed;
        if knife.y > self.tuning.disk_bottom() {
            return None;
        }

        Some(self.resolve_landing())
    }

    /// Knife tip has reached the disk: embed it or end the round
    fn resolve_landing(&mut self) -> RoundEvent {
        let angle = landing_angle(self.disk.rotation);
        self.in_flight = None;

        if collides(angle, self.embedded_angles(), &self.tuning) {
            self.lost = true;
            self.ended_at_tick = Some(self.time_ticks);
            log::info!("Knife hit another knife at {angle:.0}°, round lost");
            return RoundEvent::Lost { angle };
        }

        self.knives.push(EmbeddedKnife { angle });
        self.throws_remaining -= 1;
        log::debug!(
            "Knife embedded at {angle:.0}°, {} remaining",
            self.throws_remaining
        );

        if self.throws_remaining == 0 {
            self.cleared = true;
            self.ended_at_tick = Some(self.time_ticks);
            log::info!("All {} knives embedded, level complete", self.knives.len());
            RoundEvent::Cleared { angle }
        } else {
            RoundEvent::Embedded {
                angle,
                remaining: self.throws_remaining,
            }
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.lost {
            RoundPhase::Lost
        } else if self.cleared {
            RoundPhase::Cleared
        } else if self.in_flight.is_some() {
            RoundPhase::InFlight
        } else {
            RoundPhase::Ready
        }
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.disk.rotation
    }

    /// Disk-relative angles of the embedded knives
    pub fn embedded_angles(&self) -> impl Iterator<Item = f32> + '_ {
        self.knives.iter().map(|k| k.angle)
    }

    /// Embedded knife angles combined with the current rotation
    pub fn embedded_world_angles(&self) -> impl Iterator<Item = f32> + '_ {
        self.knives.iter().map(|k| self.disk.world_angle(k.angle))
    }

    /// Tip of the airborne knife, if any
    pub fn in_flight_position(&self) -> Option<Vec2> {
        self.in_flight
            .map(|k| Vec2::new(self.tuning.knife_lane_x(), k.y))
    }

    /// Tip of the knife to draw in the throwing lane: the airborne one, or
    /// the next one waiting while throws remain
    pub fn ready_knife_position(&self) -> Option<Vec2> {
        if let Some(pos) = self.in_flight_position() {
            return Some(pos);
        }
        if self.is_terminal() || self.throws_remaining == 0 {
            return None;
        }
        Some(Vec2::new(
            self.tuning.knife_lane_x(),
            self.tuning.knife_start_y(),
        ))
    }

    /// Landing angle a throw requested now would get
    pub fn predicted_landing_angle(&self) -> f32 {
        let ticks = self.tuning.flight_ticks() as f32;
        landing_angle(normalize_degrees(
            self.disk.rotation + self.tuning.rotation_step * ticks,
        ))
    }

    #[inline]
    pub fn throws_remaining(&self) -> u32 {
        self.throws_remaining
    }

    #[inline]
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.lost || self.cleared
    }

    /// Banner text for a finished round
    pub fn status_message(&self) -> Option<&'static str> {
        if self.lost {
            Some("Game Over!")
        } else if self.cleared {
            Some("Level Complete!")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_ready() {
        let state = RoundState::default();
        assert_eq!(state.phase(), RoundPhase::Ready);
        assert_eq!(state.throws_remaining(), 20);
        assert_eq!(state.rotation(), 0.0);
        assert!(state.knives.is_empty());
        assert!(state.status_message().is_none());
        assert_eq!(state.ready_knife_position(), Some(Vec2::new(300.0, 600.0)));
    }

    #[test]
    fn test_idle_ticks_only_rotate() {
        let mut state = RoundState::default();
        for _ in 0..200 {
            assert!(state.tick().is_none());
        }
        // 400 degrees wraps to 40
        assert_eq!(state.rotation(), 40.0);
        assert_eq!(state.throws_remaining(), 20);
        assert!(state.knives.is_empty());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_request_throw_while_in_flight_is_noop() {
        let mut state = RoundState::default();
        assert!(state.request_throw());
        state.tick();
        let before = state.clone();
        assert!(!state.request_throw());
        assert_eq!(state, before);
    }

    #[test]
    fn test_request_throw_while_terminal_is_noop() {
        let mut state = RoundState::default();
        state.lost = true;
        let before = state.clone();
        assert!(!state.request_throw());
        assert_eq!(state, before);

        state.lost = false;
        state.cleared = true;
        assert!(!state.request_throw());
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_landing_embeds_and_decrements() {
        let mut state = RoundState::default();
        state.request_throw();
        let mut event = None;
        while event.is_none() {
            event = state.tick();
        }
        // Resolved on tick 20 at rotation 40
        assert_eq!(
            event,
            Some(RoundEvent::Embedded {
                angle: 320.0,
                remaining: 19
            })
        );
        assert_eq!(state.time_ticks, 20);
        assert_eq!(state.knives, vec![EmbeddedKnife { angle: 320.0 }]);
        assert_eq!(state.phase(), RoundPhase::Ready);
    }

    #[test]
    fn test_collision_loses_without_embedding() {
        let mut state = RoundState::default();
        state.knives.push(EmbeddedKnife { angle: 325.0 });
        state.request_throw();
        let mut event = None;
        while event.is_none() {
            event = state.tick();
        }
        assert_eq!(event, Some(RoundEvent::Lost { angle: 320.0 }));
        assert!(state.is_lost());
        assert_eq!(state.knives.len(), 1);
        assert_eq!(state.throws_remaining(), 20);
        assert!(state.in_flight.is_none());
        assert_eq!(state.status_message(), Some("Game Over!"));
        assert_eq!(state.ready_knife_position(), None);
    }

    #[test]
    fn test_zero_budget_round_is_cleared() {
        let tuning = Tuning {
            total_knives: 0,
            ..Tuning::default()
        };
        let mut state = RoundState::new(tuning);
        assert!(state.is_cleared());
        assert_eq!(state.phase(), RoundPhase::Cleared);
        assert!(!state.request_throw());
        for _ in 0..25 {
            assert!(state.tick().is_none());
        }
        assert_eq!(state.throws_remaining(), 0);
        assert!(state.knives.is_empty());

        state.reset();
        assert!(state.is_cleared());
        assert!(!state.request_throw());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = RoundState::default();
        state.request_throw();
        for _ in 0..25 {
            state.tick();
        }
        state.lost = true;
        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);
        assert_eq!(state.phase(), RoundPhase::Ready);
        assert_eq!(state.rotation(), 0.0);
        assert_eq!(state.throws_remaining(), 20);
        assert!(state.knives.is_empty());
        assert!(state.ended_at_tick.is_none());
    }

    #[test]
    fn test_world_angles_follow_rotation() {
        let mut state = RoundState::default();
        state.knives.push(EmbeddedKnife { angle: 350.0 });
        state.tick();
        state.tick();
        state.tick();
        let world: Vec<f32> = state.embedded_world_angles().collect();
        assert_eq!(world, vec![356.0]);
        state.tick();
        state.tick();
        let world: Vec<f32> = state.embedded_world_angles().collect();
        assert_eq!(world, vec![0.0]);
    }

    #[test]
    fn test_predicted_landing_matches_actual() {
        let mut state = RoundState::default();
        for _ in 0..37 {
            state.tick();
        }
        let predicted = state.predicted_landing_angle();
        state.request_throw();
        let mut event = None;
        while event.is_none() {
            event = state.tick();
        }
        match event {
            Some(RoundEvent::Embedded { angle, .. }) => assert_eq!(angle, predicted),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
