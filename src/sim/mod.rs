//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - One step per call, independent of real-time pacing
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{angular_distance, collides, landing_angle};
pub use state::{Disk, EmbeddedKnife, RoundEvent, RoundPhase, RoundState, ThrownKnife};
pub use tick::{TickInput, drain_substeps, step};
