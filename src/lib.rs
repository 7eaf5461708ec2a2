//! Eternal Edge - throw knives into a spinning disk without hitting the others
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (rotation, throws, collisions)
//! - `renderer`: Scene tessellation and WebGPU pipeline
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences and key bindings

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{StartupError, TuningError};
pub use settings::{InputAction, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one step per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Disk geometry
    pub const DISK_CENTER_X: f32 = SCREEN_WIDTH / 2.0;
    pub const DISK_CENTER_Y: f32 = 200.0;
    pub const DISK_RADIUS: f32 = 100.0;

    /// Degrees the disk turns per tick
    pub const ROTATION_STEP: f32 = 2.0;
    /// Knife travel per tick (logical units)
    pub const KNIFE_SPEED: f32 = 15.0;
    /// Minimum separation between embedded knives (degrees)
    pub const COLLISION_THRESHOLD: f32 = 15.0;
    /// Throws per level
    pub const TOTAL_KNIVES: u32 = 20;

    /// Waiting knife sits this far above the bottom edge
    pub const KNIFE_START_OFFSET: f32 = 100.0;
    /// Knife sprite footprint
    pub const KNIFE_WIDTH: f32 = 30.0;
    pub const KNIFE_LENGTH: f32 = 100.0;
    /// How far an embedded tip sinks inside the rim
    pub const EMBED_DEPTH: f32 = 20.0;

    /// Ticks the autopilot lingers on a finished round before restarting
    pub const IDLE_RESTART_TICKS: u64 = 120;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, degrees) to screen space (x right, y down)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}
