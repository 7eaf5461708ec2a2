//! Data-driven game balance
//!
//! Every number the round simulation reads lives here so a level can be
//! retuned from JSON without recompiling. Missing fields fall back to the
//! defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Gameplay tuning for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Disk centre in screen space
    pub disk_center: Vec2,
    pub disk_radius: f32,
    /// Degrees per tick
    pub rotation_step: f32,
    /// Units per tick
    pub knife_speed: f32,
    /// Degrees; landings strictly closer than this to a knife collide
    pub collision_threshold: f32,
    pub total_knives: u32,
    pub knife_start_offset: f32,
    pub knife_width: f32,
    pub knife_length: f32,
    pub embed_depth: f32,
    /// Measure separation around the circle instead of on a 0..360 line.
    /// Off by default: knives either side of 0° never collide.
    pub wrap_collision: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            disk_center: Vec2::new(DISK_CENTER_X, DISK_CENTER_Y),
            disk_radius: DISK_RADIUS,
            rotation_step: ROTATION_STEP,
            knife_speed: KNIFE_SPEED,
            collision_threshold: COLLISION_THRESHOLD,
            total_knives: TOTAL_KNIVES,
            knife_start_offset: KNIFE_START_OFFSET,
            knife_width: KNIFE_WIDTH,
            knife_length: KNIFE_LENGTH,
            embed_depth: EMBED_DEPTH,
            wrap_collision: false,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the round cannot be played with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(value: f32, field: &'static str) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive(self.screen_width, "screen_width")?;
        positive(self.screen_height, "screen_height")?;
        positive(self.disk_radius, "disk_radius")?;
        positive(self.knife_speed, "knife_speed")?;
        positive(self.knife_width, "knife_width")?;
        positive(self.knife_length, "knife_length")?;

        if !self.disk_center.is_finite() {
            return Err(TuningError::Invalid {
                field: "disk_center",
                reason: "must be finite",
            });
        }
        if !self.rotation_step.is_finite() {
            return Err(TuningError::Invalid {
                field: "rotation_step",
                reason: "must be finite",
            });
        }
        if !(self.collision_threshold.is_finite() && self.collision_threshold >= 0.0) {
            return Err(TuningError::Invalid {
                field: "collision_threshold",
                reason: "must be zero or positive",
            });
        }
        if !(self.embed_depth.is_finite() && self.embed_depth >= 0.0) {
            return Err(TuningError::Invalid {
                field: "embed_depth",
                reason: "must be zero or positive",
            });
        }
        if self.total_knives == 0 {
            return Err(TuningError::Invalid {
                field: "total_knives",
                reason: "must allow at least one throw",
            });
        }
        if !(self.knife_start_y() > self.disk_bottom()) {
            return Err(TuningError::Invalid {
                field: "knife_start_offset",
                reason: "knife must start below the disk",
            });
        }
        Ok(())
    }

    /// Tip position of a knife waiting to be thrown
    #[inline]
    pub fn knife_start_y(&self) -> f32 {
        self.screen_height - self.knife_start_offset
    }

    /// Lowest point of the disk; a knife tip reaching it lands
    #[inline]
    pub fn disk_bottom(&self) -> f32 {
        self.disk_center.y + self.disk_radius
    }

    /// Ticks between a throw request and its resolution
    pub fn flight_ticks(&self) -> u32 {
        let distance = self.knife_start_y() - self.disk_bottom();
        ((distance / self.knife_speed).ceil() as u32).max(1)
    }

    /// Fixed horizontal lane the knife travels along
    #[inline]
    pub fn knife_lane_x(&self) -> f32 {
        self.screen_width / 2.0
    }
}
