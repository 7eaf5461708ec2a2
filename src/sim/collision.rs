//! Landing angle and knife-on-knife collision
//!
//! A knife always strikes the disk at the same screen point (directly
//! below the centre). What changes from throw to throw is which part of the
//! disk is there, so landings are recorded in the disk's own frame.

use crate::normalize_degrees;
use crate::tuning::Tuning;

/// Disk-relative angle struck by a knife when the disk has turned by
/// `rotation` degrees
#[inline]
pub fn landing_angle(rotation: f32) -> f32 {
    normalize_degrees(360.0 - rotation)
}

/// Separation between two disk angles.
///
/// Without `wrap` this is the plain difference, so 1° and 359° are 358°
/// apart. With `wrap` it is the shorter way around the circle.
#[inline]
pub fn angular_distance(a: f32, b: f32, wrap: bool) -> f32 {
    let diff = (a - b).abs();
    if wrap { diff.min(360.0 - diff) } else { diff }
}

/// True if a landing at `angle` is strictly closer than the collision
/// threshold to any embedded knife
pub fn collides(angle: f32, embedded: impl IntoIterator<Item = f32>, tuning: &Tuning) -> bool {
    embedded.into_iter().any(|existing| {
        angular_distance(existing, angle, tuning.wrap_collision) < tuning.collision_threshold
    })
}
