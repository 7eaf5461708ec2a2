//! Scene tessellation
//!
//! Turns a [`RoundState`] into a triangle list in logical screen space
//! (origin top-left, y down). Pure CPU work so it can be tested without a
//! GPU.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::polar_to_cartesian;
use crate::sim::RoundState;

/// Screen angle (y down) of disk-frame 0°: the point directly below the
/// centre where every throw strikes
pub const IMPACT_SCREEN_ANGLE: f32 = 90.0;

/// Grain lines drawn on the disk so its rotation is visible
const GRAIN_LINES: u32 = 8;
const DISK_SEGMENTS: u32 = 64;

/// Build the full frame for a round
pub fn build(state: &RoundState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(2048);
    disk(state, &mut vertices);
    embedded_knives(state, &mut vertices);
    lane_knife(state, &mut vertices);
    vertices
}

/// Screen-space direction for a world angle (disk angle + rotation)
#[inline]
pub fn screen_direction(world_angle: f32) -> Vec2 {
    polar_to_cartesian(1.0, world_angle + IMPACT_SCREEN_ANGLE)
}

fn disk(state: &RoundState, out: &mut Vec<Vertex>) {
    let disk = &state.disk;
    let rim = disk.radius * 0.08;

    out.extend(shapes::circle(disk.center, disk.radius, colors::DISK, DISK_SEGMENTS));

    for i in 0..GRAIN_LINES {
        let disk_angle = i as f32 * 360.0 / GRAIN_LINES as f32;
        let dir = screen_direction(disk.world_angle(disk_angle));
        let start = disk.center + dir * (disk.radius * 0.2);
        out.extend(shapes::oriented_quad(
            start,
            dir,
            disk.radius * 0.7 - rim,
            2.0,
            colors::DISK_GRAIN,
        ));
    }

    out.extend(shapes::ring(
        disk.center,
        disk.radius - rim,
        disk.radius,
        colors::DISK_RIM,
        DISK_SEGMENTS,
    ));
    out.extend(shapes::circle(
        disk.center,
        disk.radius * 0.15,
        colors::DISK_HUB,
        DISK_SEGMENTS / 2,
    ));
}

fn embedded_knives(state: &RoundState, out: &mut Vec<Vertex>) {
    let tuning = &state.tuning;
    let disk = &state.disk;
    // Tip sits inside the rim, handle points away from the centre
    let tip_radius = disk.radius - tuning.embed_depth;

    for world_angle in state.embedded_world_angles() {
        let dir = screen_direction(world_angle);
        let tip = disk.center + dir * tip_radius;
        out.extend(shapes::knife(
            tip,
            dir,
            tuning.knife_length,
            tuning.knife_width,
            colors::BLADE,
        ));
    }
}

fn lane_knife(state: &RoundState, out: &mut Vec<Vertex>) {
    let tuning = &state.tuning;
    if let Some(tip) = state.ready_knife_position() {
        out.extend(shapes::knife(
            tip,
            Vec2::Y,
            tuning.knife_length,
            tuning.knife_width,
            colors::BLADE,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EmbeddedKnife;

    const KNIFE_VERTS: usize = 15;

    fn count_color(vertices: &[Vertex], color: [f32; 4]) -> usize {
        vertices.iter().filter(|v| v.color == color).count()
    }

    #[test]
    fn test_fresh_round_draws_disk_and_waiting_knife() {
        let state = RoundState::default();
        let verts = build(&state);
        // One knife: point + blade body
        assert_eq!(count_color(&verts, colors::BLADE), 9);
        assert_eq!(count_color(&verts, colors::HANDLE), 6);
        assert!(count_color(&verts, colors::DISK) > 0);
    }

    #[test]
    fn test_embedded_knives_are_drawn() {
        let mut state = RoundState::default();
        state.knives.push(EmbeddedKnife { angle: 0.0 });
        state.knives.push(EmbeddedKnife { angle: 90.0 });
        let verts = build(&state);
        assert_eq!(count_color(&verts, colors::HANDLE), 3 * 6);
        assert_eq!(
            count_color(&verts, colors::BLADE) + count_color(&verts, colors::HANDLE),
            3 * KNIFE_VERTS
        );
    }

    #[test]
    fn test_new_knife_appears_at_impact_point() {
        let mut state = RoundState::default();
        for _ in 0..20 {
            state.tick();
        }
        state.knives.push(EmbeddedKnife {
            angle: crate::sim::landing_angle(state.rotation()),
        });
        let world: Vec<f32> = state.embedded_world_angles().collect();
        let dir = screen_direction(world[0]);
        // Straight down the screen
        assert!(dir.x.abs() < 1e-4);
        assert!((dir.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_lane_knife_after_round_ends() {
        let mut state = RoundState::default();
        state.cleared = true;
        state.throws_remaining = 0;
        let verts = build(&state);
        assert_eq!(count_color(&verts, colors::HANDLE), 0);
    }
}
