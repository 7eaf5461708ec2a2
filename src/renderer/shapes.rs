//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in logical screen space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        push_quad(&mut vertices, [inner1, outer1, outer2, inner2], color);
    }

    vertices
}

/// A rectangle starting at `base`, extending `length` along `dir`
pub fn oriented_quad(base: Vec2, dir: Vec2, length: f32, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = dir.normalize_or_zero();
    let half = dir.perp() * (width / 2.0);
    let end = base + dir * length;

    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [base + half, end + half, end - half, base - half],
        color,
    );
    vertices
}

/// A knife with its tip at `tip`, the handle extending along `dir`.
///
/// The front 60% is a tapering blade; the rest is the handle.
pub fn knife(tip: Vec2, dir: Vec2, length: f32, width: f32, blade_color: [f32; 4]) -> Vec<Vertex> {
    let dir = dir.normalize_or_zero();
    let blade_length = length * 0.6;
    let blade_half = dir.perp() * (width * 0.3);
    let heel = tip + dir * blade_length;

    let mut vertices = Vec::with_capacity(15);

    // Point
    let shoulder = tip + dir * (blade_length * 0.25);
    vertices.push(Vertex::new(tip.x, tip.y, blade_color));
    vertices.push(Vertex::new(
        shoulder.x + blade_half.x,
        shoulder.y + blade_half.y,
        blade_color,
    ));
    vertices.push(Vertex::new(
        shoulder.x - blade_half.x,
        shoulder.y - blade_half.y,
        blade_color,
    ));

    // Blade body
    push_quad(
        &mut vertices,
        [
            shoulder + blade_half,
            heel + blade_half,
            heel - blade_half,
            shoulder - blade_half,
        ],
        blade_color,
    );

    // Handle
    vertices.extend(oriented_quad(
        heel,
        dir,
        length - blade_length,
        width * 0.5,
        colors::HANDLE,
    ));

    vertices
}

fn push_quad(vertices: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    // Two triangles
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
}
