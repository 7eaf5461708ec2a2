//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Off-white playfield
    pub const BACKGROUND: [f32; 4] = [0.94, 0.94, 0.94, 1.0];
    pub const DISK: [f32; 4] = [0.72, 0.49, 0.28, 1.0];
    pub const DISK_RIM: [f32; 4] = [0.45, 0.28, 0.14, 1.0];
    pub const DISK_GRAIN: [f32; 4] = [0.60, 0.39, 0.21, 1.0];
    pub const DISK_HUB: [f32; 4] = [0.35, 0.22, 0.11, 1.0];
    pub const BLADE: [f32; 4] = [0.82, 0.84, 0.88, 1.0];
    pub const HANDLE: [f32; 4] = [0.12, 0.12, 0.14, 1.0];
}
