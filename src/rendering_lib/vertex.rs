// src/rendering_lib/vertex.rs

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2], // clip space
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 2], tex_coords: [f32; 2]) -> Self {
        Self { position, tex_coords }
    }

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
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
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Two triangles covering the whole viewport; texture origin at the top left.
pub const FULLSCREEN_QUAD: [Vertex; 4] = [
    Vertex::new([-1.0, 1.0], [0.0, 0.0]),
    Vertex::new([1.0, 1.0], [1.0, 0.0]),
    Vertex::new([1.0, -1.0], [1.0, 1.0]),
    Vertex::new([-1.0, -1.0], [0.0, 1.0]),
];

pub const FULLSCREEN_QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
