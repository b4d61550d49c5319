//! Vertex types for shell line rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::shell::ShellLayer;

/// 3D line vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub const fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color,
        }
    }
}

/// Line-strip vertices for the first `visible` layers, one strip per layer.
///
/// Strips are returned separately so the caller can issue one draw per
/// layer; use [`as_bytes`] to upload a strip.
pub fn layer_vertices(layers: &[ShellLayer], visible: usize, color: [f32; 4]) -> Vec<Vec<LineVertex>> {
    layers
        .iter()
        .take(visible)
        .map(|layer| {
            layer
                .points
                .iter()
                .map(|&p| LineVertex::new(p, color))
                .collect()
        })
        .collect()
}

/// Raw bytes of a vertex strip
pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for generated artwork
pub mod colors {
    /// Grid glyphs: rgb(0, 255, 170)
    pub const GRID_INK: [f32; 4] = [0.0, 1.0, 170.0 / 255.0, 1.0];
    pub const GRID_BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Shell strokes: 20% grey
    pub const SHELL_STROKE: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const SHELL_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// 8-bit RGB for image encoders (alpha dropped)
    pub fn to_rgb8(color: [f32; 4]) -> [u8; 3] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(color[0]), channel(color[1]), channel(color[2])]
    }
}
