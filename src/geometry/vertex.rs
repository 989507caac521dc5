use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How sphere geometry is drawn.
///
/// The discriminant doubles as the per-vertex style tag the shader reads.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DrawStyle {
    /// Line list over the ring/meridian edges.
    Wireframe = 0,
    /// Filled triangle list.
    #[default]
    Solid = 1,
}

impl DrawStyle {
    /// Per-vertex tag written into [`Vertex::draw_style`].
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// The other style.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Wireframe => Self::Solid,
            Self::Solid => Self::Wireframe,
        }
    }
}

/// 52-byte vertex shared by sphere and trail pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position (unit-sphere space for the template mesh).
    pub position: [f32; 3],
    /// Surface normal.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub tex_coord: [f32; 2],
    /// RGBA color, 0–1.
    pub color: [f32; 4],
    /// 0 = line hint, 1 = solid. See [`DrawStyle::tag`].
    pub draw_style: u32,
}

impl Vertex {
    /// Vertex at `position` with the given color and everything else zeroed.
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal: [0.0; 3],
            tex_coord: [0.0; 2],
            color,
            draw_style: 0,
        }
    }
}

/// Flat white at the given alpha.
pub(crate) fn white(alpha: f32) -> [f32; 4] {
    [1.0, 1.0, 1.0, alpha]
}

/// Vertex buffer layout matching [`Vertex`] (locations 0–4).
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 32,
                shader_location: 3,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Uint32,
                offset: 48,
                shader_location: 4,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(size_of::<Vertex>(), 52);
        let layout = vertex_buffer_layout();
        assert_eq!(layout.array_stride, 52);
        let last = layout.attributes.last().unwrap();
        assert_eq!(last.offset + 4, layout.array_stride);
    }

    #[test]
    fn draw_style_tags() {
        assert_eq!(DrawStyle::Wireframe.tag(), 0);
        assert_eq!(DrawStyle::Solid.tag(), 1);
        assert_eq!(DrawStyle::Solid.toggled(), DrawStyle::Wireframe);
        assert_eq!(DrawStyle::default(), DrawStyle::Solid);
    }
}
