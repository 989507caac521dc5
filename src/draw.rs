//! GPU-agnostic draw lists.
//!
//! The sphere chain and the ribbon trail describe what they want drawn as
//! [`DrawCommand`]s; the renderers in [`crate::renderer`] replay them
//! against a `wgpu::RenderPass`. Keeping the decision here makes the draw
//! logic testable without a device.

use crate::geometry::{DrawStyle, Vertex};

/// Primitive topology of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Indexed line list (wireframe spheres).
    LineList,
    /// Indexed triangle list (solid spheres).
    TriangleList,
    /// Non-indexed triangle strip (trail).
    TriangleStrip,
}

impl Topology {
    /// Sphere topology for a draw style.
    pub fn for_style(style: DrawStyle) -> Self {
        match style {
            DrawStyle::Wireframe => Self::LineList,
            DrawStyle::Solid => Self::TriangleList,
        }
    }

    /// The matching wgpu primitive topology.
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Self::LineList => wgpu::PrimitiveTopology::LineList,
            Self::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Self::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }
}

/// One draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Indexed draw of one sphere's vertex buffer with a shared index list.
    Indexed {
        /// Chain index of the sphere whose vertex buffer is bound.
        sphere: usize,
        /// Line list or triangle list.
        topology: Topology,
        /// Number of indices drawn from the start of the list.
        index_count: u32,
    },
    /// Triangle strip over a contiguous run of the trail buffer.
    ///
    /// The run is bound through a byte offset on the vertex buffer and
    /// drawn from vertex 0 of that binding.
    Strip {
        /// First trail vertex of the run.
        first_vertex: u32,
        /// Number of vertices in the run.
        vertex_count: u32,
    },
}

impl DrawCommand {
    /// Topology used by this command.
    pub fn topology(&self) -> Topology {
        match self {
            Self::Indexed { topology, .. } => *topology,
            Self::Strip { .. } => Topology::TriangleStrip,
        }
    }

    /// Byte offset of the vertex-buffer binding for a strip run.
    pub fn vertex_byte_offset(&self) -> wgpu::BufferAddress {
        match self {
            Self::Indexed { .. } => 0,
            Self::Strip { first_vertex, .. } => {
                u64::from(*first_vertex) * size_of::<Vertex>() as u64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_selects_topology() {
        assert_eq!(Topology::for_style(DrawStyle::Wireframe), Topology::LineList);
        assert_eq!(Topology::for_style(DrawStyle::Solid), Topology::TriangleList);
    }

    #[test]
    fn strip_offset_is_in_bytes() {
        let cmd = DrawCommand::Strip {
            first_vertex: 10,
            vertex_count: 4,
        };
        assert_eq!(cmd.vertex_byte_offset(), 520);
        assert_eq!(cmd.topology(), Topology::TriangleStrip);
    }
}
