//! Latitude/longitude ("UV") sphere tessellation.
//!
//! One [`UnitSphereMesh`] is built at startup and shared read-only by every
//! sphere instance. Vertices are laid out ring by ring (top ring first),
//! `segments` per ring, followed by the top and bottom pole. Two index
//! lists are kept: a line list for wireframe and a triangle list for solid
//! drawing. Indices are 16-bit, which bounds the tessellation density.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::vertex::{white, DrawStyle, Vertex};
use crate::{error::OrreryError, options::TessellationOptions};

/// Minimum longitude steps per ring.
pub const MIN_SEGMENTS: u32 = 3;
/// Minimum latitude rings (excluding poles).
pub const MIN_RINGS: u32 = 2;

/// Shared radius-1 sphere template with line and triangle topologies.
#[derive(Debug, Clone)]
pub struct UnitSphereMesh {
    vertices: Vec<Vertex>,
    line_indices: Vec<u16>,
    triangle_indices: Vec<u16>,
    segments: u32,
    rings: u32,
}

impl UnitSphereMesh {
    /// Build the template at the given density.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::InvalidTessellation`] if the density is below
    /// [`MIN_SEGMENTS`]/[`MIN_RINGS`] or the vertex count does not fit a
    /// 16-bit index.
    pub fn new(tessellation: &TessellationOptions) -> Result<Self, OrreryError> {
        let TessellationOptions { segments, rings } = *tessellation;
        let vertex_count = u64::from(segments) * u64::from(rings) + 2;
        if segments < MIN_SEGMENTS
            || rings < MIN_RINGS
            || vertex_count > u64::from(u16::MAX) + 1
        {
            return Err(OrreryError::InvalidTessellation { segments, rings });
        }

        let vertices = build_vertices(segments, rings);
        let line_indices = build_line_indices(segments, rings);
        let triangle_indices = build_triangle_indices(segments, rings);

        log::debug!(
            "unit sphere: {} vertices, {} line indices, {} triangle indices",
            vertices.len(),
            line_indices.len(),
            triangle_indices.len()
        );

        Ok(Self {
            vertices,
            line_indices,
            triangle_indices,
            segments,
            rings,
        })
    }

    /// Template vertices (rings, then top pole, then bottom pole).
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Line-list indices for wireframe drawing.
    pub fn line_indices(&self) -> &[u16] {
        &self.line_indices
    }

    /// Triangle-list indices for solid drawing.
    pub fn triangle_indices(&self) -> &[u16] {
        &self.triangle_indices
    }

    /// Index list used for `style`.
    pub fn indices(&self, style: DrawStyle) -> &[u16] {
        match style {
            DrawStyle::Wireframe => &self.line_indices,
            DrawStyle::Solid => &self.triangle_indices,
        }
    }

    /// Number of template vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Size in bytes of one full vertex array.
    pub fn byte_len(&self) -> usize {
        self.vertices.len() * size_of::<Vertex>()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Longitude steps per ring.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Latitude rings, poles excluded.
    pub fn rings(&self) -> u32 {
        self.rings
    }

    /// Index of the top pole; the bottom pole follows it.
    pub fn top_pole(&self) -> u16 {
        (self.vertices.len() - 2) as u16
    }
}

fn build_vertices(segments: u32, rings: u32) -> Vec<Vertex> {
    let pitch_count = rings + 1;
    let pitch_step = PI / pitch_count as f32;
    let yaw_step = TAU / segments as f32;

    let mut vertices = Vec::with_capacity((segments * rings + 2) as usize);
    for p in 1..pitch_count {
        let pitch = p as f32 * pitch_step;
        let out = pitch.sin().abs();
        let y = pitch.cos();
        for i in 0..segments {
            let yaw = i as f32 * yaw_step;
            let model = Vec3::new(out * yaw.cos(), y, out * yaw.sin());
            let mut v = Vertex::new(model.to_array(), white(1.0));
            v.normal = model.normalize().to_array();
            v.tex_coord = [
                i as f32 / (segments - 1) as f32,
                p as f32 / pitch_count as f32,
            ];
            v.draw_style = DrawStyle::Solid.tag();
            vertices.push(v);
        }
    }

    for pole in [Vec3::Y, Vec3::NEG_Y] {
        let mut v = Vertex::new(pole.to_array(), white(1.0));
        v.normal = pole.to_array();
        v.draw_style = DrawStyle::Solid.tag();
        vertices.push(v);
    }
    vertices
}

fn build_line_indices(segments: u32, rings: u32) -> Vec<u16> {
    let top = (segments * rings) as u16;
    let bottom = top + 1;
    let last_ring = (rings - 1) * segments;

    let mut indices = Vec::new();
    for ring in 0..rings {
        let base = ring * segments;
        for s in 0..segments {
            let next = (s + 1) % segments;
            indices.extend_from_slice(&[(base + s) as u16, (base + next) as u16]);
            if ring + 1 < rings {
                indices.extend_from_slice(&[
                    (base + s) as u16,
                    (base + segments + s) as u16,
                ]);
            }
        }
    }

    for s in 0..segments {
        indices.extend_from_slice(&[s as u16, top, (last_ring + s) as u16, bottom]);
    }
    indices
}

fn build_triangle_indices(segments: u32, rings: u32) -> Vec<u16> {
    let top = (segments * rings) as u16;
    let bottom = top + 1;
    let last_ring = (rings - 1) * segments;

    let mut indices = Vec::new();
    for ring in 0..rings - 1 {
        let base = ring * segments;
        for s in 0..segments {
            let next = (s + 1) % segments;
            let i1 = (base + s) as u16;
            let i2 = (base + next) as u16;
            let i3 = i2 + segments as u16;
            let i4 = i1 + segments as u16;
            indices.extend_from_slice(&[i1, i2, i3, i1, i3, i4]);
        }
    }

    for s in 0..segments {
        let next = (s + 1) % segments;
        indices.extend_from_slice(&[s as u16, top, next as u16]);
        indices.extend_from_slice(&[
            (last_ring + s) as u16,
            (last_ring + next) as u16,
            bottom,
        ]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(segments: u32, rings: u32) -> UnitSphereMesh {
        UnitSphereMesh::new(&TessellationOptions { segments, rings }).unwrap()
    }

    #[test]
    fn default_density_counts() {
        let m = mesh(20, 20);
        assert_eq!(m.vertex_count(), 402);
        // quads between 19 ring pairs plus two fans
        assert_eq!(m.triangle_indices().len(), (19 * 20 * 2 + 2 * 20) * 3);
        // ring edges, meridian edges (all but last ring), pole spokes
        assert_eq!(m.line_indices().len(), (20 * 20 + 19 * 20 + 2 * 20) * 2);
        assert_eq!(m.byte_len(), 402 * 52);
    }

    #[test]
    fn triangle_indices_in_range_and_distinct() {
        for (segments, rings) in [(3, 2), (4, 3), (20, 20), (64, 32), (7, 11)] {
            let m = mesh(segments, rings);
            let count = m.vertex_count();
            for tri in m.triangle_indices().chunks_exact(3) {
                assert!(tri.iter().all(|&i| (i as usize) < count));
                assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
            }
            assert!(m.line_indices().iter().all(|&i| (i as usize) < count));
        }
    }

    #[test]
    fn poles_are_last_two_vertices() {
        let m = mesh(8, 5);
        let top = m.top_pole() as usize;
        assert_eq!(top, m.vertex_count() - 2);
        assert_eq!(m.vertices()[top].position, [0.0, 1.0, 0.0]);
        assert_eq!(m.vertices()[top].normal, [0.0, 1.0, 0.0]);
        assert_eq!(m.vertices()[top + 1].position, [0.0, -1.0, 0.0]);
        assert_eq!(m.vertices()[top + 1].normal, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn ring_vertices_lie_on_unit_sphere() {
        let m = mesh(12, 9);
        for v in m.vertices() {
            let p = Vec3::from_array(v.position);
            assert!((p.length() - 1.0).abs() < 1e-5);
            let n = Vec3::from_array(v.normal);
            assert!((n - p).length() < 1e-5);
        }
    }

    #[test]
    fn tex_coords_span_longitude_and_latitude() {
        let m = mesh(10, 4);
        let first = m.vertices()[0].tex_coord;
        let end_of_ring = m.vertices()[9].tex_coord;
        assert_eq!(first, [0.0, 0.2]);
        assert_eq!(end_of_ring[0], 1.0);
        let last_ring = m.vertices()[30].tex_coord;
        assert!((last_ring[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn fans_reference_poles() {
        let m = mesh(6, 3);
        let top = m.top_pole();
        let tris = m.triangle_indices();
        let fan_start = 2 * 6 * 6;
        assert_eq!(&tris[fan_start..fan_start + 3], &[0, top, 1]);
        assert_eq!(&tris[fan_start + 3..fan_start + 6], &[12, 13, top + 1]);
    }

    #[test]
    fn indices_follow_draw_style() {
        let m = mesh(5, 4);
        assert_eq!(m.indices(DrawStyle::Wireframe), m.line_indices());
        assert_eq!(m.indices(DrawStyle::Solid), m.triangle_indices());
    }

    #[test]
    fn rejects_degenerate_or_oversized_density() {
        let too_coarse = TessellationOptions { segments: 2, rings: 4 };
        assert!(UnitSphereMesh::new(&too_coarse).is_err());
        let too_flat = TessellationOptions { segments: 8, rings: 1 };
        assert!(UnitSphereMesh::new(&too_flat).is_err());
        let too_dense = TessellationOptions { segments: 512, rings: 512 };
        assert!(matches!(
            UnitSphereMesh::new(&too_dense),
            Err(OrreryError::InvalidTessellation { segments: 512, rings: 512 })
        ));
    }
}
