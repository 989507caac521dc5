//! The trail is a ring of [`Vertex`] records written two at a time (one
//! edge pair per accepted [`RibbonTrail::add_strip`]). Consecutive pairs
//! form a triangle strip. Once the ring wraps, the oldest vertices are
//! overwritten and the trail is drawn as two strips, `[0, cursor)` and
//! `[cursor, capacity)`, so no triangle spans the seam. The seam itself
//! shows as a one-quad gap.

use glam::Vec3;

use crate::{
    draw::DrawCommand,
    error::OrreryError,
    geometry::{vertex::white, DrawStyle, Vertex},
    util::alpha_gate::AlphaGate,
};

/// Default trail length in vertices.
pub const DEFAULT_CAPACITY: usize = 4000;
/// Minimum trail length: one quad.
pub const MIN_CAPACITY: usize = 4;
/// Input pairs closer than this to the previous pair are dropped.
pub const MOVEMENT_THRESHOLD: f32 = 0.01;

/// Color of never-written trail vertices until the first alpha rewrite.
const UNWRITTEN_COLOR: [f32; 4] = [1.0, 0.5, 0.0, 1.0];

/// Circular vertex store for the ribbon trail.
#[derive(Debug, Clone)]
pub struct RibbonTrail {
    storage: Vec<Vertex>,
    cursor: usize,
    full: bool,
    last_pair: (Vec3, Vec3),
    /// Previous-but-one and previous written positions.
    normal_window: [Vec3; 2],
    alpha_gate: AlphaGate,
    movement_threshold: f32,
    dirty: bool,
}

impl RibbonTrail {
    /// Trail holding `capacity` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::InvalidCapacity`] if `capacity` is below
    /// [`MIN_CAPACITY`] or does not fit a `u32` draw range.
    pub fn new(
        capacity: usize,
        movement_threshold: f32,
    ) -> Result<Self, OrreryError> {
        if capacity < MIN_CAPACITY || u32::try_from(capacity).is_err() {
            return Err(OrreryError::InvalidCapacity(capacity));
        }
        let mut blank = Vertex::new([0.0; 3], UNWRITTEN_COLOR);
        blank.draw_style = DrawStyle::Solid.tag();

        Ok(Self {
            storage: vec![blank; capacity],
            cursor: 0,
            full: false,
            last_pair: (Vec3::ZERO, Vec3::ZERO),
            normal_window: [Vec3::ZERO; 2],
            alpha_gate: AlphaGate::default(),
            movement_threshold,
            dirty: true,
        })
    }

    /// Rewind the trail. Stored vertices are left in place; they are either
    /// overwritten or hidden by the draw guard.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.full = false;
        self.last_pair = (Vec3::ZERO, Vec3::ZERO);
    }

    /// Append the edge `p1`–`p2` as two new vertices.
    ///
    /// Returns `false` (and does nothing) when both points are within the
    /// movement threshold of the previous pair.
    pub fn add_strip(&mut self, p1: Vec3, p2: Vec3, alpha: f32) -> bool {
        let (last1, last2) = self.last_pair;
        if p1.distance(last1) < self.movement_threshold
            && p2.distance(last2) < self.movement_threshold
        {
            log::trace!("trail input stationary, skipped");
            return false;
        }

        self.push_point(p1);
        self.push_point(p2);
        self.last_pair = (p1, p2);

        if self.alpha_gate.refresh(alpha) {
            let color = white(self.alpha_gate.applied());
            for v in &mut self.storage {
                v.color = color;
            }
        }
        self.dirty = true;
        true
    }

    fn push_point(&mut self, point: Vec3) {
        let [older, newer] = self.normal_window;
        let normal = (point - older).cross(point - newer).normalize_or_zero();
        self.normal_window = [newer, point];

        let v = &mut self.storage[self.cursor];
        v.position = point.to_array();
        v.normal = normal.to_array();
        v.tex_coord = point.normalize_or_zero().truncate().to_array();

        self.cursor += 1;
        if self.cursor >= self.storage.len() {
            self.cursor = 0;
            self.full = true;
        }
    }

    /// Strip draws for the current contents; empty until a full quad
    /// (four vertices) exists.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        if !self.full && self.cursor < MIN_CAPACITY {
            return Vec::new();
        }
        let cursor = self.cursor as u32;
        let capacity = self.storage.len() as u32;

        let mut commands = Vec::with_capacity(2);
        if cursor > 0 {
            commands.push(DrawCommand::Strip {
                first_vertex: 0,
                vertex_count: cursor,
            });
        }
        if self.full {
            commands.push(DrawCommand::Strip {
                first_vertex: cursor,
                vertex_count: capacity - cursor,
            });
        }
        commands
    }

    /// Whole backing store, written or not.
    pub fn storage(&self) -> &[Vertex] {
        &self.storage
    }

    /// Fixed capacity in vertices.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Next write position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the ring has wrapped since the last reset.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Number of live vertices.
    pub fn len(&self) -> usize {
        if self.full {
            self.storage.len()
        } else {
            self.cursor
        }
    }

    /// True when nothing has been written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear and return the needs-upload flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(capacity: usize) -> RibbonTrail {
        RibbonTrail::new(capacity, MOVEMENT_THRESHOLD).unwrap()
    }

    fn step(i: usize) -> (Vec3, Vec3) {
        let x = i as f32 + 1.0;
        (Vec3::new(x, 0.0, 0.0), Vec3::new(x, 1.0, 0.0))
    }

    #[test]
    fn two_strips_make_one_quad() {
        let mut t = trail(8);
        assert!(t.add_strip(Vec3::ZERO, Vec3::X, 1.0));
        assert!(t.add_strip(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0), 1.0));
        assert_eq!(t.cursor(), 4);
        assert!(!t.is_full());
        assert_eq!(
            t.draw_commands(),
            vec![DrawCommand::Strip {
                first_vertex: 0,
                vertex_count: 4
            }]
        );
    }

    #[test]
    fn fewer_than_four_vertices_draw_nothing() {
        let mut t = trail(8);
        assert!(t.draw_commands().is_empty());
        let (a, b) = step(0);
        assert!(t.add_strip(a, b, 1.0));
        assert_eq!(t.cursor(), 2);
        assert!(t.draw_commands().is_empty());
    }

    #[test]
    fn near_duplicate_pair_is_gated() {
        let mut t = trail(8);
        let (a, b) = step(0);
        assert!(t.add_strip(a, b, 1.0));
        let nudge = Vec3::splat(0.001);
        assert!(!t.add_strip(a + nudge, b - nudge, 1.0));
        assert_eq!(t.cursor(), 2);

        // Moving only one endpoint is enough to pass.
        assert!(t.add_strip(a, b + Vec3::Z, 1.0));
        assert_eq!(t.cursor(), 4);
    }

    #[test]
    fn stationary_at_origin_is_gated_after_reset() {
        let mut t = trail(8);
        assert!(!t.add_strip(Vec3::ZERO, Vec3::splat(0.001), 1.0));
        assert_eq!(t.cursor(), 0);
    }

    #[test]
    fn wraps_after_capacity_points() {
        let mut t = trail(8);
        for i in 0..4 {
            let (a, b) = step(i);
            assert!(t.add_strip(a, b, 1.0));
        }
        assert!(t.is_full());
        assert_eq!(t.cursor(), 0);
        assert_eq!(t.len(), 8);

        let (a, b) = step(10);
        assert!(t.add_strip(a, b, 1.0));
        assert_eq!(t.cursor(), 2);
        assert_eq!(t.storage()[0].position, a.to_array());
        assert_eq!(t.storage()[1].position, b.to_array());
    }

    #[test]
    fn odd_capacity_wraps_mid_pair() {
        let mut t = trail(5);
        for i in 0..3 {
            let (a, b) = step(i);
            assert!(t.add_strip(a, b, 1.0));
        }
        assert!(t.is_full());
        assert_eq!(t.cursor(), 1);
    }

    #[test]
    fn full_trail_draws_two_strips_around_seam() {
        let mut t = trail(8);
        for i in 0..5 {
            let (a, b) = step(i);
            assert!(t.add_strip(a, b, 1.0));
        }
        assert_eq!(
            t.draw_commands(),
            vec![
                DrawCommand::Strip {
                    first_vertex: 0,
                    vertex_count: 2
                },
                DrawCommand::Strip {
                    first_vertex: 2,
                    vertex_count: 6
                },
            ]
        );
    }

    #[test]
    fn full_trail_at_seam_zero_draws_single_strip() {
        let mut t = trail(8);
        for i in 0..4 {
            let (a, b) = step(i);
            assert!(t.add_strip(a, b, 1.0));
        }
        assert_eq!(
            t.draw_commands(),
            vec![DrawCommand::Strip {
                first_vertex: 0,
                vertex_count: 8
            }]
        );
    }

    #[test]
    fn normal_uses_rolling_window() {
        let mut t = trail(8);
        assert!(t.add_strip(Vec3::X, Vec3::Y, 1.0));
        assert!(t.add_strip(Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 1.0), 1.0));
        // (p - X) x (p - Y) for p = (1, 0, 1) is (1, 1, 0).
        let n = Vec3::from_array(t.storage()[2].normal);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((n - expected).length() < 1e-6);
    }

    #[test]
    fn collinear_points_get_zero_normal() {
        let mut t = trail(8);
        assert!(t.add_strip(Vec3::X, Vec3::new(2.0, 0.0, 0.0), 1.0));
        assert!(t.add_strip(Vec3::new(3.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0), 1.0));
        assert!(t.storage()[..4].iter().all(|v| v.normal == [0.0; 3]));
    }

    #[test]
    fn tex_coord_is_normalized_position_xy() {
        let mut t = trail(8);
        assert!(t.add_strip(Vec3::new(3.0, 4.0, 0.0), Vec3::new(0.0, 0.0, 2.0), 1.0));
        let uv = t.storage()[0].tex_coord;
        assert!((uv[0] - 0.6).abs() < 1e-6 && (uv[1] - 0.8).abs() < 1e-6);
        assert_eq!(t.storage()[1].tex_coord, [0.0, 0.0]);
    }

    #[test]
    fn alpha_change_rewrites_entire_store() {
        let mut t = trail(8);
        assert_eq!(t.storage()[7].color, [1.0, 0.5, 0.0, 1.0]);
        let (a, b) = step(0);
        assert!(t.add_strip(a, b, 0.5));
        assert!(t.storage().iter().all(|v| v.color == [1.0, 1.0, 1.0, 0.5]));

        let (a, b) = step(1);
        assert!(t.add_strip(a, b, 0.505));
        assert!(t.storage().iter().all(|v| v.color[3] == 0.5));
    }

    #[test]
    fn invisible_first_strip_leaves_colors_unwritten() {
        let mut t = trail(8);
        let (a, b) = step(0);
        assert!(t.add_strip(a, b, 0.0));
        assert_eq!(t.storage()[0].color, UNWRITTEN_COLOR);
    }

    #[test]
    fn reset_rewinds_and_forgets_last_pair() {
        let mut t = trail(8);
        for i in 0..5 {
            let (a, b) = step(i);
            assert!(t.add_strip(a, b, 1.0));
        }
        t.reset();
        assert_eq!(t.cursor(), 0);
        assert!(!t.is_full());
        assert!(t.draw_commands().is_empty());

        let (a, b) = step(4);
        assert!(t.add_strip(a, b, 1.0));
        assert_eq!(t.cursor(), 2);
    }

    #[test]
    fn rejects_tiny_capacity() {
        assert!(matches!(
            RibbonTrail::new(3, MOVEMENT_THRESHOLD),
            Err(OrreryError::InvalidCapacity(3))
        ));
    }
}
