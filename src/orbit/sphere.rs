use std::sync::Arc;

use glam::Vec3;

use crate::{
    geometry::{rotation::rotate_xy, vertex::white, DrawStyle, UnitSphereMesh, Vertex},
    util::alpha_gate::{AlphaGate, ALPHA_EPSILON},
};

/// Smallest radius a sphere may take.
pub const MIN_RADIUS: f32 = 1e-3;

/// Global look applied to every generated vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Sphere alpha, 0–1.
    pub alpha: f32,
    /// Solid or wireframe.
    pub draw_style: DrawStyle,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            draw_style: DrawStyle::Solid,
        }
    }
}

/// What a child needs to know about its parent this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    /// Parent's world-space center.
    pub center: Vec3,
    /// Parent's current radius.
    pub radius: f32,
}

/// One sphere of the chain: orbital state plus its world-space vertices.
#[derive(Debug, Clone)]
pub struct SphereInstance {
    index: usize,
    parent: Option<usize>,
    radius: f32,
    previous_radius: f32,
    center: Vec3,
    rate_x: f32,
    rate_y: f32,
    angle_x: f32,
    angle_y: f32,
    mesh: Arc<UnitSphereMesh>,
    vertices: Vec<Vertex>,
    alpha_gate: AlphaGate,
    applied_style: Option<DrawStyle>,
    /// Root geometry must be rebuilt on the next generate.
    stale: bool,
    /// Vertices changed since the last GPU upload.
    dirty: bool,
}

impl SphereInstance {
    /// New instance at chain position `index` orbiting `parent`.
    ///
    /// The vertex array starts as a copy of the template; call
    /// [`generate`](Self::generate) (the chain does) to place it.
    pub fn new(
        index: usize,
        parent: Option<usize>,
        radius: f32,
        mesh: Arc<UnitSphereMesh>,
    ) -> Self {
        let radius = radius.max(MIN_RADIUS);
        let vertices = mesh.vertices().to_vec();
        Self {
            index,
            parent,
            radius,
            previous_radius: radius,
            center: Vec3::ZERO,
            rate_x: 0.0,
            rate_y: 0.0,
            angle_x: 0.0,
            angle_y: 0.0,
            mesh,
            vertices,
            alpha_gate: AlphaGate::new(1.0, ALPHA_EPSILON),
            applied_style: None,
            stale: true,
            dirty: true,
        }
    }

    /// Zero rotation rates and accumulated angles.
    pub fn reset(&mut self) {
        self.rate_x = 0.0;
        self.rate_y = 0.0;
        self.angle_x = 0.0;
        self.angle_y = 0.0;
    }

    /// Advance the accumulated angles by one tick, then regenerate.
    pub fn update(
        &mut self,
        parent: Option<ParentFrame>,
        appearance: Appearance,
    ) {
        self.angle_x += self.rate_x;
        self.angle_y += self.rate_y;
        self.generate(parent, appearance);
    }

    /// Set radius and previous radius, then regenerate.
    pub fn set_radius(
        &mut self,
        radius: f32,
        parent: Option<ParentFrame>,
        appearance: Appearance,
    ) {
        self.radius = radius.max(MIN_RADIUS);
        self.previous_radius = self.radius;
        self.stale = true;
        self.generate(parent, appearance);
    }

    /// Change the radius while keeping `previous_radius`, for live edits
    /// that are committed later with [`commit_radius`](Self::commit_radius).
    pub fn edit_radius(&mut self, radius: f32) {
        self.radius = radius.max(MIN_RADIUS);
        self.stale = true;
    }

    /// Finish a live radius edit: rescale the rates by
    /// `previous_radius² / radius²` so the orbit keeps its apparent pace,
    /// and adopt the new radius as the previous one.
    pub fn commit_radius(&mut self) {
        let ratio = self.previous_radius.powi(2) / self.radius.powi(2);
        self.rate_x *= ratio;
        self.rate_y *= ratio;
        self.previous_radius = self.radius;
    }

    /// Rebuild the world-space vertex array.
    ///
    /// The root keeps the template geometry scaled by its radius and is
    /// only rebuilt when its radius, style or (gated) alpha changed. Other
    /// spheres are re-placed every call around `parent`, which must already
    /// be current for this frame.
    pub fn generate(
        &mut self,
        parent: Option<ParentFrame>,
        appearance: Appearance,
    ) {
        let alpha_changed = self.alpha_gate.refresh(appearance.alpha);
        let style_changed = self.applied_style != Some(appearance.draw_style);
        self.applied_style = Some(appearance.draw_style);

        let Some(parent) = parent else {
            self.center = Vec3::ZERO;
            if self.stale || alpha_changed || style_changed {
                let alpha = self.alpha_gate.applied();
                self.place(Vec3::ZERO, (0.0, 0.0), alpha, appearance.draw_style);
                self.stale = false;
            }
            return;
        };

        // The offset spins with the radius-squared ratio; the surface
        // itself uses the raw angles.
        let spin =
            self.radius.powi(2) / parent.radius.max(MIN_RADIUS).powi(2);
        let offset = rotate_xy(
            Vec3::new(0.0, parent.radius + self.radius, 0.0),
            self.angle_x * spin,
            self.angle_y * spin,
        );
        self.center = parent.center + offset;

        self.place(
            self.center,
            (self.angle_x, self.angle_y),
            appearance.alpha,
            appearance.draw_style,
        );
        self.stale = false;
    }

    fn place(
        &mut self,
        center: Vec3,
        (angle_x, angle_y): (f32, f32),
        alpha: f32,
        style: DrawStyle,
    ) {
        let color = white(alpha);
        let tag = style.tag();
        for (dst, src) in self.vertices.iter_mut().zip(self.mesh.vertices()) {
            let scaled = Vec3::from_array(src.position) * self.radius;
            dst.position =
                (rotate_xy(scaled, angle_x, angle_y) + center).to_array();
            dst.normal = src.normal;
            dst.tex_coord = src.tex_coord;
            dst.color = color;
            dst.draw_style = tag;
        }
        self.dirty = true;
    }

    /// Position in the chain.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Parent chain index, `None` for the root.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// True for the immobile central body.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Current radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radius before the pending live edit (equal to `radius` otherwise).
    pub fn previous_radius(&self) -> f32 {
        self.previous_radius
    }

    /// World-space center computed by the last generate.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// This frame's parent data for a child of this sphere.
    pub fn frame(&self) -> ParentFrame {
        ParentFrame {
            center: self.center,
            radius: self.radius,
        }
    }

    /// Rotation rates `(x, y)` in radians per tick.
    pub fn rates(&self) -> (f32, f32) {
        (self.rate_x, self.rate_y)
    }

    /// Set rotation rates in radians per tick.
    pub fn set_rates(&mut self, rate_x: f32, rate_y: f32) {
        self.rate_x = rate_x;
        self.rate_y = rate_y;
    }

    /// Accumulated angles `(x, y)`.
    pub fn angles(&self) -> (f32, f32) {
        (self.angle_x, self.angle_y)
    }

    /// World-space vertices from the last generate.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Shared template this instance was built from.
    pub fn mesh(&self) -> &Arc<UnitSphereMesh> {
        &self.mesh
    }

    /// Whether the vertices changed since the last [`take_dirty`](Self::take_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear and return the dirty flag (called by the uploader).
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};

    use super::*;
    use crate::options::TessellationOptions;

    fn mesh() -> Arc<UnitSphereMesh> {
        Arc::new(
            UnitSphereMesh::new(&TessellationOptions {
                segments: 8,
                rings: 6,
            })
            .unwrap(),
        )
    }

    fn root_frame(radius: f32) -> ParentFrame {
        ParentFrame {
            center: Vec3::ZERO,
            radius,
        }
    }

    #[test]
    fn root_is_template_scaled_by_radius() {
        let mesh = mesh();
        let mut root = SphereInstance::new(0, None, 2.5, mesh.clone());
        root.set_rates(0.3, -0.2);
        for _ in 0..5 {
            root.update(None, Appearance::default());
        }
        assert_eq!(root.center(), Vec3::ZERO);
        for (v, t) in root.vertices().iter().zip(mesh.vertices()) {
            let expected = Vec3::from_array(t.position) * 2.5;
            assert_eq!(Vec3::from_array(v.position), expected);
        }
    }

    #[test]
    fn child_center_is_sum_of_radii_along_y() {
        let mut child = SphereInstance::new(1, Some(0), 0.5, mesh());
        child.generate(Some(root_frame(1.0)), Appearance::default());
        assert_eq!(child.center(), Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn zero_rates_do_not_drift() {
        let mut child = SphereInstance::new(1, Some(0), 0.4, mesh());
        child.update(Some(root_frame(1.0)), Appearance::default());
        let first = child.center();
        for _ in 0..50 {
            child.update(Some(root_frame(1.0)), Appearance::default());
            assert_eq!(child.center(), first);
        }
    }

    #[test]
    fn offset_rotation_uses_spin_ratio() {
        // radius 0.5 around radius 1.0: spin = 0.25, so a quarter turn of
        // accumulated angle moves the offset by pi/8 only.
        let mut child = SphereInstance::new(1, Some(0), 0.5, mesh());
        child.set_rates(FRAC_PI_2, 0.0);
        child.update(Some(root_frame(1.0)), Appearance::default());
        let expected = rotate_xy(Vec3::new(0.0, 1.5, 0.0), FRAC_PI_8, 0.0);
        assert!((child.center() - expected).length() < 1e-5);

        // The surface turns by the full, unscaled angle.
        let top = child.mesh().top_pole() as usize;
        let pole =
            Vec3::from_array(child.vertices()[top].position) - child.center();
        let expected_pole = rotate_xy(Vec3::new(0.0, 0.5, 0.0), FRAC_PI_2, 0.0);
        assert!((pole - expected_pole).length() < 1e-5);
    }

    #[test]
    fn vertices_carry_alpha_and_style() {
        let mut child = SphereInstance::new(1, Some(0), 0.5, mesh());
        let look = Appearance {
            alpha: 0.4,
            draw_style: DrawStyle::Wireframe,
        };
        child.generate(Some(root_frame(1.0)), look);
        assert!(child
            .vertices()
            .iter()
            .all(|v| v.color == [1.0, 1.0, 1.0, 0.4] && v.draw_style == 0));
    }

    #[test]
    fn root_alpha_rewrite_is_gated() {
        let mut root = SphereInstance::new(0, None, 1.0, mesh());
        root.generate(None, Appearance::default());
        assert!(root.take_dirty());

        let slight = Appearance {
            alpha: 0.995,
            ..Appearance::default()
        };
        root.generate(None, slight);
        assert!(!root.is_dirty());
        assert_eq!(root.vertices()[0].color[3], 1.0);

        let faded = Appearance {
            alpha: 0.5,
            ..Appearance::default()
        };
        root.generate(None, faded);
        assert!(root.take_dirty());
        assert_eq!(root.vertices()[0].color[3], 0.5);
    }

    #[test]
    fn reset_zeroes_rotation_state() {
        let mut child = SphereInstance::new(1, Some(0), 0.5, mesh());
        child.set_rates(0.1, 0.2);
        child.update(Some(root_frame(1.0)), Appearance::default());
        child.reset();
        assert_eq!(child.rates(), (0.0, 0.0));
        assert_eq!(child.angles(), (0.0, 0.0));
    }

    #[test]
    fn set_radius_updates_both_radii() {
        let mut child = SphereInstance::new(1, Some(0), 0.5, mesh());
        child.set_radius(0.8, Some(root_frame(1.0)), Appearance::default());
        assert_eq!(child.radius(), 0.8);
        assert_eq!(child.previous_radius(), 0.8);
        assert!((child.center() - Vec3::new(0.0, 1.8, 0.0)).length() < 1e-6);
    }

    #[test]
    fn committed_edit_rescales_rates() {
        let mut child = SphereInstance::new(1, Some(0), 0.5, mesh());
        child.set_rates(0.2, -0.4);
        child.edit_radius(1.0);
        assert_eq!(child.previous_radius(), 0.5);
        child.commit_radius();
        let (rx, ry) = child.rates();
        assert!((rx - 0.05).abs() < 1e-6);
        assert!((ry + 0.1).abs() < 1e-6);
        assert_eq!(child.previous_radius(), 1.0);
    }
}
