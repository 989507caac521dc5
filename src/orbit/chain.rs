use std::sync::Arc;

use glam::Vec3;

use super::sphere::{Appearance, ParentFrame, SphereInstance};
use crate::{
    draw::{DrawCommand, Topology},
    error::OrreryError,
    geometry::{DrawStyle, UnitSphereMesh},
};

/// Ordered spheres where every non-root member orbits an earlier one.
///
/// Parents are validated on insertion, so iterating in index order is a
/// valid topological order and [`update`](Self::update) never reads a
/// stale parent center.
#[derive(Debug, Clone)]
pub struct SphereChain {
    mesh: Arc<UnitSphereMesh>,
    spheres: Vec<SphereInstance>,
    appearance: Appearance,
}

impl SphereChain {
    /// Chain holding only the immobile root at the origin.
    pub fn new(
        mesh: Arc<UnitSphereMesh>,
        root_radius: f32,
        appearance: Appearance,
    ) -> Self {
        let mut root = SphereInstance::new(0, None, root_radius, mesh.clone());
        root.generate(None, appearance);
        Self {
            mesh,
            spheres: vec![root],
            appearance,
        }
    }

    /// Root plus `radii.len()` spheres, each orbiting the one before it.
    pub fn linear(
        mesh: Arc<UnitSphereMesh>,
        root_radius: f32,
        radii: &[f32],
        appearance: Appearance,
    ) -> Self {
        let mut chain = Self::new(mesh, root_radius, appearance);
        for &radius in radii {
            let parent = chain.spheres.len() - 1;
            let _ = chain.attach(parent, radius);
        }
        chain
    }

    /// Add a sphere orbiting `parent` and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::InvalidParent`] if `parent` is not already
    /// in the chain.
    pub fn push(
        &mut self,
        parent: usize,
        radius: f32,
    ) -> Result<usize, OrreryError> {
        if parent >= self.spheres.len() {
            return Err(OrreryError::InvalidParent {
                parent,
                len: self.spheres.len(),
            });
        }
        Ok(self.attach(parent, radius))
    }

    fn attach(&mut self, parent: usize, radius: f32) -> usize {
        let index = self.spheres.len();
        let mut sphere =
            SphereInstance::new(index, Some(parent), radius, self.mesh.clone());
        sphere.generate(Some(self.spheres[parent].frame()), self.appearance);
        self.spheres.push(sphere);
        index
    }

    fn parent_frame(&self, index: usize) -> Option<ParentFrame> {
        self.spheres[index]
            .parent()
            .map(|parent| self.spheres[parent].frame())
    }

    /// Advance every sphere one tick, parents before children.
    pub fn update(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        for index in 0..self.spheres.len() {
            let parent = self.parent_frame(index);
            self.spheres[index].update(parent, appearance);
        }
    }

    /// Regenerate every sphere without advancing angles.
    pub fn regenerate(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.regenerate_from(0);
    }

    fn regenerate_from(&mut self, first: usize) {
        for index in first..self.spheres.len() {
            let parent = self.parent_frame(index);
            self.spheres[index].generate(parent, self.appearance);
        }
    }

    /// Zero every sphere's rotation state.
    pub fn reset(&mut self) {
        for sphere in &mut self.spheres {
            sphere.reset();
        }
    }

    /// Set a sphere's radius (and previous radius) and re-place it and
    /// everything after it. Out-of-range indices are ignored.
    pub fn set_radius(&mut self, index: usize, radius: f32) {
        if index >= self.spheres.len() {
            log::warn!("set_radius: no sphere {index}");
            return;
        }
        let parent = self.parent_frame(index);
        self.spheres[index].set_radius(radius, parent, self.appearance);
        self.regenerate_from(index + 1);
    }

    /// Apply a draw style to every sphere.
    pub fn set_draw_style(&mut self, style: DrawStyle) {
        if self.appearance.draw_style != style {
            log::debug!("sphere draw style -> {style:?}");
        }
        self.appearance.draw_style = style;
        self.regenerate_from(0);
    }

    /// Appearance used by the last update.
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Ribbon edge across the last sphere, along the line joining it to the
    /// second-to-last one: `base + (end - base) * (1 ∓ width)`.
    ///
    /// `None` if the chain has fewer than two spheres.
    pub fn trail_endpoints(&self, width: f32) -> Option<(Vec3, Vec3)> {
        let [.., base, end] = self.spheres.as_slice() else {
            return None;
        };
        let base = base.center();
        let diff = end.center() - base;
        Some((base + diff * (1.0 - width), base + diff * (1.0 + width)))
    }

    /// One indexed draw per sphere with the index list for `style`.
    pub fn draw_commands(&self, style: DrawStyle) -> Vec<DrawCommand> {
        if self.mesh.is_empty() {
            return Vec::new();
        }
        let topology = Topology::for_style(style);
        let index_count = self.mesh.indices(style).len() as u32;
        (0..self.spheres.len())
            .map(|sphere| DrawCommand::Indexed {
                sphere,
                topology,
                index_count,
            })
            .collect()
    }

    /// Shared template mesh.
    pub fn mesh(&self) -> &Arc<UnitSphereMesh> {
        &self.mesh
    }

    /// Sphere at `index`.
    pub fn get(&self, index: usize) -> Option<&SphereInstance> {
        self.spheres.get(index)
    }

    /// Mutable sphere at `index` (rates and live radius edits).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut SphereInstance> {
        self.spheres.get_mut(index)
    }

    /// Spheres in update order.
    pub fn iter(&self) -> impl Iterator<Item = &SphereInstance> {
        self.spheres.iter()
    }

    /// Mutable spheres in update order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SphereInstance> {
        self.spheres.iter_mut()
    }

    /// Number of spheres, root included.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Never true: the root always exists.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TessellationOptions;

    fn mesh() -> Arc<UnitSphereMesh> {
        Arc::new(
            UnitSphereMesh::new(&TessellationOptions {
                segments: 10,
                rings: 8,
            })
            .unwrap(),
        )
    }

    #[test]
    fn two_sphere_chain_stacks_along_y() {
        let chain = SphereChain::linear(mesh(), 1.0, &[0.5], Appearance::default());
        assert_eq!(chain.get(1).unwrap().center(), Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn update_propagates_parent_centers_in_order() {
        let mut chain =
            SphereChain::linear(mesh(), 1.0, &[0.5, 0.25], Appearance::default());
        chain.get_mut(1).unwrap().set_rates(0.1, 0.0);
        chain.update(Appearance::default());

        let parent = chain.get(1).unwrap();
        let child = chain.get(2).unwrap();
        // Child offset has length parent.r + child.r from the current
        // parent center, which only holds if the parent moved first.
        let offset = child.center() - parent.center();
        assert!((offset.length() - 0.75).abs() < 1e-5);
        assert!(parent.center().x.abs() > 0.0);
    }

    #[test]
    fn root_stays_fixed_through_updates() {
        let mut chain = SphereChain::linear(mesh(), 1.0, &[0.5], Appearance::default());
        chain.get_mut(0).unwrap().set_rates(0.3, 0.3);
        for _ in 0..10 {
            chain.update(Appearance::default());
        }
        assert_eq!(chain.get(0).unwrap().center(), Vec3::ZERO);
    }

    #[test]
    fn push_rejects_unknown_parent() {
        let mut chain = SphereChain::new(mesh(), 1.0, Appearance::default());
        assert!(matches!(
            chain.push(3, 0.5),
            Err(OrreryError::InvalidParent { parent: 3, len: 1 })
        ));
        assert_eq!(chain.push(0, 0.5).unwrap(), 1);
        // Siblings may share a parent.
        assert_eq!(chain.push(0, 0.3).unwrap(), 2);
        assert_eq!(chain.get(2).unwrap().parent(), Some(0));
    }

    #[test]
    fn wireframe_draws_use_line_list() {
        let mut chain =
            SphereChain::linear(mesh(), 1.0, &[0.5, 0.4], Appearance::default());
        chain.set_draw_style(DrawStyle::Wireframe);
        let line_count = chain.mesh().line_indices().len() as u32;
        let cmds = chain.draw_commands(chain.appearance().draw_style);
        assert_eq!(cmds.len(), 3);
        for (i, cmd) in cmds.iter().enumerate() {
            assert_eq!(
                *cmd,
                DrawCommand::Indexed {
                    sphere: i,
                    topology: Topology::LineList,
                    index_count: line_count,
                }
            );
        }
        assert!(chain
            .iter()
            .all(|s| s.vertices().iter().all(|v| v.draw_style == 0)));
    }

    #[test]
    fn solid_draws_use_triangle_list() {
        let chain = SphereChain::linear(mesh(), 1.0, &[0.5], Appearance::default());
        let cmds = chain.draw_commands(DrawStyle::Solid);
        assert_eq!(cmds[0].topology(), Topology::TriangleList);
    }

    #[test]
    fn set_radius_moves_descendants() {
        let mut chain =
            SphereChain::linear(mesh(), 1.0, &[0.5, 0.25], Appearance::default());
        chain.set_radius(1, 1.0);
        assert_eq!(chain.get(1).unwrap().center(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(chain.get(2).unwrap().center(), Vec3::new(0.0, 3.25, 0.0));
    }

    #[test]
    fn trail_endpoints_straddle_last_sphere() {
        let chain =
            SphereChain::linear(mesh(), 1.0, &[0.5, 0.5], Appearance::default());
        // centers at y = 1.5 and y = 2.5
        let (p1, p2) = chain.trail_endpoints(0.2).unwrap();
        assert!((p1 - Vec3::new(0.0, 2.3, 0.0)).length() < 1e-5);
        assert!((p2 - Vec3::new(0.0, 2.7, 0.0)).length() < 1e-5);

        let lone = SphereChain::new(mesh(), 1.0, Appearance::default());
        assert!(lone.trail_endpoints(0.2).is_none());
    }

    #[test]
    fn reset_zeroes_every_sphere() {
        let mut chain =
            SphereChain::linear(mesh(), 1.0, &[0.5, 0.4], Appearance::default());
        for sphere in chain.iter_mut() {
            sphere.set_rates(0.1, 0.1);
        }
        chain.update(Appearance::default());
        chain.reset();
        assert!(chain.iter().all(|s| s.rates() == (0.0, 0.0) && s.angles() == (0.0, 0.0)));
    }
}
