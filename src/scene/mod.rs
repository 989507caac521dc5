//! Authoritative scene: the sphere chain, the ribbon trail, and the live
//! control values that drive them.
//!
//! [`Scene::tick`] is the fixed-period step. Control commands (reset,
//! style toggle, harmonize, live radius edits) are methods on [`Scene`].
//! [`SharedScene`] and [`Ticker`] let the tick run on its own thread while
//! the render path reads the same scene.

mod shared;
mod ticker;

use std::{f32::consts::PI, sync::Arc};

pub use shared::SharedScene;
pub use ticker::Ticker;

use crate::{
    draw::DrawCommand,
    error::OrreryError,
    geometry::{DrawStyle, UnitSphereMesh},
    options::{ChainOptions, Options, MAX_RATE},
    orbit::{Appearance, SphereChain},
    trail::RibbonTrail,
};

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Scalar controls mutated by the host UI between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Ribbon half-width as a fraction of the last orbit radius.
    pub ribbon_width: f32,
    /// Sphere alpha; 0 hides the spheres.
    pub sphere_alpha: f32,
    /// Ribbon alpha.
    pub ribbon_alpha: f32,
    /// Solid or wireframe spheres.
    pub draw_style: DrawStyle,
    /// Keep every Y rate at zero.
    pub x_axis_only: bool,
}

impl Controls {
    /// Controls seeded from options.
    pub fn from_options(options: &Options) -> Self {
        Self {
            ribbon_width: options.trail.width,
            sphere_alpha: options.display.sphere_alpha,
            ribbon_alpha: options.trail.alpha,
            draw_style: options.display.draw_style,
            x_axis_only: options.display.x_axis_only,
        }
    }

    /// Sphere appearance for the chain.
    pub fn appearance(&self) -> Appearance {
        Appearance {
            alpha: self.sphere_alpha,
            draw_style: self.draw_style,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Sphere chain + ribbon trail + controls.
#[derive(Debug, Clone)]
pub struct Scene {
    chain: SphereChain,
    trail: RibbonTrail,
    controls: Controls,
    chain_options: ChainOptions,
    /// Sphere whose radius is being edited live.
    radius_edit: Option<usize>,
    ticks: u64,
}

impl Scene {
    /// Build the mesh, chain and trail described by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::InvalidTessellation`] or
    /// [`OrreryError::InvalidCapacity`] for unusable options.
    pub fn new(options: &Options) -> Result<Self, OrreryError> {
        let mesh = Arc::new(UnitSphereMesh::new(&options.tessellation)?);
        let controls = Controls::from_options(options);
        let radii: Vec<f32> =
            options.chain.orbiters.iter().map(|o| o.radius).collect();
        let chain = SphereChain::linear(
            mesh,
            options.chain.root_radius,
            &radii,
            controls.appearance(),
        );
        let trail = RibbonTrail::new(
            options.trail.capacity,
            options.trail.movement_threshold,
        )?;

        let mut scene = Self {
            chain,
            trail,
            controls,
            chain_options: options.chain.clone(),
            radius_edit: None,
            ticks: 0,
        };
        for (i, orbiter) in options.chain.orbiters.iter().enumerate() {
            let (rate_x, rate_y) = orbiter.clamped_rates();
            scene.set_rates(i + 1, rate_x, rate_y);
        }

        log::info!(
            "scene: {} spheres, {}-vertex mesh, trail capacity {}",
            scene.chain.len(),
            scene.chain.mesh().vertex_count(),
            scene.trail.capacity()
        );
        Ok(scene)
    }

    /// One fixed-period step.
    ///
    /// Advances the chain and extends the trail across the last sphere.
    /// While a live radius edit is pending the chain is only regenerated,
    /// so the edited geometry shows without moving anything.
    pub fn tick(&mut self) {
        let appearance = self.controls.appearance();
        if self.radius_edit.is_some() {
            self.chain.regenerate(appearance);
            return;
        }

        self.chain.update(appearance);
        if let Some((p1, p2)) =
            self.chain.trail_endpoints(self.controls.ribbon_width)
        {
            let _ = self.trail.add_strip(p1, p2, self.controls.ribbon_alpha);
        }
        self.ticks += 1;
    }

    /// Clear the trail, zero every orbiter's rotation and restore the
    /// configured radii.
    pub fn reset(&mut self) {
        self.trail.reset();
        self.radius_edit = None;
        for index in 1..self.chain.len() {
            let radius = self
                .chain_options
                .orbiters
                .get(index - 1)
                .map_or_else(|| ChainOptions::reset_radius(index), |o| o.radius);
            if let Some(sphere) = self.chain.get_mut(index) {
                sphere.reset();
            }
            self.chain.set_radius(index, radius);
        }
        log::info!("scene reset");
    }

    /// Drop the trail; the spheres keep moving.
    pub fn clear_trail(&mut self) {
        self.trail.reset();
    }

    /// Switch between solid and wireframe spheres.
    pub fn toggle_draw_style(&mut self) -> DrawStyle {
        let style = self.controls.draw_style.toggled();
        self.set_draw_style(style);
        style
    }

    /// Set the sphere draw style for every sphere.
    pub fn set_draw_style(&mut self, style: DrawStyle) {
        self.controls.draw_style = style;
        self.chain.set_draw_style(style);
    }

    /// Toggle x-axis-only mode. Turning it on zeroes every Y rate and
    /// clears the trail. Returns the new state.
    pub fn toggle_x_axis_only(&mut self) -> bool {
        self.controls.x_axis_only = !self.controls.x_axis_only;
        if self.controls.x_axis_only {
            for sphere in self.chain.iter_mut().skip(1) {
                let (rate_x, _) = sphere.rates();
                sphere.set_rates(rate_x, 0.0);
            }
            self.trail.reset();
        }
        log::debug!("x axis only: {}", self.controls.x_axis_only);
        self.controls.x_axis_only
    }

    /// Snap every rate to a multiple of pi/60 and clear the trail.
    pub fn harmonize(&mut self) {
        for sphere in self.chain.iter_mut().skip(1) {
            let (rate_x, rate_y) = sphere.rates();
            sphere.set_rates(harmonize_rate(rate_x), harmonize_rate(rate_y));
        }
        self.trail.reset();
        log::debug!("rates harmonized");
    }

    /// Set an orbiter's rates, clamped to `±MAX_RATE`. The Y rate is
    /// forced to zero in x-axis-only mode. The root ignores rates.
    pub fn set_rates(&mut self, index: usize, rate_x: f32, rate_y: f32) {
        let rate_y = if self.controls.x_axis_only { 0.0 } else { rate_y };
        match self.chain.get_mut(index) {
            Some(sphere) if !sphere.is_root() => sphere.set_rates(
                rate_x.clamp(-MAX_RATE, MAX_RATE),
                rate_y.clamp(-MAX_RATE, MAX_RATE),
            ),
            _ => log::warn!("set_rates: no orbiter {index}"),
        }
    }

    /// Set a radius immediately (radius and previous radius).
    pub fn set_radius(&mut self, index: usize, radius: f32) {
        self.chain.set_radius(index, radius);
    }

    /// Change a radius live. Ticks stop advancing until
    /// [`commit_radius_edit`](Self::commit_radius_edit). Starting an edit
    /// on another sphere commits the pending one first.
    pub fn edit_radius(&mut self, index: usize, radius: f32) {
        if self.radius_edit.is_some_and(|pending| pending != index) {
            self.commit_radius_edit();
        }
        match self.chain.get_mut(index) {
            Some(sphere) => {
                sphere.edit_radius(radius);
                self.radius_edit = Some(index);
            }
            None => log::warn!("edit_radius: no sphere {index}"),
        }
    }

    /// Finish a live radius edit: rescale the edited sphere's rates by
    /// `previous² / new²` and clear the trail.
    pub fn commit_radius_edit(&mut self) {
        let Some(index) = self.radius_edit.take() else {
            return;
        };
        if let Some(sphere) = self.chain.get_mut(index) {
            sphere.commit_radius();
            log::debug!("sphere {index} radius -> {}", sphere.radius());
        }
        self.trail.reset();
    }

    /// Set the sphere alpha (clamped to 0–1).
    pub fn set_sphere_alpha(&mut self, alpha: f32) {
        self.controls.sphere_alpha = alpha.clamp(0.0, 1.0);
    }

    /// Set the ribbon alpha (clamped to 0–1).
    pub fn set_ribbon_alpha(&mut self, alpha: f32) {
        self.controls.ribbon_alpha = alpha.clamp(0.0, 1.0);
    }

    /// Set the ribbon half-width.
    pub fn set_ribbon_width(&mut self, width: f32) {
        self.controls.ribbon_width = width.max(0.0);
    }

    /// Everything to draw this frame: spheres (unless fully transparent),
    /// then the trail.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = if self.controls.sphere_alpha > 0.0 {
            self.chain.draw_commands(self.controls.draw_style)
        } else {
            Vec::new()
        };
        commands.extend(self.trail.draw_commands());
        commands
    }

    /// The sphere chain.
    pub fn chain(&self) -> &SphereChain {
        &self.chain
    }

    /// Mutable sphere chain.
    pub fn chain_mut(&mut self) -> &mut SphereChain {
        &mut self.chain
    }

    /// The ribbon trail.
    pub fn trail(&self) -> &RibbonTrail {
        &self.trail
    }

    /// Mutable ribbon trail.
    pub fn trail_mut(&mut self) -> &mut RibbonTrail {
        &mut self.trail
    }

    /// Current control values.
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Sphere with a pending live radius edit.
    pub fn radius_edit(&self) -> Option<usize> {
        self.radius_edit
    }

    /// Advancing ticks since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Snap a rate to a multiple of pi/60, truncating toward zero at five
/// decimal places.
pub fn harmonize_rate(rate: f32) -> f32 {
    if rate == 0.0 {
        return 0.0;
    }
    let step = (PI / 60.0 * 100_000.0) as i64;
    let scaled = (rate * 100_000.0) as i64;
    (scaled / step * step) as f32 / 100_000.0
}
