//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a key press, a mouse
//! gesture or a host UI control, is an [`OrreryCommand`]. Hosts pass them
//! to [`OrreryEngine::execute`](super::OrreryEngine::execute).

use glam::Vec2;

use crate::scene::Scene;

/// A discrete or parameterized engine operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrreryCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Scene ───────────────────────────────────────────────────────
    /// Clear the trail, zero rotations and restore the configured radii.
    Reset,

    /// Clear the trail only.
    ClearTrail,

    /// Switch spheres between solid and wireframe.
    ToggleDrawStyle,

    /// Toggle x-axis-only rotation.
    ToggleXAxisOnly,

    /// Snap every rate to a multiple of pi/60.
    Harmonize,

    /// Set one orbiter's rotation rates.
    SetRates {
        /// Chain index (1 is the first orbiter).
        index: usize,
        /// Rotation in the (x, y) plane, radians per tick.
        rate_x: f32,
        /// Rotation in the (z, y) plane, radians per tick.
        rate_y: f32,
    },

    /// Live radius change; ticks pause until [`CommitRadius`](Self::CommitRadius).
    EditRadius {
        /// Chain index.
        index: usize,
        /// New radius.
        radius: f32,
    },

    /// Finish a live radius edit.
    CommitRadius,

    /// Sphere alpha, 0 hides the spheres.
    SetSphereAlpha(f32),

    /// Ribbon alpha.
    SetRibbonAlpha(f32),

    /// Ribbon half-width.
    SetRibbonWidth(f32),
}

impl OrreryCommand {
    /// Whether this command only moves the camera.
    pub fn is_camera(&self) -> bool {
        matches!(self, Self::RotateCamera { .. } | Self::Zoom { .. })
    }

    /// Apply a scene command. Camera commands are ignored and return
    /// `false`.
    pub fn apply(self, scene: &mut Scene) -> bool {
        match self {
            Self::RotateCamera { .. } | Self::Zoom { .. } => return false,
            Self::Reset => scene.reset(),
            Self::ClearTrail => scene.clear_trail(),
            Self::ToggleDrawStyle => {
                let _ = scene.toggle_draw_style();
            }
            Self::ToggleXAxisOnly => {
                let _ = scene.toggle_x_axis_only();
            }
            Self::Harmonize => scene.harmonize(),
            Self::SetRates {
                index,
                rate_x,
                rate_y,
            } => scene.set_rates(index, rate_x, rate_y),
            Self::EditRadius { index, radius } => {
                scene.edit_radius(index, radius);
            }
            Self::CommitRadius => scene.commit_radius_edit(),
            Self::SetSphereAlpha(alpha) => scene.set_sphere_alpha(alpha),
            Self::SetRibbonAlpha(alpha) => scene.set_ribbon_alpha(alpha),
            Self::SetRibbonWidth(width) => scene.set_ribbon_width(width),
        }
        true
    }
}
