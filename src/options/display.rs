use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::DrawStyle;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spheres", inline)]
#[serde(default)]
/// Sphere appearance.
pub struct DisplayOptions {
    /// Sphere alpha; spheres are not drawn at all at 0.
    #[schemars(title = "Alpha", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub sphere_alpha: f32,
    /// Solid or wireframe spheres.
    #[schemars(title = "Style")]
    pub draw_style: DrawStyle,
    /// Zero every Y rate so orbits stay in the (x, y) plane.
    #[schemars(title = "X Axis Only")]
    pub x_axis_only: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            sphere_alpha: 1.0,
            draw_style: DrawStyle::Solid,
            x_axis_only: false,
        }
    }
}
