use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Starting camera placement. The viewer orbits it with mouse drags.
pub struct CameraOptions {
    /// Distance from the eye to the origin along +Z.
    #[schemars(title = "Distance", range(min = 1.0, max = 100.0))]
    pub distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            distance: 8.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
