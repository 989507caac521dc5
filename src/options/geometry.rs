use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tessellation", inline)]
#[serde(default)]
/// Density of the shared unit sphere mesh.
pub struct TessellationOptions {
    /// Longitude steps around each latitude ring.
    #[schemars(title = "Segments", range(min = 3, max = 128))]
    pub segments: u32,
    /// Latitude rings between the poles.
    #[schemars(title = "Rings", range(min = 2, max = 128))]
    pub rings: u32,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            segments: 20,
            rings: 20,
        }
    }
}
