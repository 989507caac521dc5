use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rotation rates are clamped to this magnitude (radians per tick).
pub const MAX_RATE: f32 = 0.4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// One orbiting sphere.
pub struct OrbiterOptions {
    /// Sphere radius.
    #[schemars(title = "Radius", range(min = 0.2, max = 3.0))]
    pub radius: f32,
    /// Rotation in the (x, y) plane, radians per tick.
    #[schemars(title = "Rotate X")]
    pub rate_x: f32,
    /// Rotation in the (z, y) plane, radians per tick.
    #[schemars(title = "Rotate Y")]
    pub rate_y: f32,
}

impl Default for OrbiterOptions {
    fn default() -> Self {
        Self {
            radius: 0.5,
            rate_x: 0.0,
            rate_y: 0.0,
        }
    }
}

impl OrbiterOptions {
    /// Rates clamped to `±MAX_RATE`.
    pub fn clamped_rates(&self) -> (f32, f32) {
        (
            self.rate_x.clamp(-MAX_RATE, MAX_RATE),
            self.rate_y.clamp(-MAX_RATE, MAX_RATE),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Chain", inline)]
#[serde(default)]
/// Layout of the sphere chain. Orbiter `i` circles orbiter `i - 1`; the
/// first circles the root.
pub struct ChainOptions {
    /// Radius of the immobile central body.
    #[schemars(title = "Root Radius", range(min = 0.2, max = 3.0))]
    pub root_radius: f32,
    /// Orbiting spheres in chain order.
    pub orbiters: Vec<OrbiterOptions>,
}

impl ChainOptions {
    /// Radius orbiter `i` (1-based chain index) gets on reset: `0.7 - 0.1 i`,
    /// floored at 0.1.
    pub fn reset_radius(chain_index: usize) -> f32 {
        (0.7 - 0.1 * chain_index as f32).max(0.1)
    }
}

impl Default for ChainOptions {
    fn default() -> Self {
        let rates = [(0.05, 0.02), (-0.08, 0.0), (0.12, -0.03), (0.2, 0.05)];
        Self {
            root_radius: 1.0,
            orbiters: rates
                .iter()
                .enumerate()
                .map(|(i, &(rate_x, rate_y))| OrbiterOptions {
                    radius: Self::reset_radius(i + 1),
                    rate_x,
                    rate_y,
                })
                .collect(),
        }
    }
}
