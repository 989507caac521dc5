use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::trail::ribbon::{DEFAULT_CAPACITY, MOVEMENT_THRESHOLD};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ribbon", inline)]
#[serde(default)]
/// Ribbon trail parameters.
pub struct TrailOptions {
    /// Ring buffer size in vertices (two per accepted step).
    #[schemars(skip)]
    pub capacity: usize,
    /// Half-width of the ribbon as a fraction of the last orbit radius.
    #[schemars(title = "Width", range(min = 0.01, max = 2.0), extend("step" = 0.1))]
    pub width: f32,
    /// Ribbon alpha.
    #[schemars(title = "Alpha", range(min = 0.01, max = 1.0), extend("step" = 0.1))]
    pub alpha: f32,
    /// Steps where neither edge point moved this far are dropped.
    #[schemars(skip)]
    pub movement_threshold: f32,
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            width: 0.2,
            alpha: 1.0,
            movement_threshold: MOVEMENT_THRESHOLD,
        }
    }
}
