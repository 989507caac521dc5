use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Simulation clock.
pub struct TimingOptions {
    /// Milliseconds between ticks.
    #[schemars(title = "Tick Interval (ms)", range(min = 1, max = 1000))]
    pub tick_interval_ms: u64,
}

impl TimingOptions {
    /// Tick period as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
        }
    }
}
