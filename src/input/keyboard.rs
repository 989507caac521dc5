use serde::{Deserialize, Serialize};

use crate::engine::command::OrreryCommand;

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset = "KeyR"
/// harmonize = "KeyH"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Clear the trail, zero rotations and restore radii.
    Reset,
    /// Clear the trail only.
    ClearTrail,
    /// Solid / wireframe spheres.
    ToggleDrawStyle,
    /// X-axis-only rotation.
    ToggleXAxisOnly,
    /// Snap rates to multiples of pi/60.
    Harmonize,
}

impl KeyAction {
    /// The parameterless command this action triggers.
    pub fn to_command(self) -> OrreryCommand {
        match self {
            Self::Reset => OrreryCommand::Reset,
            Self::ClearTrail => OrreryCommand::ClearTrail,
            Self::ToggleDrawStyle => OrreryCommand::ToggleDrawStyle,
            Self::ToggleXAxisOnly => OrreryCommand::ToggleXAxisOnly,
            Self::Harmonize => OrreryCommand::Harmonize,
        }
    }
}
