//! Centralized scene options with TOML preset support.
//!
//! Every tunable of the sphere chain, the trail, the tessellation and the
//! viewer lives here. Options serialize to/from TOML; every section uses
//! `#[serde(default)]` so partial files work.

mod camera;
mod chain;
mod display;
mod geometry;
mod keybindings;
mod timing;
mod trail;

use std::path::Path;

pub use camera::CameraOptions;
pub use chain::{ChainOptions, OrbiterOptions, MAX_RATE};
pub use display::DisplayOptions;
pub use geometry::TessellationOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;
pub use trail::TrailOptions;

use crate::error::OrreryError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Sphere mesh density.
    pub tessellation: TessellationOptions,
    /// Chain layout and rotation rates.
    pub chain: ChainOptions,
    /// Ribbon trail parameters.
    pub trail: TrailOptions,
    /// Sphere appearance.
    pub display: DisplayOptions,
    /// Tick clock.
    pub timing: TimingOptions,
    /// Viewer camera.
    #[schemars(skip)]
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read and
    /// [`OrreryError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, OrreryError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] if serialization fails and
    /// [`OrreryError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::DrawStyle, input::KeyAction};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::from_toml(
            r#"
[keybindings.bindings]
harmonize = "KeyJ"
"#,
        )
        .unwrap();
        assert_eq!(opts.keybindings.lookup("KeyJ"), Some(KeyAction::Harmonize));
        assert_eq!(opts.keybindings.lookup("KeyH"), None);
        assert_eq!(
            Options::default().keybindings.lookup("KeyX"),
            Some(KeyAction::ToggleXAxisOnly)
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[trail]
width = 0.5

[display]
draw_style = "wireframe"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.trail.width, 0.5);
        assert_eq!(opts.trail.capacity, 4000);
        assert_eq!(opts.display.draw_style, DrawStyle::Wireframe);
        assert_eq!(opts.tessellation.segments, 20);
        assert_eq!(opts.timing.tick_interval_ms, 50);
    }

    #[test]
    fn default_chain_matches_reset_radii() {
        let chain = ChainOptions::default();
        assert_eq!(chain.orbiters.len(), 4);
        let radii: Vec<f32> = chain.orbiters.iter().map(|o| o.radius).collect();
        for (i, r) in radii.iter().enumerate() {
            assert!((r - (0.6 - 0.1 * i as f32)).abs() < 1e-6);
        }
    }

    #[test]
    fn orbiters_parse_from_array_of_tables() {
        let toml_str = r"
[chain]
root_radius = 2.0

[[chain.orbiters]]
radius = 0.9
rate_x = 0.1

[[chain.orbiters]]
rate_y = -0.9
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.chain.root_radius, 2.0);
        assert_eq!(opts.chain.orbiters.len(), 2);
        assert_eq!(opts.chain.orbiters[0].rate_y, 0.0);
        assert_eq!(opts.chain.orbiters[1].radius, 0.5);
        assert_eq!(opts.chain.orbiters[1].clamped_rates(), (0.0, -MAX_RATE));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        assert!(matches!(
            Options::from_toml("[trail\nwidth = "),
            Err(OrreryError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("orrery-options-test");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.trail.alpha = 0.25;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["preset".to_owned()]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("tessellation"));
        assert!(props.contains_key("chain"));
        assert!(props.contains_key("trail"));
        assert!(props.contains_key("display"));
        assert!(!props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let trail = &props["trail"]["properties"];
        assert!(trail.get("width").is_some());
        assert!(trail.get("capacity").is_none());
    }
}
