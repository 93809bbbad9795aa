//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera placement and sensitivities, display
//! toggles, keybindings) are consolidated here. Options serialize
//! to/from TOML; partial files fill the remaining fields with defaults.

mod camera;
mod display;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
use serde::{Deserialize, Serialize};

use crate::error::MiraError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera placement, projection, and gesture sensitivities.
    pub camera: CameraOptions,
    /// Grid/axes visibility and geometry, background color.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MiraError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, MiraError> {
        let content = std::fs::read_to_string(path).map_err(MiraError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MiraError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MiraError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), MiraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MiraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MiraError::Io)?;
        }
        std::fs::write(path, content).map_err(MiraError::Io)
    }
}

#[cfg(test)]
mod tests {
    use crate::camera::{InteractionMode, ProjectionMode};
    use crate::engine::command::MiraCommand;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
fov_y = 60.0
projection = "orthographic"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.fov_y, 60.0);
        assert_eq!(opts.camera.projection, ProjectionMode::Orthographic);
        // Everything else should be default
        assert_eq!(opts.camera.interaction, InteractionMode::Target);
        assert_eq!(opts.camera.near_plane, 1.0);
        assert!(opts.display.show_grid);
        assert_eq!(opts.display.grid_step, 100.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Digit0"),
            Some(MiraCommand::ResetCamera)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyA"),
            Some(MiraCommand::ToggleAxes)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn camera_options_produce_a_valid_config() {
        let config = CameraOptions::default().to_config();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.fov_y, 45.0);
        assert_eq!(
            config.initial_position,
            glam::Vec3::new(900.0, 200.0, 100.0)
        );
        assert_eq!(config.world_up, glam::Vec3::new(0.0, 0.0, 1.0));
    }
}
