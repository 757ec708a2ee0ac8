//! Runtime options with TOML preset support.
//!
//! Camera controls and display toggles are consolidated here. Options
//! serialize to/from TOML so a viewer setup can be saved as a preset and
//! loaded back, with any missing field taking its default.

mod camera;
mod display;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolsketchError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Display toggles.
    pub display: DisplayOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`MolsketchError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, MolsketchError> {
        toml::from_str(content)
            .map_err(|e| MolsketchError::OptionsParse(e.to_string()))
    }

    /// Serialize to pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// [`MolsketchError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, MolsketchError> {
        toml::to_string_pretty(self)
            .map_err(|e| MolsketchError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O failures and malformed TOML.
    pub fn load(path: &Path) -> Result<Self, MolsketchError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// I/O failures and serialization errors.
    pub fn save(&self, path: &Path) -> Result<(), MolsketchError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("saved options to {}", path.display());
        Ok(())
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
    use crate::renderer::RenderStyle;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[display]
render_style = "ball-and-stick"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.display.render_style, RenderStyle::BallAndStick);
        // Everything else should be default
        assert_eq!(opts.camera.rotate_speed, 0.01);
        assert_eq!(opts.camera.max_zoom, 3.0);
        assert!(!opts.display.show_overlay);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[camera\nzoom_step = ").unwrap_err();
        assert!(matches!(err, MolsketchError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir().join(format!(
            "molsketch-presets-{}",
            std::process::id()
        ));
        let mut opts = Options::default();
        opts.camera.zoom_step = 0.25;
        opts.display.show_overlay = true;
        opts.save(&dir.join("close-up.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::load(&dir.join("close-up.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), ["close-up", "default"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/molsketch.toml"))
            .unwrap_err();
        assert!(matches!(err, MolsketchError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));

        // Camera exposes controls but not the lens internals
        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotate_speed").is_some());
        assert!(camera.get("zoom_step").is_some());
        assert!(camera.get("initial_rotation").is_none());
        assert!(camera.get("structure_distance").is_none());
    }
}
