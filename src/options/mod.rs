//! Camera configuration with TOML preset support.
//!
//! Tuning parameters, key bindings and the starting view are consolidated
//! here. Options serialize to/from TOML so an application can ship camera
//! presets alongside its other settings.

mod camera;
mod controls;
mod view;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::InitialView;

use crate::error::CameraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Movement, look and zoom tuning.
    pub camera: CameraOptions,
    /// Keyboard bindings.
    #[schemars(skip)]
    pub controls: ControlBindings,
    /// Starting pose, mode and projection.
    pub initial: InitialView,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CameraError> {
        toml::from_str(content).map_err(|e| CameraError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
