//! Framing options with TOML preset support.
//!
//! Parameters for the explicit box fit. Presets serialize to/from TOML so
//! viewer applications can ship or persist framing styles. The sector-tree
//! suggestion intentionally has no options: its pitch limit and clip-plane
//! rule are contractual constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::camera::config::SuggestedCameraConfig;
use crate::camera::fit::fit_camera_to_box;
use crate::error::VantageError;

/// Parameters for [`fit_camera_to_box`]. Uses `#[serde(default)]` so a
/// partial TOML file overriding a single field works correctly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Padding multiplier on the fitted bounding-sphere distance (1.0 is a
    /// tight fit).
    pub radius_factor: f32,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            radius_factor: 1.5,
        }
    }
}

impl FramingOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] if the file cannot be read, or
    /// [`VantageError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::OptionsParse`] if serialization fails, or
    /// [`VantageError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Fit a camera to `bounds` using these options.
    #[must_use]
    pub fn fit(&self, bounds: &Aabb) -> SuggestedCameraConfig {
        fit_camera_to_box(bounds, self.fovy, self.radius_factor)
    }
}
