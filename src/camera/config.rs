//! Suggested camera configuration value type.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// A suggested camera placement with clipping planes.
///
/// Immutable value: recompute a fresh configuration when the model or its
/// transform changes rather than patching an old one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestedCameraConfig {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl SuggestedCameraConfig {
    /// Unit vector from the camera toward the target.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Serialize to JSON, for shareable saved-view state.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::CameraState`] if serialization fails.
    pub fn to_json(&self) -> Result<String, VantageError> {
        serde_json::to_string(self)
            .map_err(|e| VantageError::CameraState(e.to_string()))
    }

    /// Deserialize from JSON produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::CameraState`] if the string is not a valid
    /// camera configuration.
    pub fn from_json(json: &str) -> Result<Self, VantageError> {
        serde_json::from_str(json)
            .map_err(|e| VantageError::CameraState(e.to_string()))
    }
}
