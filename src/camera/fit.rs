//! Fit a camera to an explicit world-space bounding box.
//!
//! Used when the caller already knows the box to frame — a selection, a
//! single object, or a model's combined bounds — instead of deriving one
//! from the sector tree.

use glam::Vec3;

use crate::bounds::Aabb;
use crate::camera::config::SuggestedCameraConfig;
use crate::camera::suggest::{FAR_PLANE_MULTIPLIER, NEAR_PLANE};

/// Default view offset direction (target toward camera): the same 30°
/// pitched three-quarter angle the sector-tree suggestion settles on for a
/// cubic extent, so both entry points produce visually consistent defaults.
const DEFAULT_VIEW_OFFSET: Vec3 =
    Vec3::new(-0.612_372_4, 0.5, -0.612_372_4);

/// Frame a world-space box inside the given vertical field of view.
///
/// The camera is pulled back along the default three-quarter direction far
/// enough that the box's bounding sphere fits a viewport with vertical field
/// of view `fovy_degrees`, then padded by `radius_factor` (1.0 is a tight
/// fit). Clipping planes follow the same rule as the sector-tree suggestion.
#[must_use]
pub fn fit_camera_to_box(
    bounds: &Aabb,
    fovy_degrees: f32,
    radius_factor: f32,
) -> SuggestedCameraConfig {
    let target = bounds.center();
    let radius = bounds.diagonal() * 0.5;
    let distance =
        radius / (fovy_degrees.to_radians() * 0.5).tan() * radius_factor;
    let position = target + DEFAULT_VIEW_OFFSET * distance;
    let far = position.distance(target) * FAR_PLANE_MULTIPLIER;

    SuggestedCameraConfig {
        position,
        target,
        near: NEAR_PLANE,
        far,
    }
}
