//! Default camera suggestion from a sector tree.
//!
//! The suggestion is anchored on the *averaged* bounds of the sector tree,
//! not the root's own box. Sector trees are unbalanced: many small leaf
//! sectors cluster where geometry is dense, while a few large internal
//! sectors span mostly empty space. Averaging every sector's corners pulls
//! the framing box toward the dense region, which gives a far better default
//! view than the (often huge and sparse) root box would.

use glam::{Mat4, Vec2, Vec3};

use crate::bounds::Aabb;
use crate::camera::config::SuggestedCameraConfig;
use crate::sector::{visit_depth_first, SpatialNode};

/// Fixed near clipping plane distance, in world units.
pub const NEAR_PLANE: f32 = 0.1;

/// Far plane as a multiple of the camera-to-target distance. Generous to
/// avoid far-clipping artifacts across typical model scales.
pub const FAR_PLANE_MULTIPLIER: f32 = 12.0;

/// Sine of the 30° pitch limit. The suggested view is never steeper than
/// 30° above horizontal; a top-down default view is unusable.
const MAX_PITCH_SIN: f32 = 0.5;

/// Cosine of the 30° pitch limit.
const MAX_PITCH_COS: f32 = 0.866_025_4;

/// Below this horizontal length the view direction counts as vertical and
/// the diagonal fallback kicks in.
const HORIZONTAL_EPSILON: f32 = 1e-6;

/// Average of all sector bounding boxes in the tree.
///
/// Visits every node exactly once and averages the minimum and maximum
/// corners separately. Deliberately *not* the union box: see the module
/// docs for why the average frames dense models better. Traversal order
/// only affects floating-point summation order, not the result up to
/// rounding.
#[must_use]
pub fn averaged_bounds<N: SpatialNode>(root: &N) -> Aabb {
    let mut sum_min = Vec3::ZERO;
    let mut sum_max = Vec3::ZERO;
    let mut count = 0u32;
    visit_depth_first(root, |node| {
        let bounds = node.bounds();
        sum_min += bounds.min;
        sum_max += bounds.max;
        count += 1;
    });
    // The root itself is always visited, so count >= 1.
    let n = count as f32;
    Aabb::new(sum_min / n, sum_max / n)
}

/// Suggest a default camera configuration for a model.
///
/// Frames the averaged sector bounds (carried into world space by
/// `model_transform`) from a three-quarter view pitched no more than 30°
/// above horizontal, and derives clipping planes from the resulting
/// camera-to-target distance.
///
/// Total over any tree and affine transform. A model whose averaged extent
/// has a zero component yields non-finite values in the returned position;
/// callers that admit zero-volume models must validate upstream.
pub fn suggest_camera_config<N: SpatialNode>(
    root: &N,
    model_transform: Mat4,
) -> SuggestedCameraConfig {
    let bounds = averaged_bounds(root).transformed(model_transform);
    let target = bounds.center();
    let extent = bounds.extent();

    // Reciprocal weighting compresses the viewing angle along the most
    // elongated axis, favoring the model's widest spread.
    let mut direction = Vec3::new(
        -1.0 / extent.x,
        1.0 / extent.y,
        -1.0 / extent.z,
    )
    .normalize();

    if direction.y >= MAX_PITCH_SIN {
        let mut horizontal = Vec2::new(direction.x, direction.z);
        if horizontal.length() < HORIZONTAL_EPSILON {
            // Near-vertical direction: fall back to a fixed diagonal
            // rather than normalizing a zero vector.
            horizontal = Vec2::ONE;
        }
        horizontal = horizontal.normalize() * MAX_PITCH_COS;
        direction = Vec3::new(horizontal.x, MAX_PITCH_SIN, horizontal.y);
    }

    let position = target + direction * extent.length();
    let far = position.distance(target) * FAR_PLANE_MULTIPLIER;

    log::debug!(
        "suggested camera: position {position}, target {target}, far {far}"
    );

    SuggestedCameraConfig {
        position,
        target,
        near: NEAR_PLANE,
        far,
    }
}
