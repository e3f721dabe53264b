//! Axis-aligned bounding boxes in model or world space.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Empty box: the identity for [`Aabb::union`]. Any union with it yields
    /// the other box unchanged.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Create a box from its two corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Component-wise size of the box (`max - min`).
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Euclidean length of the extent vector (the main diagonal).
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.extent().length()
    }

    /// Smallest box enclosing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Apply an affine transform to the box.
    ///
    /// Transforms the two corners as points, then rebuilds the enclosing
    /// axis-aligned box from them. Under rotation this tracks the corner
    /// pair rather than all eight corners, matching how averaged sector
    /// bounds are carried into world space.
    #[must_use]
    pub fn transformed(&self, transform: Mat4) -> Self {
        let a = transform.transform_point3(self.min);
        let b = transform.transform_point3(self.max);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_extent() {
        let aabb = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(aabb.extent(), Vec3::new(4.0, 4.0, 4.0));
        assert!((aabb.diagonal() - 48.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn union_encloses_both() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(2.0, -1.0, 0.5), Vec3::new(3.0, 0.5, 4.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(u.max, Vec3::new(3.0, 1.0, 4.0));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let a = Aabb::new(Vec3::new(-2.0, 1.0, 0.0), Vec3::new(5.0, 2.0, 3.0));
        assert_eq!(Aabb::EMPTY.union(&a), a);
        assert_eq!(a.union(&Aabb::EMPTY), a);
    }

    #[test]
    fn translation_moves_both_corners() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let offset = Vec3::new(10.0, -5.0, 2.5);
        let moved = aabb.transformed(Mat4::from_translation(offset));
        assert_eq!(moved.min, offset);
        assert_eq!(moved.max, Vec3::ONE + offset);
    }

    #[test]
    fn rotation_keeps_corners_ordered() {
        // 180° about Y swaps the corners in x and z; the rebuilt box must
        // still have min <= max on every axis.
        let aabb = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 3.0));
        let rotated =
            aabb.transformed(Mat4::from_rotation_y(std::f32::consts::PI));
        assert!(rotated.min.x <= rotated.max.x);
        assert!(rotated.min.y <= rotated.max.y);
        assert!(rotated.min.z <= rotated.max.z);
        assert!((rotated.min.x - -2.0).abs() < 1e-6);
        assert!((rotated.max.z - 0.0).abs() < 1e-6);
    }
}
