//! Traits shared by geometry containers.

use nalgebra::Point3;

use crate::Aabb;

/// Trait for geometry that can compute an axis-aligned bounding box.
pub trait Bounded {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if there are no positions; a bounding box is
    /// undefined for empty geometry.
    fn bounds(&self) -> Aabb;

    /// Compute the bounding box, returning `None` if empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() {
            None
        } else {
            Some(b)
        }
    }

    /// Get the center of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
