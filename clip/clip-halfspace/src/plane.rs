//! Axis-aligned cutting plane.

use clip_types::{Aabb, Axis, Point3};

use std::fmt;

/// An axis-aligned cutting plane.
///
/// The plane is perpendicular to one coordinate axis at a scalar offset
/// along it. Geometry with `component >= offset` lies on the retained side;
/// the half-space is closed, so a point exactly on the plane is retained.
///
/// A plane is derived once per mesh and is immutable thereafter.
///
/// # Example
///
/// ```
/// use clip_types::{Aabb, Axis, Point3};
/// use clip_halfspace::ClipPlane;
///
/// let bounds = Aabb::new(Point3::new(-2.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0));
/// let plane = ClipPlane::bisecting(&bounds);
///
/// assert_eq!(plane.axis, Axis::X);
/// assert_eq!(plane.offset, 1.0);
/// assert!(plane.retains(&Point3::new(1.0, 0.5, 0.5))); // on the plane
/// assert!(!plane.retains(&Point3::new(0.5, 0.5, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlane {
    /// The axis the plane is perpendicular to.
    pub axis: Axis,
    /// The scalar offset of the plane along that axis.
    pub offset: f64,
}

impl ClipPlane {
    /// Create a plane perpendicular to `axis` at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(axis: Axis, offset: f64) -> Self {
        Self { axis, offset }
    }

    /// Derive the canonical cutting plane for a bounding box.
    ///
    /// The plane always bisects the box along the X axis, at the exact
    /// midpoint of the X extent. The fixed axis is a deliberate
    /// simplification; the clip always splits the model in half along X.
    #[inline]
    #[must_use]
    pub fn bisecting(bounds: &Aabb) -> Self {
        Self::new(Axis::X, f64::midpoint(bounds.min.x, bounds.max.x))
    }

    /// Check whether a point lies on the retained side of the plane.
    ///
    /// The retained half-space is closed: a point exactly on the plane is
    /// retained.
    #[inline]
    #[must_use]
    pub fn retains(&self, point: &Point3<f64>) -> bool {
        self.axis.component(point) >= self.offset
    }
}

impl fmt::Display for ClipPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:.3}", self.axis, self.offset)
    }
}
