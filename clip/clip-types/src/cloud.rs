//! Point cloud with optional per-point colors.

use nalgebra::Point3;

use crate::{Aabb, Bounded, Color, IndexedMesh};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A collection of unconnected 3D positions with optional colors.
///
/// The color buffer is parallel-indexed to the positions: a cloud either
/// carries **zero colors or exactly one color per point**. Fields are
/// private so this invariant cannot be broken from outside; all mutation
/// goes through methods that preserve it.
///
/// Clouds are treated as immutable inputs by the analysis pipeline; every
/// transformation returns a new cloud instead of mutating in place.
///
/// # Example
///
/// ```
/// use clip_types::{Color, Point3, PointCloud};
///
/// let mut cloud = PointCloud::from_positions(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ]);
/// assert_eq!(cloud.len(), 2);
/// assert!(!cloud.has_colors());
///
/// cloud.paint_uniform(Color::GRAY);
/// assert!(cloud.has_colors());
/// assert_eq!(cloud.colors().len(), cloud.len());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloud {
    positions: Vec<Point3<f64>>,
    colors: Vec<Color>,
}

impl PointCloud {
    /// Create an empty point cloud.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Create a point cloud with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::new(),
        }
    }

    /// Create an uncolored cloud from positions.
    #[inline]
    #[must_use]
    pub const fn from_positions(positions: Vec<Point3<f64>>) -> Self {
        Self {
            positions,
            colors: Vec::new(),
        }
    }

    /// Create a colored cloud from parallel position and color buffers.
    ///
    /// Returns `None` if the buffer lengths differ (unless `colors` is
    /// empty, which denotes an uncolored cloud).
    #[must_use]
    pub fn try_from_parts(positions: Vec<Point3<f64>>, colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() || colors.len() == positions.len() {
            Some(Self { positions, colors })
        } else {
            None
        }
    }

    /// Create a cloud by assigning each position a color.
    ///
    /// The color buffer is built alongside the positions, so the
    /// color-per-point invariant holds by construction.
    ///
    /// # Example
    ///
    /// ```
    /// use clip_types::{Color, Point3, PointCloud};
    ///
    /// let positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 2.0)];
    /// let cloud = PointCloud::from_positions_with(positions, |p| {
    ///     Color::new(p.z / 2.0, 0.0, 1.0 - p.z / 2.0)
    /// });
    /// assert!(cloud.has_colors());
    /// ```
    #[must_use]
    pub fn from_positions_with<F>(positions: Vec<Point3<f64>>, mut color_for: F) -> Self
    where
        F: FnMut(&Point3<f64>) -> Color,
    {
        let colors = positions.iter().map(&mut color_for).collect();
        Self { positions, colors }
    }

    /// Create an uncolored cloud from the vertices of a mesh.
    #[must_use]
    pub fn from_mesh(mesh: &IndexedMesh) -> Self {
        Self::from_positions(mesh.vertices.clone())
    }

    /// Get the number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the cloud has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if the cloud carries one color per point.
    #[inline]
    #[must_use]
    pub fn has_colors(&self) -> bool {
        !self.positions.is_empty() && self.colors.len() == self.positions.len()
    }

    /// The point positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// The per-point colors; empty for an uncolored cloud.
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Append a point.
    ///
    /// On a colored cloud the default color is appended alongside to keep
    /// the color buffer parallel.
    pub fn push(&mut self, position: Point3<f64>) {
        self.positions.push(position);
        if !self.colors.is_empty() {
            self.colors.push(Color::default());
        }
    }

    /// Assign the same color to every point.
    pub fn paint_uniform(&mut self, color: Color) {
        self.colors = vec![color; self.positions.len()];
    }
}

impl Bounded for PointCloud {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_positions() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-1.0, 0.5, 2.0),
        ]
    }

    #[test]
    fn uncolored_cloud() {
        let cloud = PointCloud::from_positions(sample_positions());
        assert_eq!(cloud.len(), 3);
        assert!(!cloud.has_colors());
        assert!(cloud.colors().is_empty());
    }

    #[test]
    fn try_from_parts_rejects_mismatch() {
        let colors = vec![Color::RED; 2];
        assert!(PointCloud::try_from_parts(sample_positions(), colors).is_none());
    }

    #[test]
    fn try_from_parts_accepts_matching_or_empty() {
        let matching = vec![Color::RED; 3];
        assert!(PointCloud::try_from_parts(sample_positions(), matching).is_some());
        assert!(PointCloud::try_from_parts(sample_positions(), Vec::new()).is_some());
    }

    #[test]
    fn from_positions_with_colors_every_point() {
        let cloud = PointCloud::from_positions_with(sample_positions(), |_| Color::BLUE);
        assert!(cloud.has_colors());
        assert!(cloud.colors().iter().all(|&c| c == Color::BLUE));
    }

    #[test]
    fn paint_uniform() {
        let mut cloud = PointCloud::from_positions(sample_positions());
        cloud.paint_uniform(Color::GRAY);
        assert!(cloud.has_colors());
        assert!(cloud.colors().iter().all(|&c| c == Color::GRAY));
    }

    #[test]
    fn push_preserves_color_invariant() {
        let mut cloud = PointCloud::from_positions(sample_positions());
        cloud.push(Point3::origin());
        assert!(!cloud.has_colors());

        cloud.paint_uniform(Color::RED);
        cloud.push(Point3::origin());
        assert!(cloud.has_colors());
        assert_eq!(cloud.colors().len(), cloud.len());
    }

    #[test]
    fn cloud_bounds() {
        let cloud = PointCloud::from_positions(sample_positions());
        let bounds = cloud.bounds();
        assert!((bounds.min.x - (-1.0)).abs() < f64::EPSILON);
        assert!((bounds.max.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_cloud_bounds() {
        let cloud = PointCloud::new();
        assert!(cloud.bounds().is_empty());
        assert!(cloud.bounds_opt().is_none());
    }

    #[test]
    fn from_mesh_copies_vertices() {
        let mesh = IndexedMesh::from_parts(sample_positions(), vec![[0, 1, 2]]);
        let cloud = PointCloud::from_mesh(&mesh);
        assert_eq!(cloud.len(), mesh.vertex_count());
        assert!(!cloud.has_colors());
    }
}
