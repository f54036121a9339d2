//! Bounding-box analysis and derived quantities.

use clip_types::{Aabb, Bounded, IndexedMesh};
use tracing::debug;

use crate::error::{ClipError, ClipResult};
use crate::plane::ClipPlane;

/// Number of voxels spanning the longest bounding-box extent when the
/// suggested voxel size is used.
pub const VOXELS_ACROSS_MAX_EXTENT: f64 = 15.0;

/// Derived measurements of a mesh, computed once per pipeline run.
///
/// Fixes the cutting plane and the characteristic length used to scale
/// derived quantities (voxel size, marker radius).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsAnalysis {
    /// Axis-aligned bounding box of the mesh.
    pub bounds: Aabb,

    /// Largest bounding-box extent across the three axes.
    pub characteristic_length: f64,

    /// The cutting plane, bisecting the bounding box along X.
    pub plane: ClipPlane,

    /// Size-adaptive voxel edge length for downstream voxelization,
    /// `characteristic_length / 15`.
    pub suggested_voxel_size: f64,
}

impl BoundsAnalysis {
    /// Radius for extremum marker spheres as a fixed proportion of the
    /// characteristic length.
    #[inline]
    #[must_use]
    pub fn marker_radius(&self, ratio: f64) -> f64 {
        self.characteristic_length * ratio
    }
}

/// Analyze a mesh's bounds and derive the cutting plane.
///
/// Computes the componentwise min/max over all vertices in a single O(n)
/// pass, then derives the characteristic length (largest extent) and the
/// X-bisecting cutting plane.
///
/// # Errors
///
/// Returns [`ClipError::EmptyMesh`] if the mesh has no vertices.
///
/// # Example
///
/// ```
/// use clip_types::unit_cube;
/// use clip_halfspace::analyze_bounds;
///
/// let analysis = analyze_bounds(&unit_cube())?;
/// assert_eq!(analysis.characteristic_length, 1.0);
/// assert_eq!(analysis.plane.offset, 0.0);
/// # Ok::<(), clip_halfspace::ClipError>(())
/// ```
pub fn analyze_bounds(mesh: &IndexedMesh) -> ClipResult<BoundsAnalysis> {
    let bounds = mesh.bounds_opt().ok_or(ClipError::EmptyMesh)?;

    let characteristic_length = bounds.max_extent();
    let plane = ClipPlane::bisecting(&bounds);

    debug!(%plane, characteristic_length, "Bounds analysis complete");

    Ok(BoundsAnalysis {
        bounds,
        characteristic_length,
        plane,
        suggested_voxel_size: characteristic_length / VOXELS_ACROSS_MAX_EXTENT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clip_types::{unit_cube, Axis, Point3};

    #[test]
    fn analyze_unit_cube() {
        let analysis = analyze_bounds(&unit_cube()).unwrap();

        assert_relative_eq!(analysis.characteristic_length, 1.0);
        assert_eq!(analysis.plane.axis, Axis::X);
        assert_relative_eq!(analysis.plane.offset, 0.0);
        assert_relative_eq!(analysis.suggested_voxel_size, 1.0 / 15.0);
    }

    #[test]
    fn characteristic_length_is_longest_extent() {
        let mesh = IndexedMesh::from_parts(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 7.0, 3.0)],
            Vec::new(),
        );
        let analysis = analyze_bounds(&mesh).unwrap();

        assert_relative_eq!(analysis.characteristic_length, 7.0);
        // Plane still bisects along X regardless of the longest axis
        assert_eq!(analysis.plane.axis, Axis::X);
        assert_relative_eq!(analysis.plane.offset, 1.0);
    }

    #[test]
    fn marker_radius_proportion() {
        let analysis = analyze_bounds(&unit_cube()).unwrap();
        assert_relative_eq!(analysis.marker_radius(0.02), 0.02);
    }

    #[test]
    fn empty_mesh_is_an_error() {
        let err = analyze_bounds(&IndexedMesh::new());
        assert_eq!(err, Err(ClipError::EmptyMesh));
    }

    #[test]
    fn degenerate_planar_mesh_is_legal() {
        let mesh = IndexedMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            vec![[0, 1, 2]],
        );
        let analysis = analyze_bounds(&mesh).unwrap();
        assert_relative_eq!(analysis.bounds.extent(Axis::Z), 0.0);
    }
}
