//! Clip result types.

use clip_types::{IndexedMesh, Point3};

/// Geometry retained by a clip, tagged by how well-formed it is.
///
/// When at least one triangle survives the clip whole, the retained
/// geometry is a proper mesh with compacted, reindexed vertices. When no
/// triangle survives (every face straddled the plane or lay on the dropped
/// side), the retained vertices are returned as a bare point set;
/// connectivity is never reconstructed from a point set.
#[derive(Debug, Clone, PartialEq)]
pub enum ClippedGeometry {
    /// Retained triangles over a compacted vertex array.
    Mesh(IndexedMesh),

    /// Retained vertex positions with no connectivity.
    PointSet(Vec<Point3<f64>>),
}

impl ClippedGeometry {
    /// Number of retained vertex positions, whichever variant this is.
    #[must_use]
    pub fn retained_vertex_count(&self) -> usize {
        match self {
            Self::Mesh(mesh) => mesh.vertex_count(),
            Self::PointSet(points) => points.len(),
        }
    }

    /// The retained mesh, if the clip produced one.
    #[must_use]
    pub const fn as_mesh(&self) -> Option<&IndexedMesh> {
        match self {
            Self::Mesh(mesh) => Some(mesh),
            Self::PointSet(_) => None,
        }
    }

    /// Check whether the clip degraded to a point set.
    #[must_use]
    pub const fn is_point_set(&self) -> bool {
        matches!(self, Self::PointSet(_))
    }
}

/// Per-clip counts, reported for observability.
///
/// These counts never drive control flow; they feed the pipeline report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipStats {
    /// Vertices in the input mesh.
    pub vertices_in: usize,
    /// Vertices on the retained side of the plane.
    pub vertices_kept: usize,
    /// Triangles in the input mesh.
    pub triangles_in: usize,
    /// Triangles fully on the retained side.
    pub triangles_kept: usize,
}

impl ClipStats {
    /// Vertices removed by the clip.
    #[inline]
    #[must_use]
    pub const fn vertices_removed(&self) -> usize {
        self.vertices_in - self.vertices_kept
    }
}

/// Result of clipping a mesh against a plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipOutput {
    /// The retained geometry.
    pub geometry: ClippedGeometry,

    /// Counts for the pipeline report.
    pub stats: ClipStats,
}
