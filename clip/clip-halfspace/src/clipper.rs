//! Conservative half-space clipping of an indexed mesh.

// Mesh indices don't overflow u32 in practice
#![allow(clippy::cast_possible_truncation)]

use clip_types::IndexedMesh;
use tracing::{debug, info};

use crate::error::{ClipError, ClipResult};
use crate::plane::ClipPlane;
use crate::result::{ClipOutput, ClipStats, ClippedGeometry};

/// Sentinel in the index remap table for a dropped vertex.
const DROPPED: u32 = u32::MAX;

/// Clip a mesh against an axis-aligned plane, retaining the closed
/// positive half-space.
///
/// Vertices with `component >= plane.offset` are retained (a vertex exactly
/// on the plane is never dropped). A triangle is retained only if **all
/// three** of its vertices are retained; triangles straddling the plane are
/// discarded whole rather than re-tessellated.
///
/// Retained vertices are compacted in original order into a new vertex
/// array, and surviving triangles are remapped onto it. If no triangle
/// survives, the result degrades to a [`ClippedGeometry::PointSet`] of the
/// retained positions.
///
/// The input mesh is read-only; all retained geometry is newly allocated.
///
/// # Errors
///
/// Returns [`ClipError::EmptyMesh`] if the mesh has no vertices.
///
/// # Example
///
/// ```
/// use clip_types::unit_cube;
/// use clip_halfspace::{analyze_bounds, clip_mesh, ClippedGeometry};
///
/// let cube = unit_cube();
/// let plane = analyze_bounds(&cube)?.plane;
/// let output = clip_mesh(&cube, &plane)?;
///
/// // The +X half of the cube survives as a proper mesh
/// assert!(matches!(output.geometry, ClippedGeometry::Mesh(_)));
/// assert_eq!(output.stats.vertices_kept, 4);
/// # Ok::<(), clip_halfspace::ClipError>(())
/// ```
pub fn clip_mesh(mesh: &IndexedMesh, plane: &ClipPlane) -> ClipResult<ClipOutput> {
    if mesh.vertices.is_empty() {
        return Err(ClipError::EmptyMesh);
    }

    // Classify vertices and build the old-index -> new-index remap table
    // in one pass, collecting retained positions in original order.
    let mut remap = vec![DROPPED; mesh.vertices.len()];
    let mut retained = Vec::new();
    for (index, vertex) in mesh.vertices.iter().enumerate() {
        if plane.retains(vertex) {
            remap[index] = retained.len() as u32;
            retained.push(*vertex);
        }
    }

    // A triangle survives only when all three corners survive.
    let mut faces = Vec::new();
    for &[a, b, c] in &mesh.faces {
        let (a, b, c) = (remap[a as usize], remap[b as usize], remap[c as usize]);
        if a != DROPPED && b != DROPPED && c != DROPPED {
            faces.push([a, b, c]);
        }
    }

    let stats = ClipStats {
        vertices_in: mesh.vertex_count(),
        vertices_kept: retained.len(),
        triangles_in: mesh.face_count(),
        triangles_kept: faces.len(),
    };

    let geometry = if faces.is_empty() {
        debug!(
            vertices_kept = stats.vertices_kept,
            "No triangle survived the clip, degrading to a point set"
        );
        ClippedGeometry::PointSet(retained)
    } else {
        ClippedGeometry::Mesh(IndexedMesh::from_parts(retained, faces))
    };

    info!(
        %plane,
        vertices_in = stats.vertices_in,
        vertices_kept = stats.vertices_kept,
        triangles_in = stats.triangles_in,
        triangles_kept = stats.triangles_kept,
        "Clip complete"
    );

    Ok(ClipOutput { geometry, stats })
}
