//! Aggregated run report.

use clip_cloud::{Extremum, EXTREMA_PER_CLOUD};
use clip_halfspace::{ClipPlane, ClipStats};
use std::fmt;

/// Read-only summary of a pipeline run.
///
/// The report aggregates values computed by the stages; it performs no
/// computation of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Plane the mesh was clipped against.
    pub plane: ClipPlane,

    /// Longest axis-aligned extent of the input mesh.
    pub characteristic_length: f64,

    /// Voxel edge length suggested for downstream downsampling.
    pub suggested_voxel_size: f64,

    /// Vertex and triangle counts before and after clipping.
    pub stats: ClipStats,

    /// Number of points in the analyzed cloud.
    pub cloud_size: usize,

    /// The six axis extrema of the cloud, in (X min, X max, Y min,
    /// Y max, Z min, Z max) order.
    pub extrema: [Extremum; EXTREMA_PER_CLOUD],
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "clipped at {}: {} of {} vertices, {} of {} triangles kept",
            self.plane,
            self.stats.vertices_kept,
            self.stats.vertices_in,
            self.stats.triangles_kept,
            self.stats.triangles_in,
        )?;
        writeln!(
            f,
            "cloud: {} points, characteristic length {:.4}",
            self.cloud_size, self.characteristic_length,
        )?;
        for extremum in &self.extrema {
            writeln!(
                f,
                "  {} {}: index {} at ({:.4}, {:.4}, {:.4})",
                extremum.axis,
                extremum.direction,
                extremum.index,
                extremum.position.x,
                extremum.position.y,
                extremum.position.z,
            )?;
        }
        Ok(())
    }
}
