//! Pipeline orchestration.

use crate::error::PipelineResult;
use crate::markers::{extremum_markers, Marker};
use crate::params::PipelineParams;
use crate::report::PipelineReport;
use clip_cloud::{colorize_by_axis, locate_extrema};
use clip_halfspace::{analyze_bounds, clip_mesh, ClippedGeometry};
use clip_types::{IndexedMesh, PointCloud};
use tracing::info;

/// Everything a pipeline run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// The mesh clipped to the retained half-space, or the surviving
    /// points when no triangle survived.
    pub clipped: ClippedGeometry,

    /// The input cloud with a fresh gradient color per point.
    pub colored_cloud: PointCloud,

    /// One colored sphere per cloud extremum, six in total.
    pub markers: Vec<Marker>,

    /// Aggregated counts and derived quantities for the run.
    pub report: PipelineReport,
}

/// Run the full clip-and-analyze pipeline.
///
/// Stages, in order:
/// 1. Analyze the mesh bounds and derive the bisecting plane.
/// 2. Clip the mesh against the plane.
/// 3. Locate the six axis extrema of the cloud.
/// 4. Colorize the cloud along the gradient axis.
/// 5. Build one marker sphere per extremum.
///
/// The cloud stages operate on the input cloud, not on the clipped
/// geometry. The first stage error aborts the run.
///
/// # Errors
///
/// Returns an error if the mesh has no vertices or the cloud has no
/// points.
///
/// # Example
///
/// ```
/// use clip_pipeline::{run_pipeline, PipelineParams};
/// use clip_types::{unit_cube, PointCloud};
///
/// let cube = unit_cube();
/// let cloud = PointCloud::from_mesh(&cube);
/// let output = run_pipeline(&cube, &cloud, &PipelineParams::default())?;
///
/// assert_eq!(output.markers.len(), 6);
/// assert_eq!(output.colored_cloud.len(), cloud.len());
/// # Ok::<(), clip_pipeline::PipelineError>(())
/// ```
pub fn run_pipeline(
    mesh: &IndexedMesh,
    cloud: &PointCloud,
    params: &PipelineParams,
) -> PipelineResult<PipelineOutput> {
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        points = cloud.len(),
        "starting pipeline run"
    );

    let analysis = analyze_bounds(mesh)?;
    let clip = clip_mesh(mesh, &analysis.plane)?;

    let extrema = locate_extrema(cloud)?;
    let colored_cloud = colorize_by_axis(cloud, params.gradient_axis)?;

    let radius = analysis.marker_radius(params.marker_radius_ratio);
    let markers = extremum_markers(&extrema, radius, params.marker_subdivisions);

    let report = PipelineReport {
        plane: analysis.plane,
        characteristic_length: analysis.characteristic_length,
        suggested_voxel_size: analysis.suggested_voxel_size,
        stats: clip.stats,
        cloud_size: cloud.len(),
        extrema,
    };

    info!(
        vertices_kept = report.stats.vertices_kept,
        triangles_kept = report.stats.triangles_kept,
        point_set = clip.geometry.is_point_set(),
        "pipeline run complete"
    );

    Ok(PipelineOutput {
        clipped: clip.geometry,
        colored_cloud,
        markers,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clip_halfspace::ClipError;
    use clip_types::{unit_cube, Axis, PointCloud};

    #[test]
    fn empty_mesh_is_rejected() {
        let cloud = PointCloud::from_mesh(&unit_cube());
        let result = run_pipeline(&IndexedMesh::new(), &cloud, &PipelineParams::default());
        assert!(matches!(
            result,
            Err(crate::PipelineError::Clip(ClipError::EmptyMesh))
        ));
    }

    #[test]
    fn empty_cloud_is_rejected() {
        let result = run_pipeline(
            &unit_cube(),
            &PointCloud::new(),
            &PipelineParams::default(),
        );
        assert!(matches!(result, Err(crate::PipelineError::Cloud(_))));
    }

    #[test]
    fn report_mirrors_stage_outputs() {
        let cube = unit_cube();
        let cloud = PointCloud::from_mesh(&cube);
        let output = run_pipeline(&cube, &cloud, &PipelineParams::default()).unwrap();

        assert_eq!(output.report.stats.vertices_in, 8);
        assert_eq!(output.report.stats.triangles_in, 12);
        assert_eq!(output.report.cloud_size, 8);
        assert_eq!(output.report.characteristic_length, 1.0);
        assert_eq!(output.report.plane.axis, Axis::X);
        assert_eq!(output.report.plane.offset, 0.0);
    }

    #[test]
    fn gradient_axis_param_is_honored() {
        let cube = unit_cube();
        let cloud = PointCloud::from_mesh(&cube);

        let params = PipelineParams::default().with_gradient_axis(Axis::X);
        let output = run_pipeline(&cube, &cloud, &params).unwrap();

        // Red channel tracks the X coordinate: min X maps to 0, max X to 1.
        for (p, c) in output
            .colored_cloud
            .positions()
            .iter()
            .zip(output.colored_cloud.colors())
        {
            let expected = if p.x > 0.0 { 1.0 } else { 0.0 };
            assert_eq!(c.r, expected);
        }
    }
}
