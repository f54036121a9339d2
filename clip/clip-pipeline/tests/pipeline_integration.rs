//! End-to-end pipeline test on the unit cube.
//!
//! The cube spans [-0.5, 0.5] on every axis, so every stage output is
//! known exactly: the bisecting plane is X = 0, the +X half keeps four
//! vertices and the two +X face triangles, and each extremum lands on
//! a cube corner.

use approx::assert_relative_eq;
use clip_halfspace::ClippedGeometry;
use clip_pipeline::{run_pipeline, PipelineOutput, PipelineParams};
use clip_types::{unit_cube, Axis, Color, PointCloud};

fn run_default() -> PipelineOutput {
    let cube = unit_cube();
    let cloud = PointCloud::from_mesh(&cube);
    run_pipeline(&cube, &cloud, &PipelineParams::default()).unwrap()
}

#[test]
fn cube_clips_to_positive_x_face() {
    let output = run_default();

    let ClippedGeometry::Mesh(mesh) = &output.clipped else {
        panic!("cube clip should keep triangles");
    };

    // The four x == +0.5 corners survive, compacted in original order.
    assert_eq!(mesh.vertex_count(), 4);
    for v in &mesh.vertices {
        assert_eq!(v.x, 0.5);
    }

    // Only the +X face's two triangles have all vertices retained.
    assert_eq!(mesh.faces, vec![[0, 1, 3], [0, 3, 2]]);
}

#[test]
fn report_counts_are_exact() {
    let output = run_default();
    let report = &output.report;

    assert_eq!(report.plane.axis, Axis::X);
    assert_eq!(report.plane.offset, 0.0);
    assert_eq!(report.characteristic_length, 1.0);
    assert_relative_eq!(report.suggested_voxel_size, 1.0 / 15.0);

    assert_eq!(report.stats.vertices_in, 8);
    assert_eq!(report.stats.vertices_kept, 4);
    assert_eq!(report.stats.vertices_removed(), 4);
    assert_eq!(report.stats.triangles_in, 12);
    assert_eq!(report.stats.triangles_kept, 2);
    assert_eq!(report.cloud_size, 8);
}

#[test]
fn extrema_land_on_cube_corners() {
    let output = run_default();

    for extremum in &output.report.extrema {
        let component = extremum.axis.component(&extremum.position);
        assert_eq!(component.abs(), 0.5);
    }

    // Ties resolve to the first occurrence: vertex 0 is the (-,-,-)
    // corner, so it wins all three minima.
    assert_eq!(output.report.extrema[0].index, 0);
    assert_eq!(output.report.extrema[2].index, 0);
    assert_eq!(output.report.extrema[4].index, 0);
}

#[test]
fn cloud_gradient_runs_bottom_blue_to_top_red() {
    let output = run_default();
    let cloud = &output.colored_cloud;

    assert_eq!(cloud.len(), 8);
    assert!(cloud.has_colors());

    for (p, c) in cloud.positions().iter().zip(cloud.colors()) {
        if p.z > 0.0 {
            assert_eq!(c.channels(), [1.0, 0.0, 0.0]);
        } else {
            assert_eq!(c.channels(), [0.0, 0.0, 1.0]);
        }
    }
}

#[test]
fn markers_match_extrema() {
    let output = run_default();
    assert_eq!(output.markers.len(), 6);

    let expected_colors = [
        Color::RED,
        Color::RED,
        Color::GREEN,
        Color::GREEN,
        Color::BLUE,
        Color::BLUE,
    ];

    let radius = output.report.characteristic_length * 0.02;
    for (marker, (extremum, expected)) in output
        .markers
        .iter()
        .zip(output.report.extrema.iter().zip(expected_colors))
    {
        assert_eq!(marker.color, expected);
        for v in &marker.mesh.vertices {
            assert_relative_eq!((v - extremum.position).norm(), radius, epsilon = 1e-12);
        }
    }
}

#[test]
fn straddling_faces_degenerate_to_point_set() {
    // Keep only the bottom face's two triangles. Both reference vertex
    // 0 on the negative side of the bisecting plane, so no triangle
    // survives the clip even though four vertices do.
    let mut mesh = unit_cube();
    mesh.faces.retain(|f| *f == [0, 2, 1] || *f == [0, 3, 2]);

    let cloud = PointCloud::from_mesh(&mesh);
    let output = run_pipeline(&mesh, &cloud, &PipelineParams::default()).unwrap();

    match output.clipped {
        ClippedGeometry::PointSet(points) => {
            assert_eq!(points.len(), 4);
            for p in &points {
                assert_eq!(p.x, 0.5);
            }
        }
        ClippedGeometry::Mesh(_) => panic!("no triangle should survive"),
    }
    assert_eq!(output.report.stats.triangles_kept, 0);
}
