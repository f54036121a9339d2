//! Extremum marker generation.
//!
//! Each extremum is visualized as a small icosphere centered on the
//! extremal point, colored by the axis it belongs to (X red, Y green,
//! Z blue).

use clip_cloud::Extremum;
use clip_types::{Axis, Color, IndexedMesh, Point3};
use std::collections::HashMap;
use tracing::debug;

/// A colored sphere mesh marking one extremum.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Icosphere mesh positioned at the extremum.
    pub mesh: IndexedMesh,

    /// Flat color for the whole sphere.
    pub color: Color,
}

/// Marker color for the given axis: X red, Y green, Z blue.
#[must_use]
pub const fn marker_color(axis: Axis) -> Color {
    match axis {
        Axis::X => Color::RED,
        Axis::Y => Color::GREEN,
        Axis::Z => Color::BLUE,
    }
}

/// Build one marker sphere per extremum.
///
/// Every sphere shares the same radius and subdivision level; one
/// template icosphere is built and then translated and scaled per
/// extremum.
#[must_use]
pub fn extremum_markers(extrema: &[Extremum], radius: f64, subdivisions: u32) -> Vec<Marker> {
    let template = unit_icosphere(subdivisions);
    debug!(
        count = extrema.len(),
        radius,
        sphere_faces = template.face_count(),
        "generating extremum markers"
    );

    extrema
        .iter()
        .map(|extremum| {
            let mut mesh = template.clone();
            for vertex in &mut mesh.vertices {
                *vertex = extremum.position + vertex.coords * radius;
            }
            Marker {
                mesh,
                color: marker_color(extremum.axis),
            }
        })
        .collect()
}

/// Create a unit-radius icosphere centered at the origin.
///
/// Starts from a regular icosahedron and subdivides each face into
/// four, projecting new vertices onto the unit sphere. Level 0 has
/// 20 faces; each level quadruples the face count.
#[must_use]
pub fn unit_icosphere(subdivisions: u32) -> IndexedMesh {
    let mut mesh = IndexedMesh::new();

    let phi = f64::midpoint(1.0, 5.0_f64.sqrt());
    let a = 1.0;
    let b = 1.0 / phi;

    let ico_verts = [
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];

    for v in &ico_verts {
        let len = v[2].mul_add(v[2], v[0].mul_add(v[0], v[1] * v[1])).sqrt();
        mesh.vertices
            .push(Point3::new(v[0] / len, v[1] / len, v[2] / len));
    }

    let ico_faces: [[u32; 3]; 20] = [
        [0, 1, 2],
        [3, 2, 1],
        [3, 4, 5],
        [3, 8, 4],
        [0, 6, 7],
        [0, 9, 6],
        [4, 10, 11],
        [6, 11, 10],
        [2, 5, 9],
        [11, 9, 5],
        [1, 7, 8],
        [10, 8, 7],
        [3, 5, 2],
        [3, 1, 8],
        [0, 2, 9],
        [0, 7, 1],
        [6, 9, 11],
        [6, 10, 7],
        [4, 11, 5],
        [4, 8, 10],
    ];

    for f in &ico_faces {
        mesh.faces.push(*f);
    }

    for _ in 0..subdivisions {
        mesh = subdivide_sphere(&mesh);
    }

    mesh
}

fn subdivide_sphere(mesh: &IndexedMesh) -> IndexedMesh {
    let mut new_mesh = IndexedMesh::new();
    new_mesh.vertices = mesh.vertices.clone();

    let mut edge_midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for face in &mesh.faces {
        let v0 = face[0];
        let v1 = face[1];
        let v2 = face[2];

        let m01 = get_midpoint(v0, v1, &mut new_mesh.vertices, &mut edge_midpoints);
        let m12 = get_midpoint(v1, v2, &mut new_mesh.vertices, &mut edge_midpoints);
        let m20 = get_midpoint(v2, v0, &mut new_mesh.vertices, &mut edge_midpoints);

        new_mesh.faces.push([v0, m01, m20]);
        new_mesh.faces.push([v1, m12, m01]);
        new_mesh.faces.push([v2, m20, m12]);
        new_mesh.faces.push([m01, m12, m20]);
    }

    new_mesh
}

fn get_midpoint(
    v1: u32,
    v2: u32,
    vertices: &mut Vec<Point3<f64>>,
    edge_midpoints: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = if v1 < v2 { (v1, v2) } else { (v2, v1) };

    if let Some(&idx) = edge_midpoints.get(&key) {
        return idx;
    }

    let p1 = vertices[v1 as usize];
    let p2 = vertices[v2 as usize];

    let mx = f64::midpoint(p1.x, p2.x);
    let my = f64::midpoint(p1.y, p2.y);
    let mz = f64::midpoint(p1.z, p2.z);
    let len = mz.mul_add(mz, mx.mul_add(mx, my * my)).sqrt();

    #[allow(clippy::cast_possible_truncation)]
    let idx = vertices.len() as u32;
    vertices.push(Point3::new(mx / len, my / len, mz / len));
    edge_midpoints.insert(key, idx);
    idx
}
