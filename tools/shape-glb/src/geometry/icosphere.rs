//! Sphere approximation from a regular icosahedron

use super::Mesh;
use glam::Vec3;

/// Circumradius of the generated icosahedron
pub const ICOSPHERE_RADIUS: f32 = 0.75;

/// The 20 faces, counter-clockwise from outside
const FACES: [[usize; 3]; 20] = [
    // 5 faces around vertex 0
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // 5 adjacent faces
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // 5 faces around vertex 3
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // 5 adjacent faces
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// The 12 icosahedron corners projected onto the unit sphere
fn unit_vertices() -> [Vec3; 12] {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

    [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ]
    .map(Vec3::normalize)
}

/// Generate the icosahedron sphere: 20 triangles, 60 vertices.
///
/// Each face carries the renormalized mean of its three corner normals
/// (the corners' unit-sphere directions) rather than a winding-derived
/// face normal.
pub fn icosphere() -> Mesh {
    let unit = unit_vertices();
    let mut mesh = Mesh::new();

    for [a, b, c] in FACES {
        let normal = (unit[a] + unit[b] + unit[c]).normalize();
        let corners = [unit[a], unit[b], unit[c]].map(|v| v * ICOSPHERE_RADIUS);
        mesh.push_flat_triangle(corners, normal);
    }

    mesh
}
