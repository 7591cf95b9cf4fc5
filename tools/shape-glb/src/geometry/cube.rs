//! Axis-aligned unit cube with flat face normals

use super::Mesh;
use glam::Vec3;

/// Half the edge length: the cube spans `-0.5..=0.5` on every axis
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Outward normal plus two in-plane axes per face, with `u × v == normal`
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Generate the cube: 6 faces × 2 triangles × 3 vertices = 36 vertices
pub fn cube() -> Mesh {
    let h = CUBE_HALF_EXTENT;
    let mut mesh = Mesh::new();

    for (normal, u, v) in FACES {
        let center = normal * h;
        // Counter-clockwise as seen from outside the face
        let corners = [
            center + (-u - v) * h,
            center + (u - v) * h,
            center + (u + v) * h,
            center + (-u + v) * h,
        ];

        mesh.push_flat_triangle([corners[0], corners[1], corners[2]], normal);
        mesh.push_flat_triangle([corners[0], corners[2], corners[3]], normal);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tests::geometric_normal;

    #[test]
    fn test_cube_vertex_count() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cube_winding_matches_normals() {
        for (positions, normals) in cube().triangles() {
            let geometric = geometric_normal(positions);
            for n in normals {
                assert!(
                    geometric.abs_diff_eq(Vec3::from(*n), 1e-6),
                    "winding {geometric:?} disagrees with stored normal {n:?}"
                );
            }
        }
    }

    #[test]
    fn test_cube_normals_point_outward() {
        for (positions, normals) in cube().triangles() {
            let centroid = positions.iter().map(|p| Vec3::from(*p)).sum::<Vec3>() / 3.0;
            assert!(centroid.dot(Vec3::from(normals[0])) > 0.0);
        }
    }

    #[test]
    fn test_cube_extent() {
        for p in cube().positions {
            for c in p {
                assert_eq!(c.abs(), CUBE_HALF_EXTENT);
            }
        }
    }
}
