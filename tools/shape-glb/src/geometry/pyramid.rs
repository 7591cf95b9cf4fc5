//! Square pyramid with flat normals

use super::Mesh;
use glam::Vec3;

/// Half the base edge on X and Z
pub const PYRAMID_HALF_BASE: f32 = 0.75;
/// Height of the base plane
pub const PYRAMID_BASE_Y: f32 = -0.5;
/// Height of the apex, which sits on the Y axis
pub const PYRAMID_APEX_Y: f32 = 0.75;

/// Generate the pyramid: 2 base triangles + 4 sides = 18 vertices.
///
/// Side normals are derived from each triangle's winding.
pub fn pyramid() -> Mesh {
    let h = PYRAMID_HALF_BASE;
    let y = PYRAMID_BASE_Y;
    let apex = Vec3::new(0.0, PYRAMID_APEX_Y, 0.0);

    // Counter-clockwise when viewed from above
    let ring = [
        Vec3::new(-h, y, h),
        Vec3::new(h, y, h),
        Vec3::new(h, y, -h),
        Vec3::new(-h, y, -h),
    ];

    let mut mesh = Mesh::new();

    // Base faces down, so it walks the ring backwards
    mesh.push_flat_triangle([ring[3], ring[2], ring[1]], Vec3::NEG_Y);
    mesh.push_flat_triangle([ring[3], ring[1], ring[0]], Vec3::NEG_Y);

    for i in 0..ring.len() {
        let next = (i + 1) % ring.len();
        mesh.push_triangle([ring[i], ring[next], apex]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tests::geometric_normal;

    #[test]
    fn test_pyramid_vertex_count() {
        let mesh = pyramid();
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.vertex_count(), 18);
    }

    #[test]
    fn test_pyramid_winding_matches_normals() {
        for (positions, normals) in pyramid().triangles() {
            let geometric = geometric_normal(positions);
            for n in normals {
                assert!(geometric.abs_diff_eq(Vec3::from(*n), 1e-6));
            }
        }
    }

    #[test]
    fn test_pyramid_base_faces_down() {
        let mesh = pyramid();
        assert_eq!(&mesh.normals[..6], &[[0.0, -1.0, 0.0]; 6]);
    }

    #[test]
    fn test_pyramid_sides_face_outward_and_up() {
        let mesh = pyramid();
        for (positions, normals) in mesh.triangles().skip(2) {
            let n = Vec3::from(normals[0]);
            let centroid = positions.iter().map(|p| Vec3::from(*p)).sum::<Vec3>() / 3.0;
            assert!(n.is_normalized());
            assert!(n.y > 0.0);
            assert!(Vec3::new(centroid.x, 0.0, centroid.z).dot(n) > 0.0);
        }
    }
}
