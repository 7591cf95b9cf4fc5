//! Procedural solids as non-indexed triangle lists
//!
//! Every builder returns a [`Mesh`] in which each triangle owns three fresh
//! vertices. Builders are pure: the same call always yields the same mesh.

mod cube;
mod icosphere;
mod pyramid;

pub use cube::{CUBE_HALF_EXTENT, cube};
pub use icosphere::{ICOSPHERE_RADIUS, icosphere};
pub use pyramid::{PYRAMID_APEX_Y, PYRAMID_BASE_Y, PYRAMID_HALF_BASE, pyramid};

use crate::error::{Error, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triangle soup: parallel position and normal arrays, three vertices per triangle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from flat `x, y, z, x, y, z, ...` scalar sequences.
    pub fn from_flat(positions: &[f32], normals: &[f32]) -> Result<Self> {
        for len in [positions.len(), normals.len()] {
            if len % 3 != 0 {
                return Err(Error::NotVec3 { len });
            }
        }

        let mesh = Self {
            positions: positions.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
            normals: normals.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Append one triangle with the same normal on all three corners
    pub fn push_flat_triangle(&mut self, corners: [Vec3; 3], normal: Vec3) {
        for corner in corners {
            self.positions.push(corner.to_array());
            self.normals.push(normal.to_array());
        }
    }

    /// Append one triangle with a normal computed from its winding
    pub fn push_triangle(&mut self, corners: [Vec3; 3]) {
        let normal = face_normal(corners[0], corners[1], corners[2]);
        self.push_flat_triangle(corners, normal);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Iterate triangles as `(positions, normals)` triples
    pub fn triangles(&self) -> impl Iterator<Item = (&[[f32; 3]], &[[f32; 3]])> {
        self.positions.chunks_exact(3).zip(self.normals.chunks_exact(3))
    }

    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn flat_normals(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Check the triangle-soup invariants: matching attribute counts and a
    /// non-empty vertex count divisible by 3.
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() != self.normals.len() {
            return Err(Error::MeshMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        if self.positions.is_empty() {
            return Err(Error::EmptyMesh);
        }
        if self.positions.len() % 3 != 0 {
            return Err(Error::NotTriangleList(self.positions.len()));
        }
        Ok(())
    }
}

/// Unit normal of the triangle `v0, v1, v2` (counter-clockwise front face).
///
/// A degenerate triangle divides by 1.0 instead of its zero-length cross
/// product, so the result is the zero vector.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    let cross = (v1 - v0).cross(v2 - v0);
    let length = cross.length();
    let divisor = if length == 0.0 { 1.0 } else { length };
    cross / divisor
}

/// The solids this crate can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Cube,
    #[serde(alias = "icosphere")]
    Sphere,
    Pyramid,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Cube, Shape::Sphere, Shape::Pyramid];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Sphere => "sphere",
            Shape::Pyramid => "pyramid",
        }
    }

    pub fn build(self) -> Mesh {
        match self {
            Shape::Cube => cube(),
            Shape::Sphere => icosphere(),
            Shape::Pyramid => pyramid(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cube" => Ok(Shape::Cube),
            "sphere" | "icosphere" => Ok(Shape::Sphere),
            "pyramid" => Ok(Shape::Pyramid),
            other => Err(format!("unknown shape '{other}'")),
        }
    }
}
