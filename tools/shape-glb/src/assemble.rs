//! Turn a mesh and material into a packed buffer plus its structural document

use crate::buffer::BufferBuilder;
use crate::document::{
    Asset, Attributes, Buffer, Document, MaterialDef, MeshDef, Node, PbrMetallicRoughness,
    Primitive, Scene, consts,
};
use crate::error::Result;
use crate::geometry::Mesh;
use crate::material::Material;

/// Written to `asset.generator`
pub const GENERATOR: &str = concat!("shape-glb ", env!("CARGO_PKG_VERSION"));

/// Packed binary buffer and the document describing it
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    pub buffer: Vec<u8>,
    pub document: Document,
}

/// Assemble a single-mesh, single-material asset.
///
/// The buffer holds all positions followed by all normals. Fails before
/// packing anything if the mesh breaks the triangle-soup invariants or a
/// material factor is NaN or infinite.
pub fn assemble(mesh: &Mesh, material: &Material, name: &str) -> Result<Assembled> {
    mesh.validate()?;
    material.validate()?;

    let mut buffer = BufferBuilder::new();
    let position = buffer.pack_positions(&mesh.positions);
    let normal = buffer.pack_vec3(&mesh.normals);
    let (data, buffer_views, accessors) = buffer.finish();

    tracing::debug!(
        "Assembled '{}': {} vertices, {} buffer bytes",
        name,
        mesh.vertex_count(),
        data.len()
    );

    let primitive = Primitive {
        attributes: Attributes {
            position: position.0,
            normal: normal.0,
        },
        mode: consts::MODE_TRIANGLES,
        material: 0,
    };

    let document = Document {
        asset: Asset {
            version: consts::ASSET_VERSION.to_string(),
            generator: Some(GENERATOR.to_string()),
        },
        scene: 0,
        scenes: vec![Scene { nodes: vec![0] }],
        nodes: vec![Node {
            mesh: 0,
            name: Some(name.to_string()),
        }],
        meshes: vec![MeshDef {
            name: Some(name.to_string()),
            primitives: vec![primitive],
        }],
        materials: vec![MaterialDef {
            name: material.name.clone(),
            pbr_metallic_roughness: PbrMetallicRoughness {
                base_color_factor: material.base_color,
                metallic_factor: material.metallic,
                roughness_factor: material.roughness,
            },
        }],
        buffers: vec![Buffer {
            byte_length: data.len() as u64,
        }],
        buffer_views,
        accessors,
    };

    Ok(Assembled {
        buffer: data,
        document,
    })
}
