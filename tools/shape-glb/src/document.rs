//! Typed glTF 2.0 structural document
//!
//! Only the subset needed for a single-mesh, single-material asset is
//! modelled. Field names serialize to the camelCase keys loaders expect and
//! absent optional fields are omitted, so `serde_json::to_vec` produces the
//! compact text stored in the GLB JSON chunk.

use serde::{Deserialize, Serialize};

/// Fixed numeric codes from the glTF 2.0 specification
pub mod consts {
    /// `componentType` for 32-bit IEEE float
    pub const COMPONENT_TYPE_FLOAT: u32 = 5126;
    /// `mode` for a triangle list
    pub const MODE_TRIANGLES: u32 = 4;
    /// `bufferView.target` for vertex attributes (GL_ARRAY_BUFFER)
    pub const TARGET_ARRAY_BUFFER: u32 = 34962;
    /// Accessor `type` for 3-component vectors
    pub const TYPE_VEC3: &str = "VEC3";
    /// Value of `asset.version`
    pub const ASSET_VERSION: &str = "2.0";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub asset: Asset,
    pub scene: u32,
    pub scenes: Vec<Scene>,
    pub nodes: Vec<Node>,
    pub meshes: Vec<MeshDef>,
    pub materials: Vec<MaterialDef>,
    pub buffers: Vec<Buffer>,
    pub buffer_views: Vec<BufferView>,
    pub accessors: Vec<Accessor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub mesh: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub attributes: Attributes,
    pub mode: u32,
    pub material: u32,
}

/// Vertex attribute accessor indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "POSITION")]
    pub position: u32,
    #[serde(rename = "NORMAL")]
    pub normal: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub pbr_metallic_roughness: PbrMetallicRoughness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    pub base_color_factor: [f32; 4],
    pub metallic_factor: f32,
    pub roughness_factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    pub byte_length: u64,
}

/// A byte range of buffer 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: u32,
    pub byte_offset: u64,
    pub byte_length: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

/// Typed interpretation of one buffer view.
///
/// `min`/`max` are only present on position accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub buffer_view: u32,
    pub component_type: u32,
    pub count: u64,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<[f32; 3]>,
}

impl Accessor {
    /// Bounding box as `(min, max)` when the accessor carries one
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        self.min.zip(self.max)
    }
}

impl Document {
    /// Encode as compact JSON text (no insignificant whitespace)
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Vertex count of the position accessor of the first primitive
    pub fn vertex_count(&self) -> Option<u64> {
        let primitive = self.meshes.first()?.primitives.first()?;
        let accessor = self.accessors.get(primitive.attributes.position as usize)?;
        Some(accessor.count)
    }
}
