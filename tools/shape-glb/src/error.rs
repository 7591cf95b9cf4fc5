//! Error type shared by the geometry, assembly and packaging stages

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("flat attribute length {len} is not a multiple of 3")]
    NotVec3 { len: usize },

    #[error("mesh has {positions} positions but {normals} normals")]
    MeshMismatch { positions: usize, normals: usize },

    #[error("vertex count {0} is not a multiple of 3 (triangle list required)")]
    NotTriangleList(usize),

    #[error("mesh has no vertices")]
    EmptyMesh,

    #[error("container length {0} exceeds the 32-bit GLB limit")]
    ContainerTooLarge(usize),

    #[error("failed to encode document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("non-finite material {field}: {value}")]
    NonFiniteMaterial { field: &'static str, value: f32 },

    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GLB magic {0:?}")]
    InvalidMagic([u8; 4]),

    #[error("unsupported GLB version {0}")]
    UnsupportedVersion(u32),

    #[error("GLB truncated: needed {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("unexpected chunk type {found:#010x}, expected {expected:#010x}")]
    UnexpectedChunk { expected: u32, found: u32 },

    #[error("GLB header declares {declared} bytes but container is {actual}")]
    LengthMismatch { declared: usize, actual: usize },
}
