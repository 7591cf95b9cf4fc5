//! End-to-end: geometry → assembly → GLB bytes → file

use crate::assemble::assemble;
use crate::error::Result;
use crate::geometry::{Mesh, Shape};
use crate::glb::{assemble_glb, write_glb};
use crate::material::Material;
use std::path::{Path, PathBuf};

/// File extension of written assets
pub const GLB_EXT: &str = "glb";

/// Summary of one written asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub vertices: usize,
    pub triangles: usize,
}

/// Build a complete GLB byte stream in memory
pub fn build_glb(mesh: &Mesh, material: &Material, name: &str) -> Result<Vec<u8>> {
    let assembled = assemble(mesh, material, name)?;
    assemble_glb(&assembled.document, &assembled.buffer)
}

/// Generate `shape` and write it to `<output_dir>/<name>.glb`.
///
/// Each call owns all of its intermediate data, so calls targeting
/// different paths may run concurrently.
pub fn export_shape(
    shape: Shape,
    material: &Material,
    name: &str,
    output_dir: &Path,
) -> Result<ExportReport> {
    let mesh = shape.build();
    let glb = build_glb(&mesh, material, name)?;

    let path = output_dir.join(format!("{name}.{GLB_EXT}"));
    write_glb(&path, &glb)?;

    Ok(ExportReport {
        path,
        bytes: glb.len(),
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
    })
}
