//! Human-readable summary of a GLB file

use anyhow::{Context, Result};
use shape_glb::read_glb;
use std::fmt::Write as _;
use std::path::Path;

/// Describe header, chunk sizes and document contents of a GLB file
pub fn inspect(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    describe(&bytes).with_context(|| format!("Invalid GLB: {:?}", path))
}

pub fn describe(bytes: &[u8]) -> Result<String> {
    let chunks = read_glb(bytes)?;
    let document = chunks.document()?;

    let mut out = String::new();
    writeln!(
        out,
        "glTF v{} container, {} bytes",
        chunks.header.version, chunks.header.length
    )?;
    writeln!(out, "  JSON chunk: {} bytes", chunks.json.len())?;
    writeln!(
        out,
        "  BIN chunk:  {} bytes ({} used)",
        chunks.bin.len(),
        document.buffers.first().map_or(0, |b| b.byte_length)
    )?;

    if let Some(generator) = &document.asset.generator {
        writeln!(out, "  Generator:  {}", generator)?;
    }

    for mesh in &document.meshes {
        writeln!(out, "  Mesh '{}'", mesh.name.as_deref().unwrap_or("<unnamed>"))?;
    }
    writeln!(
        out,
        "  {} accessors, {} buffer views, {} materials",
        document.accessors.len(),
        document.buffer_views.len(),
        document.materials.len()
    )?;

    if let Some(vertices) = document.vertex_count() {
        writeln!(out, "  {} vertices, {} triangles", vertices, vertices / 3)?;
    }
    for accessor in &document.accessors {
        if let Some((min, max)) = accessor.bounds() {
            writeln!(out, "  Bounds: {:?} .. {:?}", min, max)?;
        }
    }

    Ok(out)
}
