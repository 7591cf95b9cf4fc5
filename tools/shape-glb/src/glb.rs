//! GLB container: header, space-padded JSON chunk, zero-padded BIN chunk
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! magic "glTF" | version 2 | total length
//! chunk length | "JSON"     | document text + spaces
//! chunk length | "BIN\0"    | buffer bytes + zeros
//! ```

use crate::document::Document;
use crate::error::{Error, Result};
use crate::utils::padding_to_4;
use std::path::Path;

/// `glTF` magic, first four bytes of every container
pub const GLB_MAGIC: [u8; 4] = *b"glTF";
/// Container version written and accepted
pub const GLB_VERSION: u32 = 2;
/// Chunk type tag `JSON` read as a little-endian u32
pub const CHUNK_JSON: u32 = 0x4E4F534A;
/// Chunk type tag `BIN\0` read as a little-endian u32
pub const CHUNK_BIN: u32 = 0x004E4942;
/// Size of the file header
pub const HEADER_LEN: usize = 12;
/// Size of each chunk's length + type prefix
pub const CHUNK_HEADER_LEN: usize = 8;

fn to_u32(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::ContainerTooLarge(len))
}

/// Serialize a document and its buffer into a complete GLB byte stream
pub fn assemble_glb(document: &Document, buffer_data: &[u8]) -> Result<Vec<u8>> {
    let json_bytes = document.to_json()?;

    let json_padding = padding_to_4(json_bytes.len());
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = padding_to_4(buffer_data.len());
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    let total_length =
        HEADER_LEN + CHUNK_HEADER_LEN + json_chunk_length + CHUNK_HEADER_LEN + buffer_chunk_length;
    let total_length_u32 = to_u32(total_length)?;

    let mut glb = Vec::with_capacity(total_length);

    // Header
    glb.extend_from_slice(&GLB_MAGIC);
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&total_length_u32.to_le_bytes());

    // JSON chunk
    glb.extend_from_slice(&to_u32(json_chunk_length)?.to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(&json_bytes);
    glb.extend(std::iter::repeat_n(b' ', json_padding));

    // BIN chunk
    glb.extend_from_slice(&to_u32(buffer_chunk_length)?.to_le_bytes());
    glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    glb.extend_from_slice(buffer_data);
    glb.extend(std::iter::repeat_n(0u8, buffer_padding));

    debug_assert_eq!(glb.len(), total_length);
    tracing::debug!(
        "GLB: {} JSON bytes (+{} pad), {} BIN bytes (+{} pad), {} total",
        json_bytes.len(),
        json_padding,
        buffer_data.len(),
        buffer_padding,
        total_length
    );

    Ok(glb)
}

/// Write a finished container in one call, creating parent directories.
///
/// Overwrites any existing file. There is no retry and no cleanup on failure.
pub fn write_glb(path: &Path, glb: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, glb).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote {:?} ({} bytes)", path, glb.len());
    Ok(())
}

/// Decoded 12-byte file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub length: u32,
}

/// Borrowed view of a container's two chunks; chunk data includes padding
#[derive(Debug, Clone, Copy)]
pub struct GlbChunks<'a> {
    pub header: GlbHeader,
    pub json: &'a [u8],
    pub bin: &'a [u8],
}

impl GlbChunks<'_> {
    /// Decode the structural chunk after stripping its trailing space padding
    pub fn document(&self) -> Result<Document> {
        let end = self
            .json
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(0, |i| i + 1);
        Ok(Document::from_json(&self.json[..end])?)
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32> {
    let field = bytes
        .get(offset..offset + 4)
        .ok_or(Error::Truncated {
            needed: offset + 4,
            available: bytes.len(),
        })?;
    Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Read one chunk starting at `offset`, returning its data and the next offset
fn read_chunk(bytes: &[u8], offset: usize, expected: u32) -> Result<(&[u8], usize)> {
    let length = read_u32(bytes, offset)? as usize;
    let found = read_u32(bytes, offset + 4)?;
    if found != expected {
        return Err(Error::UnexpectedChunk { expected, found });
    }

    let start = offset + CHUNK_HEADER_LEN;
    let end = start + length;
    let data = bytes.get(start..end).ok_or(Error::Truncated {
        needed: end,
        available: bytes.len(),
    })?;
    Ok((data, end))
}

/// Split a GLB byte stream into header, JSON chunk and BIN chunk
pub fn read_glb(bytes: &[u8]) -> Result<GlbChunks<'_>> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::Truncated {
            needed: HEADER_LEN,
            available: bytes.len(),
        });
    }

    let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if magic != GLB_MAGIC {
        return Err(Error::InvalidMagic(magic));
    }
    let version = read_u32(bytes, 4)?;
    if version != GLB_VERSION {
        return Err(Error::UnsupportedVersion(version));
    }
    let length = read_u32(bytes, 8)?;
    if length as usize != bytes.len() {
        return Err(Error::LengthMismatch {
            declared: length as usize,
            actual: bytes.len(),
        });
    }

    let (json, next) = read_chunk(bytes, HEADER_LEN, CHUNK_JSON)?;
    let (bin, _) = read_chunk(bytes, next, CHUNK_BIN)?;

    Ok(GlbChunks {
        header: GlbHeader {
            magic,
            version,
            length,
        },
        json,
        bin,
    })
}
