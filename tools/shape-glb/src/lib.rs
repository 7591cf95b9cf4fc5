//! Procedural solids written as self-contained binary glTF (GLB) files
//!
//! The crate is a one-way pipeline:
//! - [`geometry`]: cube, icosahedron sphere and pyramid as triangle soups
//! - [`assemble`]: pack positions then normals into one buffer and describe
//!   it with a typed [`Document`]
//! - [`glb`]: frame document and buffer as a GLB container and write it
//!
//! # Example
//!
//! ```no_run
//! use shape_glb::*;
//!
//! let material = Material::new([0.35, 0.65, 1.0, 1.0], 0.2, 0.35);
//! let report = export_shape(Shape::Cube, &material, "cube", "assets".as_ref())?;
//! println!("{} bytes, {} vertices", report.bytes, report.vertices);
//! # Ok::<(), shape_glb::Error>(())
//! ```

pub mod assemble;
pub mod buffer;
pub mod document;
pub mod error;
pub mod geometry;
pub mod glb;
pub mod material;
pub mod pipeline;
pub mod utils;

pub use assemble::{Assembled, GENERATOR, assemble};
pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::{Accessor, BufferView, Document};
pub use error::{Error, Result};
pub use geometry::{Mesh, Shape, cube, face_normal, icosphere, pyramid};
pub use glb::{GlbChunks, GlbHeader, assemble_glb, read_glb, write_glb};
pub use material::Material;
pub use pipeline::{ExportReport, build_glb, export_shape};
pub use utils::{align_buffer, compute_bounds};
