//! Shape manifest parsing and validation
//!
//! A manifest lists the shapes to generate and where to put them:
//!
//! ```toml
//! [output]
//! dir = "assets/shapes"
//!
//! [[shapes]]
//! name = "cube"
//! shape = "cube"
//! color = [0.35, 0.65, 1.0, 1.0]
//! metallic = 0.2
//! roughness = 0.35
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use shape_glb::{Material, Shape};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub shapes: Vec<ShapeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/shapes")
}

/// One asset to generate; `name` becomes the file stem
#[derive(Debug, Deserialize)]
pub struct ShapeEntry {
    pub name: String,
    pub shape: Shape,
    #[serde(flatten)]
    pub material: Material,
}

impl ShapeEntry {
    fn new(shape: Shape, color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: shape.name().to_string(),
            shape,
            material: Material::new(color, metallic, roughness),
        }
    }
}

impl Manifest {
    /// Parse a manifest from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse shape manifest")
    }

    /// The set generated when no manifest is given
    pub fn builtin() -> Self {
        Self {
            output: OutputConfig::default(),
            shapes: vec![
                ShapeEntry::new(Shape::Cube, [0.35, 0.65, 1.0, 1.0], 0.2, 0.35),
                ShapeEntry::new(Shape::Sphere, [1.0, 0.55, 0.25, 1.0], 0.1, 0.45),
                ShapeEntry::new(Shape::Pyramid, [0.45, 0.85, 0.4, 1.0], 0.0, 0.6),
            ],
        }
    }

    /// Check that every entry can be written to its own file
    pub fn validate(&self) -> Result<()> {
        if self.shapes.is_empty() {
            anyhow::bail!("Manifest lists no shapes");
        }

        let mut seen = HashSet::new();
        for entry in &self.shapes {
            if !is_valid_stem(&entry.name) {
                anyhow::bail!(
                    "Shape name '{}' is not usable as a file name (use letters, digits, '-', '_')",
                    entry.name
                );
            }
            if !seen.insert(entry.name.as_str()) {
                anyhow::bail!("Duplicate shape name '{}'", entry.name);
            }
        }
        Ok(())
    }
}

fn is_valid_stem(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Load and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    Manifest::parse(&content).with_context(|| format!("Invalid manifest: {:?}", path))
}
