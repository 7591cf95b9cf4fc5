//! Metallic-roughness material parameters

use crate::error::{Error, Result};
use serde::Deserialize;

/// Base color and PBR scalars for the single material of an asset.
///
/// Values are written as given; nothing is clamped to `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    pub name: Option<String>,
    #[serde(alias = "color")]
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
}

impl Material {
    pub fn new(base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: None,
            base_color,
            metallic,
            roughness,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn base_color(mut self, base_color: [f32; 4]) -> Self {
        self.base_color = base_color;
        self
    }

    pub fn metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Reject NaN and infinite factors. JSON has no encoding for them, so
    /// they would reach the document as `null`.
    pub fn validate(&self) -> Result<()> {
        let factors = self
            .base_color
            .iter()
            .map(|&value| ("baseColorFactor", value))
            .chain([
                ("metallicFactor", self.metallic),
                ("roughnessFactor", self.roughness),
            ]);

        for (field, value) in factors {
            if !value.is_finite() {
                return Err(Error::NonFiniteMaterial { field, value });
            }
        }
        Ok(())
    }
}

impl Default for Material {
    /// The container format's own defaults: opaque white, dielectric, fully rough
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0, 1.0], 0.0, 1.0)
    }
}
