//! Build every shape listed in a manifest

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use shape_glb::{ExportReport, export_shape};
use std::path::Path;

/// Generate all shapes in parallel, one file per entry.
///
/// Reports come back in manifest order. The first failure aborts the run.
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<Vec<ExportReport>> {
    use rayon::prelude::*;

    manifest.validate()?;

    let output_dir = output_override.unwrap_or(&manifest.output.dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    manifest
        .shapes
        .par_iter()
        .map(|entry| {
            tracing::debug!("Generating {} ({})", entry.name, entry.shape);
            export_shape(entry.shape, &entry.material, &entry.name, output_dir)
                .with_context(|| format!("Failed to generate '{}'", entry.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_builtin_set() {
        let dir = tempfile::tempdir().unwrap();
        let reports = build_all(&Manifest::builtin(), Some(dir.path())).unwrap();

        let files: Vec<_> = reports
            .iter()
            .map(|r| r.path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(files, ["cube.glb", "sphere.glb", "pyramid.glb"]);
        assert_eq!(reports[0].vertices, 36);
        assert_eq!(reports[1].vertices, 60);
        assert_eq!(reports[2].vertices, 18);
        assert!(reports.iter().all(|r| r.path.exists()));
    }

    #[test]
    fn test_build_uses_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut manifest = Manifest::builtin();
        manifest.output.dir = dir.path().join("nested/out");

        let reports = build_all(&manifest, None).unwrap();
        assert!(reports.iter().all(|r| r.path.starts_with(&manifest.output.dir)));
    }

    #[test]
    fn test_build_rejects_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::parse("").unwrap();
        assert!(build_all(&manifest, Some(dir.path())).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
