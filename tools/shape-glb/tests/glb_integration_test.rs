//! Integration tests for the shape → GLB pipeline.
//!
//! Generated files are loaded back with the `gltf` crate as an independent
//! consumer, so these tests check loadability rather than our own reader.

use shape_glb::{Material, Shape, build_glb, export_shape, read_glb};
use tempfile::tempdir;

fn blue() -> Material {
    Material::new([0.35, 0.65, 1.0, 1.0], 0.2, 0.35)
}

/// Cube with the reference material, as written by the default driver run
#[test]
fn test_cube_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = export_shape(Shape::Cube, &blue(), "cube", dir.path()).expect("export failed");

    let bytes = std::fs::read(&report.path).expect("Failed to read GLB");
    let (document, buffers, _) = gltf::import_slice(&bytes).expect("Failed to import GLB");

    assert_eq!(document.accessors().count(), 2, "Expected position + normal");
    assert_eq!(document.views().count(), 2);
    assert_eq!(document.materials().count(), 1);
    assert_eq!(document.meshes().count(), 1);
    assert_eq!(document.buffers().count(), 1);

    let mesh = document.meshes().next().unwrap();
    let primitive = mesh.primitives().next().unwrap();
    assert_eq!(primitive.mode(), gltf::mesh::Mode::Triangles);
    assert!(primitive.indices().is_none(), "Triangle soup has no indices");

    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
    let positions: Vec<[f32; 3]> = reader.read_positions().unwrap().collect();
    let normals: Vec<[f32; 3]> = reader.read_normals().unwrap().collect();
    assert_eq!(positions.len(), 36);
    assert_eq!(normals.len(), 36);
    assert_eq!(positions, Shape::Cube.build().positions);

    let bounds = primitive.bounding_box();
    assert_eq!(bounds.min, [-0.5, -0.5, -0.5]);
    assert_eq!(bounds.max, [0.5, 0.5, 0.5]);

    let material = primitive.material();
    let pbr = material.pbr_metallic_roughness();
    assert_eq!(pbr.base_color_factor(), [0.35, 0.65, 1.0, 1.0]);
    assert_eq!(pbr.metallic_factor(), 0.2);
    assert_eq!(pbr.roughness_factor(), 0.35);
}

#[test]
fn test_every_shape_loads() {
    let dir = tempdir().expect("Failed to create temp dir");

    for shape in Shape::ALL {
        let report = export_shape(shape, &Material::default(), shape.name(), dir.path())
            .expect("export failed");
        let bytes = std::fs::read(&report.path).unwrap();

        let gltf = gltf::Gltf::from_slice(&bytes).expect("gltf rejected the container");
        let accessor_counts: Vec<usize> = gltf.accessors().map(|a| a.count()).collect();
        assert_eq!(accessor_counts, vec![report.vertices; 2], "{shape}");

        let normal = gltf
            .accessors()
            .nth(1)
            .expect("normal accessor");
        assert!(normal.min().is_none() && normal.max().is_none());
    }
}

#[test]
fn test_header_and_chunks() {
    let bytes = build_glb(&Shape::Sphere.build(), &blue(), "sphere").unwrap();

    assert_eq!(&bytes[0..4], b"glTF", "Invalid GLB magic");
    assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 2);
    assert_eq!(
        u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize,
        bytes.len()
    );

    let chunks = read_glb(&bytes).unwrap();
    assert_eq!(chunks.json.len() % 4, 0);
    assert_eq!(chunks.bin.len() % 4, 0);

    let document = chunks.document().unwrap();
    // 60 vertices × 12 bytes × (positions + normals)
    assert_eq!(document.buffers[0].byte_length, 1440);
    assert_eq!(document.vertex_count(), Some(60));
}

/// The JSON chunk is padded with spaces whenever the document text is not
/// 4-byte aligned
#[test]
fn test_json_chunk_space_padding() {
    let mut padded_cases = 0;

    // Each extra name character adds 2 bytes (node + mesh name), so two
    // consecutive lengths never both land on a 4-byte boundary
    for name in ["s", "sp", "sph", "sphe"] {
        let bytes = build_glb(&Shape::Sphere.build(), &blue(), name).unwrap();
        let chunks = read_glb(&bytes).unwrap();

        let text_len = chunks.json.iter().rposition(|&b| b == b'}').unwrap() + 1;
        let padding = &chunks.json[text_len..];
        assert!(padding.len() < 4);
        assert!(
            padding.iter().all(|&b| b == 0x20),
            "{name}: JSON padding {padding:?}"
        );
        if !padding.is_empty() {
            padded_cases += 1;
        }
    }

    assert!(padded_cases >= 2, "only {padded_cases} padded documents");
}

#[test]
fn test_pipeline_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    for shape in Shape::ALL {
        let a = export_shape(shape, &blue(), shape.name(), &first).unwrap();
        let b = export_shape(shape, &blue(), shape.name(), &second).unwrap();
        assert_eq!(
            std::fs::read(&a.path).unwrap(),
            std::fs::read(&b.path).unwrap(),
            "{shape} output differs between runs"
        );
    }
}

#[test]
fn test_parallel_exports_to_distinct_paths() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().to_path_buf();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let out = out.clone();
            std::thread::spawn(move || {
                let shape = Shape::ALL[i % Shape::ALL.len()];
                export_shape(shape, &Material::default(), &format!("shape-{i}"), &out)
            })
        })
        .collect();

    for handle in handles {
        let report = handle.join().unwrap().unwrap();
        let bytes = std::fs::read(&report.path).unwrap();
        assert!(gltf::Gltf::from_slice(&bytes).is_ok());
    }
}
