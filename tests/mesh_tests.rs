// Host-side tests for mesh parsing and the procedural placeholders.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/core/mesh.rs");
}

use glam::Vec3;
use mesh::*;

#[test]
fn parses_a_simple_triangle() {
    let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let m = parse_obj(obj).unwrap();
    assert_eq!(m.vertices.len(), 3);
    assert_eq!(m.indices, vec![0, 1, 2]);
}

#[test]
fn fan_triangulates_polygons() {
    let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    let m = parse_obj(obj).unwrap();
    // quad -> two triangles sharing the first corner
    assert_eq!(m.indices.len(), 6);
    assert_eq!(&m.indices[..3], &[0, 1, 2]);
    assert_eq!(&m.indices[3..], &[0, 2, 3]);
}

#[test]
fn accepts_negative_indices() {
    let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
    let m = parse_obj(obj).unwrap();
    assert_eq!(m.indices, vec![0, 1, 2]);
    assert_eq!(m.vertices[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(m.vertices[2].position, [0.0, 1.0, 0.0]);
}

#[test]
fn computes_normals_when_missing() {
    let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let m = parse_obj(obj).unwrap();
    for v in &m.vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-5);
        // flat triangle in the XY plane -> +-Z normal
        assert!(n.x.abs() < 1e-6 && n.y.abs() < 1e-6);
    }
}

#[test]
fn keeps_supplied_normals() {
    let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
    let m = parse_obj(obj).unwrap();
    for v in &m.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn ignores_texture_references_and_unknown_records() {
    let obj = "o crow\nvt 0 0\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl feathers\nf 1/1 2/1 3/1\n";
    let m = parse_obj(obj).unwrap();
    assert_eq!(m.vertices.len(), 3);
}

#[test]
fn rejects_empty_and_garbage_input() {
    assert!(parse_obj("").is_err());
    assert!(parse_obj("# just a comment\n").is_err());
    assert!(parse_obj("v 1 2\nf 1 2 3\n").is_err(), "short vertex");
    assert!(parse_obj("v 0 0 0\nf 1 2 3\n").is_err(), "face past the end");
    assert!(parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\n").is_err(), "degenerate face");
}

#[test]
fn shared_corners_are_deduplicated() {
    // two triangles sharing an edge
    let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n";
    let m = parse_obj(obj).unwrap();
    assert_eq!(m.vertices.len(), 4);
    assert_eq!(m.indices.len(), 6);
}

fn assert_well_formed(m: &MeshData) {
    assert!(!m.vertices.is_empty());
    assert_eq!(m.indices.len() % 3, 0);
    for &i in &m.indices {
        assert!((i as usize) < m.vertices.len());
    }
    for v in &m.vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-5, "non-unit normal {n:?}");
    }
}

#[test]
fn placeholders_are_well_formed() {
    assert_well_formed(&placeholder_crow());
    assert_well_formed(&placeholder_bathtub());
    assert_well_formed(&sponge_mesh());
    assert_well_formed(&floor_mesh(8.0));
}

#[test]
fn placeholder_crow_sits_on_its_base() {
    let m = placeholder_crow();
    let min_y = m
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::INFINITY, f32::min);
    assert!(min_y >= 0.0 && min_y < 0.5);
}

#[test]
fn model_asset_exposes_either_variant() {
    let loaded = ModelAsset::Loaded(placeholder_crow());
    let fallback = ModelAsset::Fallback(placeholder_bathtub());
    assert!(!loaded.is_fallback());
    assert!(fallback.is_fallback());
    assert!(!loaded.mesh().vertices.is_empty());
    assert!(!fallback.mesh().vertices.is_empty());
}
