//! Tests for the WASM-facing extrusion helpers.

use super::*;

/// Tests that extrude produces the single-segment quad.
#[test]
fn extrude_produces_segment_quad() {
    let mesh = extrude_internal(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[0.0, 0.0, 1.0], false, false)
        .expect("extrusion succeeds");

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.buffers().vertices.len(), 12);
    assert_eq!(
        mesh.buffers().normals,
        vec![0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0]
    );
    assert_eq!(mesh.buffers().indices.len(), 6);
}

/// An empty direction array means the caller forgot the direction.
#[test]
fn extrude_rejects_missing_direction() {
    let err = extrude_internal(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[], false, false).unwrap_err();
    assert_eq!(err, SweepError::MissingDirection);
}

#[test]
fn extrude_rejects_short_direction() {
    let err =
        extrude_internal(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[0.0, 1.0], false, false).unwrap_err();
    assert!(err.to_string().contains("3 components"));
}

#[test]
fn extrude_rejects_single_point() {
    let err = extrude_internal(&[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0], false, false).unwrap_err();
    assert!(matches!(err, SweepError::InvalidPath { .. }));
}

/// Tests that capped buffers stay parallel and in range.
#[test]
fn extrude_capped_buffers_valid() {
    let square = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = extrude_internal(&square, &[0.0, 0.0, 1.0], true, true).expect("extrusion succeeds");
    let buffers = mesh.buffers();

    assert_eq!(buffers.vertices.len(), buffers.normals.len());
    for &v in &buffers.vertices {
        assert!(v.is_finite(), "Vertex value should be finite");
    }

    let vertex_count = mesh.vertex_count();
    for &idx in &buffers.indices {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

#[test]
fn mesh_handle_json_has_three_arrays() {
    let mesh = extrude_internal(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[0.0, 0.0, 1.0], false, false)
        .expect("extrusion succeeds");
    let text = mesh.buffers_json().expect("serializes");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");

    assert_eq!(json["vertices"].as_array().map(Vec::len), Some(12));
    assert_eq!(json["normals"].as_array().map(Vec::len), Some(12));
    assert_eq!(json["indices"], serde_json::json!([0, 1, 3, 1, 2, 3]));
}

#[test]
fn preset_meshes_build() {
    let corridor = MeshHandle::from_mesh(&profiles::corridor_mesh().expect("corridor builds"));
    let hand = MeshHandle::from_mesh(&profiles::hand_mesh().expect("hand builds"));
    assert!(!corridor.is_empty());
    assert!(!hand.is_empty());
}
