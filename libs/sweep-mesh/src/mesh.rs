//! # Mesh Data Structure
//!
//! Core mesh representation: parallel position/normal buffers plus
//! triangle indices, and the flat [`MeshBuffers`] form handed to renderers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with one normal per vertex.
///
/// Positions and normals are kept in lockstep: the only way to add a vertex
/// is [`Mesh::add_vertex`], which takes both. All geometry uses f64
/// internally; export to f32 only happens at the GPU boundary.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Vertex normals, parallel to `vertices`
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its normal and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the normal at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Geometric normal of a triangle from its winding, not normalized.
    pub fn triangle_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.vertex(a);
        let v1 = self.vertex(b);
        let v2 = self.vertex(c);
        (v1 - v0).cross(v2 - v0)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Exactly one normal per vertex
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.vertices.len() {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Exports vertices as a flat f64 array.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_flat(&self) -> Vec<f64> {
        flatten(&self.vertices)
    }

    /// Exports normals as a flat f64 array.
    pub fn normals_flat(&self) -> Vec<f64> {
        flatten(&self.normals)
    }

    /// Exports vertices as f32 array for GPU.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Converts the mesh into the flat parallel-array form.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            vertices: self.vertices_f32(),
            normals: self.normals_f32(),
            indices: self.indices_u32(),
        }
    }
}

fn flatten(values: &[DVec3]) -> Vec<f64> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.extend_from_slice(&v.to_array());
    }
    result
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

// =============================================================================
// FLAT BUFFERS
// =============================================================================

/// The three parallel arrays a rendering primitive consumes.
///
/// This is also the serialized representation of a mesh.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{extrude_flat, ExtrudeParams};
/// use glam::DVec3;
///
/// let mesh = extrude_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &ExtrudeParams::along(DVec3::Z))?;
/// let buffers = mesh.to_buffers();
/// assert_eq!(buffers.vertices.len(), buffers.normals.len());
/// assert_eq!(buffers.triangle_count(), 2);
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    pub vertices: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z);
        mesh.add_vertex(DVec3::X, DVec3::Z);
        mesh.add_vertex(DVec3::Y, DVec3::Z);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex_keeps_normals_parallel() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0), DVec3::NEG_Y);
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.normals().len(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.normal(0), DVec3::NEG_Y);
    }

    #[test]
    fn test_triangle_normal_follows_winding() {
        let mut mesh = unit_triangle();
        assert_eq!(mesh.triangle_normal(0), DVec3::Z);
        mesh.add_triangle(0, 2, 1);
        assert_eq!(mesh.triangle_normal(1), DVec3::NEG_Z);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0), DVec3::Z);
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0), DVec3::Z);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mut mesh = unit_triangle();
        mesh.add_triangle(0, 0, 1);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_flat_exports() {
        let mesh = unit_triangle();
        assert_eq!(
            mesh.vertices_flat(),
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(mesh.normals_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    }

    #[test]
    fn test_buffers_serialize_as_three_arrays() {
        let buffers = unit_triangle().to_buffers();
        let json = serde_json::to_value(&buffers).unwrap();
        assert_eq!(json["vertices"].as_array().unwrap().len(), 9);
        assert_eq!(json["normals"].as_array().unwrap().len(), 9);
        assert_eq!(json["indices"], serde_json::json!([0, 1, 2]));

        let back: MeshBuffers = serde_json::from_value(json).unwrap();
        assert_eq!(back, buffers);
    }
}
