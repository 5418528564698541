//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use sweep_mesh::{Mesh, MeshBuffers};
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = extrude(new Float64Array([0, 0, 0, 1, 0, 0]), new Float64Array([0, 0, 1]), false, false);
///
/// // Get counts
/// const vertexCount = mesh.vertex_count;
/// const triangleCount = mesh.triangle_count;
///
/// // Create BufferGeometry
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Positions, normals and indices in flat form
    buffers: MeshBuffers,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.buffers.vertices[..])
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Side face normals are not normalized; renormalize before lighting.
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.buffers.normals[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.buffers.indices[..])
    }

    /// Serializes the three buffers as a JSON object.
    ///
    /// Useful for passing data between a worker and the main thread, as
    /// wasm-bindgen wrappers cannot be transferred.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.buffers_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            buffers: mesh.to_buffers(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Flat buffers, for host-side callers without a JS runtime.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// JSON form of the buffers without going through `JsValue`.
    pub fn buffers_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.buffers)
    }
}
