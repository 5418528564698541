//! # Sweep Mesh
//!
//! Browser-safe procedural extrusion. Converts a polyline cross-section and
//! a sweep direction into a flat-shaded triangle mesh, optionally closed
//! into a loop and capped at both ends.
//!
//! ## Architecture
//!
//! ```text
//! flat path → Path → extrude (sides, closing face, caps) → Mesh → MeshBuffers
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Side faces**: one unshared quad per segment, normal `cross(v2 - v1, v3 - v2)`
//! - **Triangulation**: ear clipping (`earcutr`) behind an exact simplicity check (`robust`)
//! - **Batching**: independent extrusions in parallel (`rayon`)
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use sweep_mesh::{extrude_flat, ExtrudeParams};
//!
//! let mesh = extrude_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &ExtrudeParams::along(DVec3::Z))?;
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.triangle_count(), 2);
//! # Ok::<(), sweep_mesh::SweepError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod path;
pub mod profiles;
pub mod triangulate;

pub use error::{SweepError, SweepResult};
pub use mesh::{Mesh, MeshBuffers};
pub use ops::extrude::{extrude, extrude_batch, extrude_flat, extrude_with_config, ExtrudeParams};
pub use path::Path;
