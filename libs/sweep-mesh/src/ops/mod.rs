//! # Mesh Operations
//!
//! Operations that generate meshes from paths.

pub mod extrude;

pub use extrude::{extrude, extrude_batch, extrude_flat, extrude_with_config, ExtrudeParams};
