//! # Extrusion Operations
//!
//! Sweeps a path along a direction vector:
//! - **side faces**: one flat-shaded quad per path segment
//! - **closing face**: optional quad from the last point back to the first
//! - **caps**: optional ear-clipped footprint at both ends
//!
//! Every call builds a fresh mesh from its inputs and shares nothing with
//! other calls, so [`extrude_batch`] can fan requests out over rayon.

mod caps;
mod sides;
mod sweep;


pub use sides::side_face_normal;
pub use sweep::{extrude, extrude_flat, extrude_with_config, ExtrudeParams};

use rayon::prelude::*;

use crate::error::SweepResult;
use crate::mesh::Mesh;
use crate::path::Path;

/// Extrudes independent requests in parallel.
///
/// Results come back in request order; one failing request does not affect
/// the others.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_mesh::{extrude_batch, ExtrudeParams, Path};
///
/// let segment = Path::from_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0])?;
/// let requests = vec![
///     (segment.clone(), ExtrudeParams::along(DVec3::Z)),
///     (segment, ExtrudeParams::default()),
/// ];
/// let results = extrude_batch(&requests);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
pub fn extrude_batch(requests: &[(Path, ExtrudeParams)]) -> Vec<SweepResult<Mesh>> {
    requests
        .par_iter()
        .map(|(path, params)| extrude(path, params))
        .collect()
}
