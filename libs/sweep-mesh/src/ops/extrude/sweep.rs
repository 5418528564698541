//! # Sweep Extrusion
//!
//! Translates a path by a direction vector and stitches the result into a
//! flat-shaded mesh.
//!
//! ## Output Layout
//!
//! Vertices are emitted in generation order and never shared:
//! - 4 per side face, `(v1, v2, v2 + d, v1 + d)`
//! - when capping, one bottom ring and one top ring of `path.len()` vertices

use config::constants::{approx_zero, SweepConfig, EPSILON};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{caps, sides};
use crate::error::{SweepError, SweepResult};
use crate::mesh::Mesh;
use crate::path::Path;

/// Parameters for a sweep.
///
/// `direction` is mandatory for every extrusion; it is an `Option` so that
/// requests decoded from loosely typed callers can report
/// [`SweepError::MissingDirection`] instead of guessing a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtrudeParams {
    /// Offset applied to every path point to form the far edge of each face
    pub direction: Option<DVec3>,
    /// Add a face from the last point back to the first
    pub close: bool,
    /// Add triangulated caps at both ends
    pub cap: bool,
}

impl ExtrudeParams {
    /// Open, uncapped sweep along `direction`.
    pub fn along(direction: DVec3) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }

    /// Sets whether the profile is closed into a loop.
    pub fn with_close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }

    /// Sets whether both ends are capped.
    pub fn with_cap(mut self, cap: bool) -> Self {
        self.cap = cap;
        self
    }
}

/// Extrudes a path with the default [`SweepConfig`].
///
/// # Arguments
///
/// * `path` - The profile to sweep
/// * `params` - Direction and close/cap flags
///
/// # Returns
///
/// A mesh with `path.segment_count(close)` side faces, plus caps when
/// requested. Nothing is returned on failure.
///
/// # Errors
///
/// - [`SweepError::MissingDirection`] when `params.direction` is `None`
/// - [`SweepError::InvalidDirection`] for a zero-length or non-finite
///   direction, and for `cap` with a direction whose Z component is zero,
///   since the caps are triangulated in the XY plane
/// - [`SweepError::NonSimplePolygon`] or [`SweepError::DegenerateFootprint`]
///   when capping a footprint that cannot be triangulated
/// - [`SweepError::TooManyVertices`] or [`SweepError::TooManyTriangles`]
///   when the output would exceed the default limits
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_mesh::{extrude, ExtrudeParams, Path};
///
/// let square = Path::from_flat(&[
///     0.0, 0.0, 0.0,
///     1.0, 0.0, 0.0,
///     1.0, 1.0, 0.0,
///     0.0, 1.0, 0.0,
/// ])?;
/// let params = ExtrudeParams::along(DVec3::Z).with_close(true).with_cap(true);
/// let mesh = extrude(&square, &params)?;
///
/// // 4 side faces x 4 vertices + 2 rings x 4 vertices
/// assert_eq!(mesh.vertex_count(), 24);
/// // 4 side faces x 2 triangles + 2 caps x 2 triangles
/// assert_eq!(mesh.triangle_count(), 12);
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
pub fn extrude(path: &Path, params: &ExtrudeParams) -> SweepResult<Mesh> {
    extrude_with_config(path, params, &SweepConfig::default())
}

/// Parses a flat `[x, y, z, ...]` path and extrudes it.
pub fn extrude_flat(path: &[f64], params: &ExtrudeParams) -> SweepResult<Mesh> {
    let path = Path::from_flat(path).inspect_err(|err| {
        tracing::warn!(%err, "rejected extrusion path");
    })?;
    extrude(&path, params)
}

/// Extrudes a path using explicit tolerances and output limits.
pub fn extrude_with_config(
    path: &Path,
    params: &ExtrudeParams,
    config: &SweepConfig,
) -> SweepResult<Mesh> {
    build(path, params, config).inspect_err(|err| {
        tracing::warn!(%err, points = path.len(), "extrusion failed");
    })
}

fn build(path: &Path, params: &ExtrudeParams, config: &SweepConfig) -> SweepResult<Mesh> {
    let direction = resolve_direction(params)?;

    let face_count = path.segment_count(params.close);
    let ring_len = if params.cap { path.len() } else { 0 };

    let vertex_count = face_count * 4 + ring_len * 2;
    if vertex_count > config.max_vertices {
        return Err(SweepError::TooManyVertices {
            count: vertex_count,
            max: config.max_vertices,
        });
    }

    // Triangulate before emitting anything so a bad footprint leaves no mesh.
    let cap_triangles = if params.cap {
        caps::cap_triangles(path, direction, config.tolerance)?
    } else {
        Vec::new()
    };

    let triangle_count = face_count * 2 + cap_triangles.len() * 2;
    if triangle_count > config.max_triangles {
        return Err(SweepError::TooManyTriangles {
            count: triangle_count,
            max: config.max_triangles,
        });
    }

    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    for (start, end) in path.segments(params.close) {
        sides::add_side_face(&mut mesh, start, end, direction);
    }

    if params.cap {
        caps::add_caps(&mut mesh, path, direction, &cap_triangles);
    }

    tracing::debug!(
        points = path.len(),
        faces = face_count,
        close = params.close,
        cap = params.cap,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "extruded path"
    );

    Ok(mesh)
}

fn resolve_direction(params: &ExtrudeParams) -> SweepResult<DVec3> {
    let direction = params.direction.ok_or(SweepError::MissingDirection)?;

    if !direction.is_finite() {
        return Err(SweepError::invalid_direction(format!(
            "direction has a non-finite component: {direction}"
        )));
    }
    if direction.length() <= EPSILON {
        return Err(SweepError::invalid_direction("direction has zero length"));
    }
    // Caps are triangulated in XY, so the sweep has to leave that plane.
    if params.cap && approx_zero(direction.z) {
        return Err(SweepError::invalid_direction(format!(
            "capping needs a direction with a Z component, got {direction}"
        )));
    }

    Ok(direction)
}
