//! End caps of a sweep.

use glam::DVec3;

use crate::error::SweepResult;
use crate::mesh::Mesh;
use crate::path::Path;
use crate::triangulate::triangulate_footprint;

/// Triangulates the path's XY footprint, wound to face along the sweep.
pub(super) fn cap_triangles(
    path: &Path,
    direction: DVec3,
    tolerance: f64,
) -> SweepResult<Vec<[usize; 3]>> {
    triangulate_footprint(&path.footprint(), direction.z >= 0.0, tolerance)
}

/// Emits the bottom ring (original position, normal `-d̂`) and the top ring
/// (translated by `d`, normal `d̂`), then both caps.
///
/// The bottom cap reverses each triangle by swapping its first and third
/// index, so it faces away from the sweep.
pub(super) fn add_caps(mesh: &mut Mesh, path: &Path, direction: DVec3, triangles: &[[usize; 3]]) {
    let cap_normal = direction.normalize();

    let bottom = mesh.vertex_count() as u32;
    for &p in path.points() {
        mesh.add_vertex(p, -cap_normal);
    }

    let top = mesh.vertex_count() as u32;
    for &p in path.points() {
        mesh.add_vertex(p + direction, cap_normal);
    }

    for t in triangles {
        mesh.add_triangle(bottom + t[2] as u32, bottom + t[1] as u32, bottom + t[0] as u32);
    }

    for t in triangles {
        mesh.add_triangle(top + t[0] as u32, top + t[1] as u32, top + t[2] as u32);
    }
}
