//! # Profile Presets
//!
//! Hand-authored cross-sections used by the scene: the corridor the player
//! walks through and the flat hand silhouette. Both are counter-clockwise
//! outlines in the XY plane, swept along `+Z` and capped.

use glam::DVec3;

use crate::error::SweepResult;
use crate::mesh::Mesh;
use crate::ops::extrude::{extrude, ExtrudeParams};
use crate::path::Path;

/// Sweep depth of the corridor along `+Z`.
pub const CORRIDOR_DEPTH: f64 = 10.0;

/// Sweep depth of the hand along `+Z`.
pub const HAND_DEPTH: f64 = 0.2;

/// Octagonal tunnel outline: 4 wide, 3 tall, corners chamfered by 0.5.
const CORRIDOR_OUTLINE: [[f64; 2]; 9] = [
    [0.0, 0.0],
    [1.5, 0.0],
    [2.0, 0.5],
    [2.0, 2.5],
    [1.5, 3.0],
    [-1.5, 3.0],
    [-2.0, 2.5],
    [-2.0, 0.5],
    [-1.5, 0.0],
];

/// Open hand with the thumb pointing along `+X`.
const HAND_OUTLINE: [[f64; 2]; 13] = [
    [0.0, -1.0],
    [0.3, -1.0],
    [0.6, -0.6],
    [0.9, -0.2],
    [1.1, 0.0],
    [1.0, 0.1],
    [0.8, 0.0],
    [0.6, -0.1],
    [0.4, 1.0],
    [-0.3, 1.0],
    [-0.5, 0.0],
    [-0.5, -0.6],
    [-0.3, -1.0],
];

fn outline_path(outline: &[[f64; 2]]) -> SweepResult<Path> {
    Path::new(outline.iter().map(|&[x, y]| DVec3::new(x, y, 0.0)).collect())
}

/// Corridor cross-section at `z = 0`.
pub fn corridor() -> SweepResult<Path> {
    outline_path(&CORRIDOR_OUTLINE)
}

/// Hand silhouette at `z = 0`.
pub fn hand() -> SweepResult<Path> {
    outline_path(&HAND_OUTLINE)
}

/// Closed, capped corridor swept [`CORRIDOR_DEPTH`] along `+Z`.
///
/// # Example
///
/// ```rust
/// let corridor = sweep_mesh::profiles::corridor_mesh()?;
/// assert!(corridor.validate());
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
pub fn corridor_mesh() -> SweepResult<Mesh> {
    solid(&corridor()?, CORRIDOR_DEPTH)
}

/// Closed, capped hand swept [`HAND_DEPTH`] along `+Z`.
pub fn hand_mesh() -> SweepResult<Mesh> {
    solid(&hand()?, HAND_DEPTH)
}

fn solid(path: &Path, depth: f64) -> SweepResult<Mesh> {
    let params = ExtrudeParams::along(DVec3::new(0.0, 0.0, depth))
        .with_close(true)
        .with_cap(true);
    extrude(path, &params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulate::signed_area;
    use approx::assert_relative_eq;

    /// Sum of the areas of the top cap triangles projected onto XY.
    fn top_cap_area(mesh: &Mesh, faces: usize, cap_triangles: usize) -> f64 {
        let first_top = faces * 2 + cap_triangles;
        (first_top..first_top + cap_triangles)
            .map(|i| mesh.triangle_normal(i).z * 0.5)
            .sum()
    }

    #[test]
    fn test_outlines_are_counter_clockwise() {
        let corridor: Vec<_> = corridor().unwrap().points().iter().map(|p| p.truncate()).collect();
        let hand: Vec<_> = hand().unwrap().points().iter().map(|p| p.truncate()).collect();
        assert_relative_eq!(signed_area(&corridor), 11.5, epsilon = 1e-12);
        assert!(signed_area(&hand) > 0.0);
    }

    #[test]
    fn test_corridor_mesh() {
        let mesh = corridor_mesh().unwrap();
        assert!(mesh.validate());

        let faces = CORRIDOR_OUTLINE.len();
        let cap_triangles = (mesh.triangle_count() - faces * 2) / 2;
        assert!(cap_triangles > 0);
        assert_eq!(mesh.vertex_count(), faces * 4 + faces * 2);
        assert_relative_eq!(top_cap_area(&mesh, faces, cap_triangles), 11.5, epsilon = 1e-9);

        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-2.0, 0.0, 0.0));
        assert_eq!(max, DVec3::new(2.0, 3.0, CORRIDOR_DEPTH));
    }

    #[test]
    fn test_hand_mesh() {
        let mesh = hand_mesh().unwrap();
        assert!(mesh.validate());

        let faces = HAND_OUTLINE.len();
        let cap_triangles = (mesh.triangle_count() - faces * 2) / 2;
        let area = signed_area(&HAND_OUTLINE.map(|[x, y]| glam::DVec2::new(x, y)));
        assert_relative_eq!(top_cap_area(&mesh, faces, cap_triangles), area, epsilon = 1e-9);
    }
}
