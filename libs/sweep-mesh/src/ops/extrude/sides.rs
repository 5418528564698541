//! Side faces of a sweep.

use glam::DVec3;

use crate::mesh::Mesh;

/// Normal of the side face swept from segment `v1 -> v2` along `direction`.
///
/// This is `cross(v2 - v1, v3 - v2)` with `v3 = v2 + direction`. It is not
/// normalized: its length is twice the area of one of the face's triangles.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_mesh::ops::extrude::side_face_normal;
///
/// let normal = side_face_normal(DVec3::ZERO, DVec3::X, DVec3::Z);
/// assert_eq!(normal, DVec3::NEG_Y);
/// ```
pub fn side_face_normal(v1: DVec3, v2: DVec3, direction: DVec3) -> DVec3 {
    let v3 = v2 + direction;
    (v2 - v1).cross(v3 - v2)
}

/// Emits one quad `(v1, v2, v2 + d, v1 + d)` as triangles
/// `(v1, v2, v4)` and `(v2, v3, v4)`, all four vertices sharing the face normal.
pub(super) fn add_side_face(mesh: &mut Mesh, v1: DVec3, v2: DVec3, direction: DVec3) {
    let v3 = v2 + direction;
    let v4 = v1 + direction;
    let normal = side_face_normal(v1, v2, direction);

    let index = mesh.add_vertex(v1, normal);
    mesh.add_vertex(v2, normal);
    mesh.add_vertex(v3, normal);
    mesh.add_vertex(v4, normal);

    mesh.add_triangle(index, index + 1, index + 3);
    mesh.add_triangle(index + 1, index + 2, index + 3);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_face_layout() {
        let mut mesh = Mesh::new();
        add_side_face(&mut mesh, DVec3::ZERO, DVec3::X, DVec3::Z);

        assert_eq!(
            mesh.vertices(),
            &[DVec3::ZERO, DVec3::X, DVec3::new(1.0, 0.0, 1.0), DVec3::Z]
        );
        assert_eq!(mesh.triangles(), &[[0, 1, 3], [1, 2, 3]]);
    }

    #[test]
    fn test_side_face_offsets_indices() {
        let mut mesh = Mesh::new();
        add_side_face(&mut mesh, DVec3::ZERO, DVec3::X, DVec3::Z);
        add_side_face(&mut mesh, DVec3::X, DVec3::Y, DVec3::Z);
        assert_eq!(mesh.triangle(2), [4, 5, 7]);
        assert_eq!(mesh.triangle(3), [5, 6, 7]);
    }

    #[test]
    fn test_normal_scales_with_segment_and_sweep() {
        let normal = side_face_normal(
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 3.0),
        );
        assert_eq!(normal, DVec3::new(0.0, -6.0, 0.0));
    }
}
