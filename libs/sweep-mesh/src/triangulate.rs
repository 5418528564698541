//! # Footprint Triangulation
//!
//! Turns the XY footprint of a path into cap triangles. Ear clipping is
//! delegated to `earcutr`; because ear clipping happily returns garbage for
//! self-intersecting rings, the footprint is first checked for simplicity
//! with exact orientation predicates from `robust`.
//!
//! Returned triangles index the footprint's own vertex order, so callers can
//! offset them onto any ring of vertices emitted in path order.

use config::constants::EPSILON;
use glam::DVec2;
use robust::{orient2d, Coord};

use crate::error::{SweepError, SweepResult};

/// Triangulates a simple polygon footprint.
///
/// Trailing copies of the first point (an explicitly closed ring) are
/// dropped before triangulation. Every returned triangle is wound so its
/// geometric normal points to `+Z` when `facing_up` is set and to `-Z`
/// otherwise.
///
/// # Errors
///
/// - [`SweepError::DegenerateFootprint`] for fewer than 3 distinct points or
///   an enclosed area not above `tolerance`
/// - [`SweepError::NonSimplePolygon`] when two edges cross or overlap
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use sweep_mesh::triangulate::triangulate_footprint;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(0.0, 0.0),
/// ];
/// let triangles = triangulate_footprint(&square, true, 1e-9)?;
/// assert_eq!(triangles.len(), 2);
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
pub fn triangulate_footprint(
    points: &[DVec2],
    facing_up: bool,
    tolerance: f64,
) -> SweepResult<Vec<[usize; 3]>> {
    let ring = strip_closing_points(points);
    let distinct = distinct_ring(ring);

    if distinct.len() < 3 {
        return Err(SweepError::degenerate(format!(
            "footprint needs at least 3 distinct points, got {}",
            distinct.len()
        )));
    }

    if is_collinear(&distinct) {
        return Err(SweepError::degenerate("footprint points are collinear"));
    }

    // Crossing lobes can cancel to zero area, so simplicity comes first.
    check_simple(&distinct)?;

    let area = signed_area(ring);
    if area.abs() <= tolerance {
        return Err(SweepError::degenerate(format!(
            "footprint encloses no area (signed area {area:e})"
        )));
    }

    let flat: Vec<f64> = ring.iter().flat_map(|p| [p.x, p.y]).collect();
    let indices = earcutr::earcut(&flat, &[], 2)
        .map_err(|err| SweepError::non_simple(format!("ear clipping failed: {err:?}")))?;

    if indices.is_empty() {
        return Err(SweepError::degenerate("ear clipping produced no triangles"));
    }

    let triangles: Vec<[usize; 3]> = indices
        .chunks_exact(3)
        .map(|t| {
            let ccw = orient(ring[t[0]], ring[t[1]], ring[t[2]]) > 0.0;
            if ccw == facing_up {
                [t[0], t[1], t[2]]
            } else {
                [t[2], t[1], t[0]]
            }
        })
        .collect();

    tracing::trace!(
        points = ring.len(),
        triangles = triangles.len(),
        area,
        "triangulated footprint"
    );

    Ok(triangles)
}

/// Shoelace area of a ring, positive for counter-clockwise order.
///
/// The ring may or may not repeat its first point at the end.
pub fn signed_area(points: &[DVec2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let sum: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    sum * 0.5
}

fn same_point(a: DVec2, b: DVec2) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn strip_closing_points(points: &[DVec2]) -> &[DVec2] {
    let mut end = points.len();
    while end > 1 && same_point(points[end - 1], points[0]) {
        end -= 1;
    }
    &points[..end]
}

/// Ring with consecutive duplicates removed, used for the edge checks.
fn distinct_ring(ring: &[DVec2]) -> Vec<DVec2> {
    let mut distinct: Vec<DVec2> = Vec::with_capacity(ring.len());
    for &p in ring {
        if distinct.last().map_or(true, |&last| !same_point(last, p)) {
            distinct.push(p);
        }
    }
    while distinct.len() > 1 && same_point(distinct[distinct.len() - 1], distinct[0]) {
        distinct.pop();
    }
    distinct
}

fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// True when `r`, known to be collinear with `p`-`q`, lies on that segment.
fn on_segment(p: DVec2, q: DVec2, r: DVec2) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

fn opposite(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// True when every point lies on the line through the first two.
fn is_collinear(ring: &[DVec2]) -> bool {
    ring[2..].iter().all(|&p| orient(ring[0], ring[1], p) == 0.0)
}

/// Closed-segment intersection test, touching counts.
fn segments_intersect(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);

    if opposite(d1, d2) && opposite(d3, d4) {
        return true;
    }

    (d1 == 0.0 && on_segment(c, d, a))
        || (d2 == 0.0 && on_segment(c, d, b))
        || (d3 == 0.0 && on_segment(a, b, c))
        || (d4 == 0.0 && on_segment(a, b, d))
}

/// Rejects rings where non-adjacent edges meet or adjacent edges fold back
/// over each other.
fn check_simple(ring: &[DVec2]) -> SweepResult<()> {
    let n = ring.len();
    let edge = |i: usize| (ring[i], ring[(i + 1) % n]);

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = edge(i);
            let (c, d) = edge(j);

            if j == i + 1 || (i == 0 && j == n - 1) {
                // Adjacent edges share one vertex; they only overlap when the
                // other two endpoints lie on the same ray from it.
                let (shared, p, q) = if j == i + 1 { (b, a, d) } else { (a, b, c) };
                if orient(p, shared, q) == 0.0 && (p - shared).dot(q - shared) > 0.0 {
                    return Err(SweepError::non_simple(format!(
                        "edges {i} and {j} fold back over each other at {shared}"
                    )));
                }
                continue;
            }

            if segments_intersect(a, b, c, d) {
                return Err(SweepError::non_simple(format!(
                    "edge {i} ({a} -> {b}) intersects edge {j} ({c} -> {d})"
                )));
            }
        }
    }

    Ok(())
}
