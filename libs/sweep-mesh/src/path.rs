//! # Sweep Paths
//!
//! A [`Path`] is the validated polyline a sweep starts from. Callers usually
//! hold paths as flat `[x, y, z, x, y, z, ...]` arrays; [`Path::from_flat`]
//! rejects anything that is not a whole number of finite triples describing
//! at least two points.

use config::constants::MAX_PATH_POINTS;
use glam::{DVec2, DVec3};

use crate::error::{SweepError, SweepResult};

/// Minimum number of points needed to form one segment.
pub const MIN_PATH_POINTS: usize = 2;

/// An ordered polyline of at least two finite 3D points.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::Path;
///
/// let path = Path::from_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.5, 0.0])?;
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.segments(false).count(), 2);
/// assert_eq!(path.segments(true).count(), 3);
/// # Ok::<(), sweep_mesh::SweepError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<DVec3>,
}

impl Path {
    /// Builds a path from points, validating count and finiteness.
    pub fn new(points: Vec<DVec3>) -> SweepResult<Self> {
        if points.len() < MIN_PATH_POINTS {
            return Err(SweepError::invalid_path(format!(
                "path needs at least {MIN_PATH_POINTS} points, got {}",
                points.len()
            )));
        }
        if points.len() > MAX_PATH_POINTS {
            return Err(SweepError::invalid_path(format!(
                "path has {} points (max: {MAX_PATH_POINTS})",
                points.len()
            )));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SweepError::invalid_path(format!(
                "point {index} has a non-finite coordinate: {}",
                points[index]
            )));
        }
        Ok(Self { points })
    }

    /// Parses a flat `[x, y, z, ...]` array.
    ///
    /// Trailing incomplete triples are an error, not silently dropped.
    pub fn from_flat(flat: &[f64]) -> SweepResult<Self> {
        if flat.len() % 3 != 0 {
            return Err(SweepError::invalid_path(format!(
                "flat path length {} is not a multiple of 3",
                flat.len()
            )));
        }
        let points = flat
            .chunks_exact(3)
            .map(|c| DVec3::new(c[0], c[1], c[2]))
            .collect();
        Self::new(points)
    }

    /// Returns the points in path order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a valid path has at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of side faces a sweep of this path produces.
    pub fn segment_count(&self, close: bool) -> usize {
        self.points.len() - 1 + usize::from(close)
    }

    /// Iterates consecutive `(start, end)` pairs, plus `(last, first)` when
    /// `close` is set.
    pub fn segments(&self, close: bool) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        let closing = close.then(|| (self.points[self.points.len() - 1], self.points[0]));
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// XY footprint in path order with the first point re-appended.
    pub fn footprint(&self) -> Vec<DVec2> {
        let mut footprint: Vec<DVec2> = self.points.iter().map(|p| p.truncate()).collect();
        footprint.push(self.points[0].truncate());
        footprint
    }

    /// Returns the path as a flat `[x, y, z, ...]` array.
    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Returns a copy of this path moved by `offset`.
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            points: self.points.iter().map(|p| *p + offset).collect(),
        }
    }
}
