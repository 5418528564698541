//! # Configuration Constants
//!
//! Centralized constants for the sweep mesh pipeline. Precision values,
//! safety limits and the validated [`SweepConfig`] snapshot live here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Maximum values for safety bounds
//! - **Configuration**: Validated engine settings

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when deciding whether a footprint point
/// duplicates the previous one.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum absolute signed area a footprint must enclose to be capped.
///
/// Footprints below this area are collinear (or nearly so) and produce no
/// meaningful cap triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::{AREA_EPSILON, EPSILON};
///
/// assert!(AREA_EPSILON >= EPSILON);
/// ```
pub const AREA_EPSILON: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of points accepted in a single path.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_PATH_POINTS;
///
/// let point_count = 64;
/// assert!(point_count < MAX_PATH_POINTS);
/// ```
pub const MAX_PATH_POINTS: usize = 1_000_000;

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely long paths.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely long paths.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// CONFIGURATION SNAPSHOT
// =============================================================================

/// Immutable snapshot of the settings the extrusion engine runs with.
///
/// # Examples
/// ```
/// use config::constants::SweepConfig;
/// let config = SweepConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Area tolerance below which a cap footprint counts as degenerate.
    pub tolerance: f64,
    /// Upper bound on generated vertices.
    pub max_vertices: usize,
    /// Upper bound on generated triangles.
    pub max_triangles: usize,
}

impl SweepConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SweepConfig;
    /// let cfg = SweepConfig::new(1.0e-6, 1024, 2048).expect("valid config");
    /// assert_eq!(cfg.max_vertices, 1024);
    /// ```
    pub fn new(
        tolerance: f64,
        max_vertices: usize,
        max_triangles: usize,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        // A single side face needs 4 vertices and 2 triangles.
        if max_vertices < 4 {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        if max_triangles < 2 {
            return Err(ConfigError::InvalidTriangleLimit(max_triangles));
        }
        Ok(Self {
            tolerance,
            max_vertices,
            max_triangles,
        })
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            tolerance: AREA_EPSILON,
            max_vertices: MAX_VERTICES,
            max_triangles: MAX_TRIANGLES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the vertex limit cannot hold a single side face.
    InvalidVertexLimit(usize),
    /// Raised when the triangle limit cannot hold a single side face.
    InvalidTriangleLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be >= 4: {value}")
            }
            ConfigError::InvalidTriangleLimit(value) => {
                write!(f, "max_triangles must be >= 2: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
