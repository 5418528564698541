//! # Sweep Errors
//!
//! Error types for extrusion operations. All errors are explicit and carry
//! enough context to tell which input was rejected.
//!
//! ## Error Policy
//!
//! - NO partial meshes when an operation fails
//! - Malformed input is rejected, never truncated
//! - Errors include context for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a swept mesh.
///
/// ## Example
///
/// ```rust
/// use sweep_mesh::{extrude_flat, ExtrudeParams, SweepError};
///
/// match extrude_flat(&[0.0, 0.0, 0.0], &ExtrudeParams::along(glam::DVec3::Z)) {
///     Err(SweepError::InvalidPath { message }) => assert!(message.contains("2 points")),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SweepError {
    /// The path has fewer than 2 points, a flat length that is not a
    /// multiple of 3, or non-finite coordinates.
    #[error("Invalid path: {message}")]
    InvalidPath {
        /// What was wrong with the path
        message: String,
    },

    /// No sweep direction was supplied.
    #[error("Missing sweep direction: side faces and caps need a direction vector")]
    MissingDirection,

    /// The sweep direction is zero-length or not finite.
    #[error("Invalid direction: {message}")]
    InvalidDirection {
        /// What was wrong with the direction
        message: String,
    },

    /// The cap footprint self-intersects.
    #[error("Footprint is not a simple polygon: {message}")]
    NonSimplePolygon {
        /// Which edges intersect
        message: String,
    },

    /// The cap footprint encloses no area.
    #[error("Degenerate footprint: {message}")]
    DegenerateFootprint {
        /// Why the footprint cannot be capped
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertices the extrusion would generate
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Triangles the extrusion would generate
        count: usize,
        /// Configured limit
        max: usize,
    },
}

impl SweepError {
    /// Creates an invalid path error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    /// Creates an invalid direction error.
    pub fn invalid_direction(message: impl Into<String>) -> Self {
        Self::InvalidDirection {
            message: message.into(),
        }
    }

    /// Creates a non-simple polygon error.
    pub fn non_simple(message: impl Into<String>) -> Self {
        Self::NonSimplePolygon {
            message: message.into(),
        }
    }

    /// Creates a degenerate footprint error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateFootprint {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

// =============================================================================
// TESTS
// =============================================================================
