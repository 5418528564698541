//! # Config Crate
//!
//! Centralized configuration constants for the sweep mesh pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! extrusion engine and the WASM boundary agree on tolerances and limits.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, SweepConfig, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(approx_zero(value));
//! assert!(value.abs() < EPSILON);
//!
//! // Engine limits come from a validated snapshot
//! let config = SweepConfig::default();
//! assert!(config.max_vertices > 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
