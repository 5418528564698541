//! Tests for the validated sweep configuration.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::SweepConfig;
/// let cfg = SweepConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = SweepConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert_eq!(cfg.max_vertices, MAX_VERTICES);
    assert_eq!(cfg.max_triangles, MAX_TRIANGLES);
    assert_eq!(
        SweepConfig::new(cfg.tolerance, cfg.max_vertices, cfg.max_triangles),
        Ok(cfg)
    );
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::SweepConfig;
/// assert!(SweepConfig::new(0.0, 16, 16).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        SweepConfig::new(0.0, 16, 16).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert!(matches!(
        SweepConfig::new(f64::NAN, 16, 16),
        Err(ConfigError::InvalidTolerance(_))
    ));
    assert_eq!(
        SweepConfig::new(1.0e-9, 3, 16).unwrap_err(),
        ConfigError::InvalidVertexLimit(3)
    );
    assert_eq!(
        SweepConfig::new(1.0e-9, 16, 1).unwrap_err(),
        ConfigError::InvalidTriangleLimit(1)
    );
}

#[test]
fn config_error_messages_name_the_field() {
    assert!(ConfigError::InvalidTolerance(-1.0)
        .to_string()
        .contains("tolerance"));
    assert!(ConfigError::InvalidVertexLimit(0)
        .to_string()
        .contains("max_vertices"));
    assert!(ConfigError::InvalidTriangleLimit(0)
        .to_string()
        .contains("max_triangles"));
}
