//! Tests for the shared configuration snapshot.

use super::*;

/// Ensures the default snapshot carries the vector tolerance.
#[test]
fn default_config_uses_vector_tolerance() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.tolerance, VECTOR_TOLERANCE);
}

#[test]
fn new_accepts_positive_tolerance() {
    let cfg = GlobalConfig::new(0.25).unwrap();
    assert_eq!(cfg.tolerance, 0.25);
}

/// Validates the builder rejects zero, negative and non-finite values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(-1.0).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0)
    );
    assert_eq!(
        GlobalConfig::new(f32::INFINITY).unwrap_err(),
        ConfigError::InvalidTolerance(f32::INFINITY)
    );
    assert!(GlobalConfig::new(f32::NAN).is_err());
}

#[test]
fn error_display_names_the_value() {
    let err = ConfigError::InvalidTolerance(-2.0);
    assert!(err.to_string().contains("positive"));
    assert!(err.to_string().contains("-2"));
}
