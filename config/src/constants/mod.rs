//! Numeric tolerances shared by the vector math crates.
//!
//! Each public item documents its purpose with a minimal usage example so
//! downstream crates avoid scattering float literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance for comparing vector components and lengths.
///
/// Single-precision arithmetic accumulates error quickly, so this is much
/// looser than `f32::EPSILON`. A normalized vector has length 1 within this
/// bound.
///
/// # Examples
/// ```
/// use config::constants::VECTOR_TOLERANCE;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() <= VECTOR_TOLERANCE
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-6));
/// ```
pub const VECTOR_TOLERANCE: f32 = 1.0e-5;

/// Absolute tolerance for comparing angles in radians.
///
/// # Examples
/// ```
/// use config::constants::ANGLE_TOLERANCE;
/// assert!(ANGLE_TOLERANCE < 1.0e-4);
/// ```
pub const ANGLE_TOLERANCE: f32 = 1.0e-6;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the comparison settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Absolute tolerance used by approximate comparisons.
    pub tolerance: f32,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting tolerances that are not positive
    /// finite numbers.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-3).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-3);
    /// assert!(GlobalConfig::new(f32::NAN).is_err());
    /// ```
    pub fn new(tolerance: f32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: VECTOR_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative, or not finite.
    InvalidTolerance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be a positive finite number: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
