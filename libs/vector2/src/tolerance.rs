//! Approximate comparison helpers building on the shared `config` crate.
//!
//! Floating-point results such as a rotated or normalized vector are rarely
//! bit-exact, so comparisons go through an absolute tolerance. The default
//! comes from [`config::constants::VECTOR_TOLERANCE`].

use config::constants::{ConfigError, GlobalConfig, VECTOR_TOLERANCE};

use crate::vector::Vector2;

/// Returns `true` when `a` and `b` differ by at most `tolerance`.
///
/// # Examples
/// ```
/// use vector2::tolerance::approx_eq;
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-6));
/// assert!(!approx_eq(1.0, 1.1, 1e-6));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Comparison configuration wrapper.
///
/// # Examples
/// ```
/// use vector2::{ToleranceConfig, Vector2};
///
/// let cfg = ToleranceConfig::new(0.5).unwrap();
/// assert!(cfg.vectors_match(Vector2::ONE, Vector2::new(1.25, 0.75)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Absolute tolerance applied per component.
    pub tolerance: f32,
}

impl ToleranceConfig {
    /// Creates a configuration from an explicit tolerance.
    ///
    /// # Errors
    ///
    /// Fails when `tolerance` is not a positive finite number.
    pub fn new(tolerance: f32) -> Result<Self, ToleranceConfigError> {
        GlobalConfig::new(tolerance)
            .map(|cfg| Self {
                tolerance: cfg.tolerance,
            })
            .map_err(ToleranceConfigError)
    }

    /// Component-wise comparison of two vectors under this tolerance.
    #[inline]
    pub fn vectors_match(&self, a: Vector2, b: Vector2) -> bool {
        a.approx_eq(b, self.tolerance)
    }

    /// Scalar comparison under this tolerance.
    #[inline]
    pub fn scalars_match(&self, a: f32, b: f32) -> bool {
        approx_eq(a, b, self.tolerance)
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            tolerance: VECTOR_TOLERANCE,
        }
    }
}

/// Error wrapper for an invalid tolerance.
#[derive(Debug, PartialEq)]
pub struct ToleranceConfigError(ConfigError);

impl std::fmt::Display for ToleranceConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ToleranceConfigError {}

impl Vector2 {
    /// Returns `true` when each component differs by at most `tolerance`.
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: f32) -> bool {
        approx_eq(self.x, other.x, tolerance) && approx_eq(self.y, other.y, tolerance)
    }

    /// [`Vector2::approx_eq`] with the workspace default tolerance.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// assert!(Vector2::new(1.0, 2.0).approx_eq_default(Vector2::new(1.000_001, 2.0)));
    /// ```
    #[inline]
    pub fn approx_eq_default(self, other: Self) -> bool {
        self.approx_eq(other, VECTOR_TOLERANCE)
    }
}
