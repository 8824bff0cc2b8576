//! # Error Types
//!
//! Errors for vector operations whose formula has a denominator that can be
//! zero. Non-finite inputs are not errors; they propagate through the
//! arithmetic as IEEE-754 values.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Degenerate-input errors raised by the checked vector operations.
///
/// ## Example
///
/// ```rust
/// use vector2::{ops, Vector2, VectorError};
///
/// match ops::divide(Vector2::new(1.0, 1.0), 0.0) {
///     Ok(v) => println!("quotient: {v}"),
///     Err(VectorError::DivisionByZero) => eprintln!("cannot divide by zero"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A vector was divided by a zero scalar.
    #[error("division of a vector by zero")]
    DivisionByZero,

    /// The zero vector has no direction to normalize to.
    #[error("cannot normalize a zero-length vector")]
    ZeroVectorNormalization,

    /// Projection onto the zero vector is undefined.
    #[error("cannot project onto a zero-length vector")]
    ZeroVectorProjection,

    /// An angle was requested against a zero-length vector.
    #[error("angle is undefined for a zero-length vector")]
    ZeroVectorAngle,
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for checked vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        assert!(VectorError::DivisionByZero.to_string().contains("by zero"));
        assert!(VectorError::ZeroVectorNormalization
            .to_string()
            .contains("normalize"));
        assert!(VectorError::ZeroVectorProjection
            .to_string()
            .contains("project"));
        assert!(VectorError::ZeroVectorAngle.to_string().contains("angle"));
    }

    /// Test error types are Send + Sync so callers can box them freely.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<VectorError>();
    }
}
