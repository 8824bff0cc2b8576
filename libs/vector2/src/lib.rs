//! # Vector2
//!
//! Immutable 2D vector value type and the closed-form vector algebra over it.
//!
//! All operations are pure functions of their inputs. The ones that can hit a
//! degenerate denominator (division by zero, normalizing or projecting onto
//! the zero vector, measuring an angle against the zero vector) return
//! [`VectorResult`] instead of silently producing NaN.
//!
//! ```rust
//! use vector2::{ops, Vector2, VectorError};
//!
//! let a = Vector2::new(1.0, 2.0);
//! let b = Vector2::new(3.0, 4.0);
//! assert_eq!(ops::add(a, b), Vector2::new(4.0, 6.0));
//! assert_eq!(ops::magnitude(Vector2::new(3.0, 4.0)), 5.0);
//! assert_eq!(ops::normalize(Vector2::ZERO), Err(VectorError::ZeroVectorNormalization));
//! ```

pub mod error;
pub mod ops;
pub mod tolerance;
pub mod vector;

pub use error::{VectorError, VectorResult};
pub use tolerance::ToleranceConfig;
pub use vector::{Point, Vector2};
