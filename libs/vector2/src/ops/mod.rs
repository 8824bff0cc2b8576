//! Closed-form 2D vector algebra.
//!
//! A flat set of pure functions over [`Vector2`]. Operations that divide by a
//! quantity derived from their inputs return [`VectorResult`]; all others are
//! total. Zero checks are exact, so tiny non-zero vectors are still accepted.
//!
//! # Examples
//! ```
//! use vector2::{ops, Vector2};
//!
//! let v = Vector2::new(1.0, 0.0);
//! let r = ops::rotate_vector(v, std::f32::consts::FRAC_PI_2);
//! assert!(r.approx_eq_default(Vector2::new(0.0, 1.0)));
//! ```

use log::debug;

use crate::error::{VectorError, VectorResult};
use crate::vector::Vector2;

// =============================================================================
// COMPONENT-WISE ARITHMETIC
// =============================================================================

/// Component-wise sum `a + b`.
#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x + b.x, a.y + b.y)
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x - b.x, a.y - b.y)
}

/// Reverses the direction of `v`.
#[inline]
pub fn negate(v: Vector2) -> Vector2 {
    Vector2::new(-v.x, -v.y)
}

/// Multiplies both components by `factor`, which may be zero or negative.
#[inline]
pub fn scale(v: Vector2, factor: f32) -> Vector2 {
    Vector2::new(v.x * factor, v.y * factor)
}

/// Divides both components by `divisor`.
///
/// # Errors
///
/// Returns [`VectorError::DivisionByZero`] when `divisor` is `0.0` or `-0.0`.
///
/// # Examples
/// ```
/// use vector2::{ops, Vector2, VectorError};
///
/// assert_eq!(ops::divide(Vector2::new(3.0, -6.0), 3.0), Ok(Vector2::new(1.0, -2.0)));
/// assert_eq!(ops::divide(Vector2::ONE, -0.0), Err(VectorError::DivisionByZero));
/// ```
pub fn divide(v: Vector2, divisor: f32) -> VectorResult<Vector2> {
    if divisor == 0.0 {
        debug!("divide: rejected zero divisor for {v}");
        return Err(VectorError::DivisionByZero);
    }
    Ok(Vector2::new(v.x / divisor, v.y / divisor))
}

// =============================================================================
// PRODUCTS AND LENGTHS
// =============================================================================

/// Dot product `a.x*b.x + a.y*b.y`.
#[inline]
pub fn dot_product(a: Vector2, b: Vector2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// 2D cross product `a.x*b.y - a.y*b.x`.
///
/// Equals the signed area of the parallelogram spanned by `a` and `b`;
/// positive when `b` lies counterclockwise of `a`.
#[inline]
pub fn cross_product(a: Vector2, b: Vector2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Squared length; cheaper than [`magnitude`] for comparisons.
///
/// Overflows to infinity for components above roughly `1.8e19` and
/// underflows to zero below roughly `1e-23`; use [`magnitude`] when the
/// exact length matters.
#[inline]
pub fn magnitude_squared(v: Vector2) -> f32 {
    dot_product(v, v)
}

/// Euclidean length, computed with `hypot` so the intermediate square
/// cannot overflow or underflow.
#[inline]
pub fn magnitude(v: Vector2) -> f32 {
    v.x.hypot(v.y)
}

/// Unit vector along `v`, or `None` when `v` has zero length.
fn unit(v: Vector2) -> Option<Vector2> {
    let length = magnitude(v);
    if length == 0.0 {
        return None;
    }
    Some(Vector2::new(v.x / length, v.y / length))
}

/// Scales `v` to unit length.
///
/// # Errors
///
/// Returns [`VectorError::ZeroVectorNormalization`] when the magnitude of `v`
/// is zero.
///
/// # Examples
/// ```
/// use vector2::{ops, Vector2, VectorError};
///
/// assert_eq!(ops::normalize(Vector2::new(0.0, 2.0)), Ok(Vector2::Y));
/// assert_eq!(ops::normalize(Vector2::new(1e-30, 0.0)), Ok(Vector2::X));
/// assert_eq!(ops::normalize(Vector2::ZERO), Err(VectorError::ZeroVectorNormalization));
/// ```
pub fn normalize(v: Vector2) -> VectorResult<Vector2> {
    unit(v).ok_or_else(|| {
        debug!("normalize: rejected zero-length vector {v}");
        VectorError::ZeroVectorNormalization
    })
}

/// Distance between the points `a` and `b`. Symmetric in its arguments.
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    magnitude(subtract(a, b))
}

/// Squared distance between the points `a` and `b`.
#[inline]
pub fn distance_squared(a: Vector2, b: Vector2) -> f32 {
    magnitude_squared(subtract(a, b))
}

// =============================================================================
// ANGLES
// =============================================================================

/// Unit vectors along `a` and `b`, or `ZeroVectorAngle` if either is zero.
fn angle_operands(op: &str, a: Vector2, b: Vector2) -> VectorResult<(Vector2, Vector2)> {
    match (unit(a), unit(b)) {
        (Some(ua), Some(ub)) => Ok((ua, ub)),
        _ => {
            debug!("{op}: rejected zero-length operand in {a} / {b}");
            Err(VectorError::ZeroVectorAngle)
        }
    }
}

/// Unsigned angle between `a` and `b` in radians, in `[0, π]`.
///
/// Equal to `acos(dot / (|a| * |b|))`. It is evaluated as
/// `atan2(|cross|, dot)` of the unit vectors, which stays accurate for
/// (anti)parallel inputs where `acos` loses precision.
///
/// # Errors
///
/// Returns [`VectorError::ZeroVectorAngle`] when either vector has zero
/// length.
///
/// # Examples
/// ```
/// use vector2::{ops, Vector2};
///
/// let angle = ops::angle_between(Vector2::X, Vector2::new(0.0, -3.0)).unwrap();
/// assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn angle_between(a: Vector2, b: Vector2) -> VectorResult<f32> {
    let (ua, ub) = angle_operands("angle_between", a, b)?;
    Ok(cross_product(ua, ub).abs().atan2(dot_product(ua, ub)))
}

/// Signed angle from `a` to `b` in radians, in `[-π, π]`.
///
/// Positive when `b` lies counterclockwise of `a`.
///
/// # Errors
///
/// Returns [`VectorError::ZeroVectorAngle`] when either vector has zero
/// length.
pub fn signed_angle(a: Vector2, b: Vector2) -> VectorResult<f32> {
    let (ua, ub) = angle_operands("signed_angle", a, b)?;
    Ok(cross_product(ua, ub).atan2(dot_product(ua, ub)))
}

/// Angle of `v` measured counterclockwise from the positive X axis.
///
/// Follows `f32::atan2`; the zero vector has heading `0.0`.
#[inline]
pub fn heading(v: Vector2) -> f32 {
    v.y.atan2(v.x)
}

// =============================================================================
// PROJECTION AND ROTATION
// =============================================================================

/// Component of `v` lying along `onto`: `u * dot(v, u)` with `u` the unit
/// vector along `onto`.
///
/// # Errors
///
/// Returns [`VectorError::ZeroVectorProjection`] when `onto` has zero length.
///
/// # Examples
/// ```
/// use vector2::{ops, Vector2};
///
/// let p = ops::project_vector(Vector2::new(2.0, 3.0), Vector2::new(5.0, 0.0)).unwrap();
/// assert_eq!(p, Vector2::new(2.0, 0.0));
/// ```
pub fn project_vector(v: Vector2, onto: Vector2) -> VectorResult<Vector2> {
    let u = unit(onto).ok_or_else(|| {
        debug!("project_vector: rejected zero-length target for {v}");
        VectorError::ZeroVectorProjection
    })?;
    Ok(scale(u, dot_product(v, u)))
}

/// Rotates `v` counterclockwise by `angle` radians about the origin.
pub fn rotate_vector(v: Vector2, angle: f32) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Counterclockwise quarter turn `(-y, x)`.
#[inline]
pub fn perpendicular(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Linear interpolation `a + (b - a) * t`. `t` is not clamped, so values
/// outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    add(a, scale(subtract(b, a), t))
}
