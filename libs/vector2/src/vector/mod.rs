//! 2D vector value type.
//!
//! [`Vector2`] is a plain `Copy` pair of `f32` coordinates laid out as
//! `x` then `y`, matching the `struct { float x; float y; }` layout used by
//! C graphics libraries. Methods delegate to the free functions in
//! [`crate::ops`]; every method takes `self` by value and returns a new value.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::VectorResult;
use crate::ops;

/// A displacement or position in 2D space.
///
/// # Examples
/// ```
/// use vector2::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.x, 3.0);
/// assert_eq!(v.magnitude(), 5.0);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    /// The horizontal component.
    pub x: f32,
    /// The vertical component.
    pub y: f32,
}

/// A [`Vector2`] used as a position rather than a displacement.
pub type Point = Vector2;

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// Both components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `true` when both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Multiplies both components by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        ops::scale(self, factor)
    }

    /// Divides both components by `divisor`, rejecting a zero divisor.
    ///
    /// # Examples
    /// ```
    /// use vector2::{Vector2, VectorError};
    /// assert_eq!(Vector2::new(2.0, 4.0).try_div(2.0), Ok(Vector2::new(1.0, 2.0)));
    /// assert_eq!(Vector2::ONE.try_div(0.0), Err(VectorError::DivisionByZero));
    /// ```
    #[inline]
    pub fn try_div(self, divisor: f32) -> VectorResult<Self> {
        ops::divide(self, divisor)
    }

    /// Dot product with `other`.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        ops::dot_product(self, other)
    }

    /// Scalar 2D cross product with `other` (the z component of the 3D cross).
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        ops::cross_product(self, other)
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        ops::magnitude_squared(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f32 {
        ops::magnitude(self)
    }

    /// Unit vector with the same direction.
    #[inline]
    pub fn normalize(self) -> VectorResult<Self> {
        ops::normalize(self)
    }

    /// Distance between the points `self` and `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        ops::distance(self, other)
    }

    /// Squared distance between the points `self` and `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        ops::distance_squared(self, other)
    }

    /// Unsigned angle to `other` in radians, in `[0, π]`.
    #[inline]
    pub fn angle_between(self, other: Self) -> VectorResult<f32> {
        ops::angle_between(self, other)
    }

    /// Signed angle from `self` to `other` in radians, positive when
    /// counterclockwise.
    #[inline]
    pub fn signed_angle(self, other: Self) -> VectorResult<f32> {
        ops::signed_angle(self, other)
    }

    /// Angle of this vector from the positive X axis.
    #[inline]
    pub fn heading(self) -> f32 {
        ops::heading(self)
    }

    /// Component of `self` lying along `onto`.
    #[inline]
    pub fn project_onto(self, onto: Self) -> VectorResult<Self> {
        ops::project_vector(self, onto)
    }

    /// Rotates counterclockwise by `angle` radians about the origin.
    #[inline]
    #[must_use]
    pub fn rotate(self, angle: f32) -> Self {
        ops::rotate_vector(self, angle)
    }

    /// Counterclockwise quarter turn.
    #[inline]
    #[must_use]
    pub fn perpendicular(self) -> Self {
        ops::perpendicular(self)
    }

    /// Linear interpolation towards `other`; `t` is not clamped.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        ops::lerp(self, other, t)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        ops::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ops::subtract(self, rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        ops::negate(self)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        ops::scale(self, rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        ops::scale(rhs, self)
    }
}

/// Unchecked division with IEEE-754 semantics: dividing by zero yields
/// infinite or NaN components. Use [`Vector2::try_div`] or [`ops::divide`]
/// to reject a zero divisor.
impl Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    #[inline]
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl From<glam::Vec2> for Vector2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}
