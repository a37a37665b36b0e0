use super::base_math::{lerp, round_to_precision, to_degrees};
use crate::core::{errors::GeometryError, traits::Real};
use std::{fmt, ops};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable 2D point/vector value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Create a vector with both components set to 1.
    #[inline]
    pub fn one() -> Self {
        Vector2::new(T::one(), T::one())
    }

    #[inline]
    pub fn from_array(arr: [T; 2]) -> Self {
        Vector2::new(arr[0], arr[1])
    }

    #[inline]
    pub fn to_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Add `value` to both components.
    #[inline]
    pub fn add_scalar(&self, value: T) -> Self {
        vec2(self.x + value, self.y + value)
    }

    /// Subtract `value` from both components.
    #[inline]
    pub fn sub_scalar(&self, value: T) -> Self {
        vec2(self.x - value, self.y - value)
    }

    /// Divide both components by `divisor`.
    ///
    /// Returns [GeometryError::DivisionByZero] if `divisor` is fuzzy equal to zero, see the `Div`
    /// operator for the panicking version.
    #[inline]
    pub fn try_div(&self, divisor: T) -> Result<Self, GeometryError> {
        if divisor.fuzzy_eq_zero() {
            return Err(GeometryError::division_by_zero(divisor));
        }

        Ok(vec2(self.x / divisor, self.y / divisor))
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product, also known as the perpendicular dot product
    /// (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize the vector (length = 1).
    ///
    /// A zero length vector normalizes to the zero vector.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len.fuzzy_eq_zero() {
            return Vector2::zero();
        }

        self.scale(T::one() / len)
    }

    #[inline]
    pub fn distance_to(&self, other: Self) -> T {
        (self - other).length()
    }

    #[inline]
    pub fn distance_to_squared(&self, other: Self) -> T {
        (self - other).length_squared()
    }

    /// Polar angle of the vector in radians (`atan2(y, x)`).
    #[inline]
    pub fn angle(&self) -> T {
        T::atan2(self.y, self.x)
    }

    #[inline]
    pub fn angle_degrees(&self) -> T {
        to_degrees(self.angle())
    }

    /// Linear interpolation from `self` (at `t = 0`) to `other` (at `t = 1`).
    #[inline]
    pub fn lerp(&self, other: Self, t: T) -> Self {
        vec2(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }

    /// Round both components to `precision` decimal places.
    #[inline]
    pub fn round(&self, precision: i32) -> Self {
        vec2(
            round_to_precision(self.x, precision),
            round_to_precision(self.y, precision),
        )
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Create perpendicular vector (rotated 90 degrees counter clockwise).
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        let translated = self - origin;

        let (s, c) = angle.sin_cos();
        let rotated = vec2(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        );

        rotated + origin
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

impl<T> fmt::Display for Vector2<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Neg for &Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Real> ops::Div<T> for Vector2<T> {
    type Output = Vector2<T>;

    /// # Panics
    ///
    /// Panics if `rhs` is fuzzy equal to zero, there is no meaningful result to fall back to. Use
    /// [Vector2::try_div] to handle the case.
    fn div(self, rhs: T) -> Self::Output {
        match self.try_div(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}
