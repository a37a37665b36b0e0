use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Clamp `value` to be within `min` and `max` (inclusive).
///
/// # Examples
///
/// ```
/// # use clip_path_geom::core::math::*;
/// assert_eq!(clamp(10.0, 0.0, 5.0), 5.0);
/// assert_eq!(clamp(-5.0, 0.0, 5.0), 0.0);
/// assert_eq!(clamp(3.0, 0.0, 5.0), 3.0);
/// ```
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Real,
{
    num_traits::real::Real::max(min, num_traits::real::Real::min(max, value))
}

/// Linear interpolation between `a` (at `t = 0`) and `b` (at `t = 1`).
///
/// Note `lerp(a, b, 0.0)` is exactly `a`.
#[inline]
pub fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Real,
{
    a + (b - a) * t
}

/// Round `value` to `precision` decimal places.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::core::math::*;
/// assert_eq!(round_to_precision(1.2345, 2), 1.23);
/// assert_eq!(round_to_precision(1.23456, 3), 1.235);
/// ```
#[inline]
pub fn round_to_precision<T>(value: T, precision: i32) -> T
where
    T: Real,
{
    let factor = T::from_f64(10.0).powi(precision);
    (value * factor).round() / factor
}

/// Convert `degrees` to radians.
#[inline]
pub fn to_radians<T>(degrees: T) -> T
where
    T: Real,
{
    degrees * T::pi() / T::from_f64(180.0)
}

/// Convert `radians` to degrees.
#[inline]
pub fn to_degrees<T>(radians: T) -> T
where
    T: Real,
{
    radians * T::from_f64(180.0) / T::pi()
}

/// Returns the solutions to the quadratic equation.
///
/// Quadratic equation is `-b +/- sqrt(b * b - 4 * a * c) / (2 * a)`.
/// With the `sqrt_discriminant` defined as `sqrt(b * b - 4 * a * c)`.
///
/// The purpose of this function is to minimize error in the process of finding solutions
/// to the quadratic equation. Caller must ensure `a` is not zero.
#[inline]
pub fn quadratic_solutions<T>(a: T, b: T, c: T, sqrt_discriminant: T) -> (T, T)
where
    T: Real,
{
    debug_assert!(
        (b * b - T::four() * a * c)
            .sqrt()
            .fuzzy_eq(sqrt_discriminant),
        "discriminant is not valid"
    );
    // Avoids loss in precision due to taking the difference of two floating point values that are
    // very near each other in value.
    // https://math.stackexchange.com/questions/311382/solving-a-quadratic-equation-with-precision-when-using-floating-point-variables
    let denom = T::two() * a;
    let sol1 = if b < T::zero() {
        (-b + sqrt_discriminant) / denom
    } else {
        (-b - sqrt_discriminant) / denom
    };

    if sol1 == T::zero() {
        // b and discriminant both zero, double root at zero
        return (sol1, sol1);
    }

    let sol2 = (c / a) / sol1;

    (sol1, sol2)
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value on the line segment going from `p0` to `p1` at the `point` given.
///
/// Note this function assumes the `point` is on the line and properly handles the cases of vertical
/// and horizontal lines by using the `epsilon` parameter to fuzzy compare for when `p0.x == p1.x`.
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> T
where
    T: Real,
{
    if p0.x.fuzzy_eq_eps(p1.x, epsilon) {
        // vertical segment, use y coordinate
        (point.y - p0.y) / (p1.y - p0.y)
    } else {
        (point.x - p0.x) / (p1.x - p0.x)
    }
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// The projection is clamped to the segment, a zero length segment always returns `p0`.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}
