//! Supporting public types used by the curve intersection methods.

use crate::core::{math::Vector2, traits::Real};

/// Struct to hold options parameters when intersecting two cubic Bezier curves.
#[derive(Debug, Clone, Copy)]
pub struct BezierIntersectOptions<T>
where
    T: Real,
{
    /// Flatness tolerance used to stop subdividing, also the distance below which two found
    /// intersect points are merged into one.
    pub threshold: T,
    /// Maximum subdivision depth. Once exceeded the sub-curves are treated as their chords
    /// regardless of flatness.
    pub max_depth: usize,
}

impl<T> BezierIntersectOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            threshold: T::from_f64(0.1),
            max_depth: 12,
        }
    }
}

impl<T> Default for BezierIntersectOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A single intersect found between two cubic Bezier curves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BezierIntersect<T = f64> {
    /// Intersect position.
    pub point: Vector2<T>,
    /// Parametric value on the first curve (`self` in [CubicBezier::intersects](super::CubicBezier::intersects)).
    pub t1: T,
    /// Parametric value on the second curve.
    pub t2: T,
}

impl<T> BezierIntersect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(point: Vector2<T>, t1: T, t2: T) -> Self {
        Self { point, t1, t2 }
    }
}
