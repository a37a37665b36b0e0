use super::{vec2, Vector2};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box defined by its `min` and `max` corners.
///
/// The default rect is the zero sized box at the origin, which is also what an empty set of
/// points produces.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect<T = f64> {
    pub min: Vector2<T>,
    pub max: Vector2<T>,
}

impl<T> Rect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(min: Vector2<T>, max: Vector2<T>) -> Self {
        Rect { min, max }
    }

    /// Smallest rect containing all `points`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clip_path_geom::core::math::*;
    /// let r = Rect::from_points([vec2(0.0, 0.0), vec2(10.0, 5.0), vec2(-5.0, 20.0)]);
    /// assert_eq!(r.min, vec2(-5.0, 0.0));
    /// assert_eq!(r.max, vec2(10.0, 20.0));
    /// assert_eq!(Rect::<f64>::from_points([]), Rect::default());
    /// ```
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        let mut iter = points.into_iter();
        let first = match iter.next() {
            Some(p) => p,
            None => return Rect::default(),
        };

        iter.fold(Rect::new(first, first), |acc, p| acc.include_point(p))
    }

    /// Grow the rect (if needed) so that it contains `point`.
    #[inline]
    pub fn include_point(&self, point: Vector2<T>) -> Self {
        Rect::new(
            vec2(
                num_traits::real::Real::min(self.min.x, point.x),
                num_traits::real::Real::min(self.min.y, point.y),
            ),
            vec2(
                num_traits::real::Real::max(self.max.x, point.x),
                num_traits::real::Real::max(self.max.y, point.y),
            ),
        )
    }

    #[inline]
    pub fn x(&self) -> T {
        self.min.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.min.y
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        (self.min + self.max).scale(T::half())
    }

    /// Test if `point` is inside the rect (boundary inclusive).
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Test if the rect overlaps `other` (touching edges count as overlapping).
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Smallest rect containing both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        self.include_point(other.min).include_point(other.max)
    }

    /// Grow the rect outward on every side by `amount`.
    #[inline]
    pub fn expand(&self, amount: T) -> Self {
        Rect::new(self.min.sub_scalar(amount), self.max.add_scalar(amount))
    }

    #[inline]
    pub fn to_aabb(&self) -> AABB<T> {
        AABB::new(self.min.x, self.min.y, self.max.x, self.max.y)
    }

    #[inline]
    pub fn from_aabb(aabb: &AABB<T>) -> Self {
        Rect::new(vec2(aabb.min_x, aabb.min_y), vec2(aabb.max_x, aabb.max_y))
    }
}

impl<T> From<AABB<T>> for Rect<T>
where
    T: Real,
{
    fn from(aabb: AABB<T>) -> Self {
        Rect::from_aabb(&aabb)
    }
}

impl<T> From<Rect<T>> for AABB<T>
where
    T: Real,
{
    fn from(rect: Rect<T>) -> Self {
        rect.to_aabb()
    }
}

impl<T> fmt::Display for Rect<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect(min: {}, max: {})", self.min, self.max)
    }
}
