use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// [IndexableNum] is required so curve bounding boxes can be loaded into a spatial index.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + std::fmt::Display
    + IndexableNum
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    #[inline]
    fn six() -> Self {
        Self::three() + Self::three()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Convert an `f64` constant into `Self`.
    #[inline]
    fn from_f64(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap()
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn three() -> Self {
        3.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }

    #[inline]
    fn six() -> Self {
        6.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn three() -> Self {
        3.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }

    #[inline]
    fn six() -> Self {
        6.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}
