/// Approximate equality for values produced by curve math.
///
/// Points from `evaluate`, de Casteljau splits and chord intersections pick up rounding error, so
/// a node position rebuilt from a split curve is compared to the original with a tolerance rather
/// than `==`. The default tolerance is per float type: `1e-9` for `f64` and `1e-6` for `f32`.
///
/// Callers that compare distances in user space (stitching segment ends, deduplicating
/// intersects) pass their own epsilon through the `*_eps` methods.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::core::traits::*;
/// // parameter recovered from a point lerped along a chord
/// let x = 0.1 + (0.7 - 0.1) * 0.3;
/// let t = (x - 0.1) / (0.7 - 0.1);
/// assert!(t.fuzzy_eq(0.3));
///
/// assert!(0.1f32.fuzzy_eq(0.1000001));
/// assert!(!1.0f64.fuzzy_eq(1.0001));
/// assert!(1.0f64.fuzzy_eq_eps(1.0001, 1e-3));
/// assert!((1e-12f64).fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default tolerance used by [FuzzyEq::fuzzy_eq] and [FuzzyEq::fuzzy_eq_zero].
    fn fuzzy_epsilon() -> Self;

    /// `true` if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// `true` if the magnitude of `self` is below `fuzzy_epsilon`, e.g. a cross product of
    /// (nearly) parallel chords.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($($ty:ty => $eps:expr),+ $(,)?) => {
        $(
            impl FuzzyEq for $ty {
                #[inline]
                fn fuzzy_epsilon() -> Self {
                    $eps
                }

                #[inline]
                fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    (*self - other).fuzzy_eq_zero_eps(fuzzy_epsilon)
                }

                #[inline]
                fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                    self.abs() < fuzzy_epsilon
                }
            }
        )+
    };
}

impl_fuzzy_eq! {
    f32 => 1.0e-6,
    f64 => 1.0e-9,
}
