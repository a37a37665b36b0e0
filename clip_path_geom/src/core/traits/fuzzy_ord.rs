use super::FuzzyEq;

/// Tolerant ordering, mostly for checking curve parameters against the `[0, 1]` domain and
/// points against bounding box extents.
///
/// Both comparisons lean towards `true`: a value within epsilon of the bound counts as being on
/// the accepted side, so an intersect found at `t = 1.0000000001` still belongs to the curve.
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other - fuzzy_epsilon`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// `self < other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// `min <= self <= max`, with both bounds widened by `fuzzy_epsilon`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clip_path_geom::core::traits::*;
    /// // parameter slightly past the end of the curve with a loose epsilon
    /// assert!(1.01f64.fuzzy_in_range_eps(0.0, 1.0, 0.05));
    /// assert!((-0.01f64).fuzzy_in_range_eps(0.0, 1.0, 0.05));
    /// assert!(!1.5f64.fuzzy_in_range_eps(0.0, 1.0, 1e-9));
    /// // exact bounds are inside
    /// assert!(0.0f32.fuzzy_in_range(0.0, 1.0));
    /// assert!(1.0f64.fuzzy_in_range(0.0, 1.0));
    ///```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_ord {
    ($($ty:ty),+) => {
        $(
            impl FuzzyOrd for $ty {
                #[inline]
                fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    *self > other - fuzzy_epsilon
                }

                #[inline]
                fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    *self < other + fuzzy_epsilon
                }
            }
        )+
    };
}

impl_fuzzy_ord!(f32, f64);
