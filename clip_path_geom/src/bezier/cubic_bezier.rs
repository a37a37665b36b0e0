use super::{BezierIntersect, BezierIntersectOptions};
use crate::core::{
    math::{clamp, lerp, quadratic_solutions, vec2, LineSegment, Rect, Vector2},
    traits::Real,
};

/// Number of bisection steps used to map a chord parameter back onto a flat sub-curve.
const CHORD_PARAM_REFINE_STEPS: usize = 32;

/// Cubic Bezier curve defined by 4 control points.
///
/// `p0` is the start point, `p1` and `p2` are the interior control points, and `p3` is the end
/// point. The curve is parametrized by `t` in `[0, 1]`.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::bezier::*;
/// # use clip_path_geom::core::math::*;
/// # use clip_path_geom::core::traits::*;
/// let arc = CubicBezier::new(
///     vec2(0.0, 0.0),
///     vec2(0.0, 10.0),
///     vec2(10.0, 10.0),
///     vec2(10.0, 0.0),
/// );
/// assert!(arc.evaluate(0.5).fuzzy_eq(vec2(5.0, 7.5)));
/// let bbox = arc.bounding_box();
/// assert!(bbox.max.y.fuzzy_eq(7.5));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicBezier<T = f64> {
    pub p0: Vector2<T>,
    pub p1: Vector2<T>,
    pub p2: Vector2<T>,
    pub p3: Vector2<T>,
}

impl<T> CubicBezier<T>
where
    T: Real,
{
    #[inline]
    pub fn new(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>, p3: Vector2<T>) -> Self {
        CubicBezier { p0, p1, p2, p3 }
    }

    /// Straight curve from `start` to `end` with control points at one third and two thirds of
    /// the way (uniform parametrization).
    #[inline]
    pub fn line(start: Vector2<T>, end: Vector2<T>) -> Self {
        let third = T::one() / T::three();
        CubicBezier::new(
            start,
            start.lerp(end, third),
            start.lerp(end, T::two() * third),
            end,
        )
    }

    /// Control points in order.
    #[inline]
    pub fn points(&self) -> [Vector2<T>; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Chord from `p0` to `p3`.
    #[inline]
    pub fn chord(&self) -> LineSegment<T> {
        LineSegment::new(self.p0, self.p3)
    }

    /// Point on the curve at parametric value `t` using the cubic Bernstein polynomial.
    ///
    /// `evaluate(0)` is exactly `p0` and `evaluate(1)` is exactly `p3`.
    pub fn evaluate(&self, t: T) -> Vector2<T> {
        let three = T::three();
        let mt = T::one() - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        let w0 = mt2 * mt;
        let w1 = three * mt2 * t;
        let w2 = three * mt * t2;
        let w3 = t2 * t;

        vec2(
            self.p0.x * w0 + self.p1.x * w1 + self.p2.x * w2 + self.p3.x * w3,
            self.p0.y * w0 + self.p1.y * w1 + self.p2.y * w2 + self.p3.y * w3,
        )
    }

    /// Derivative of the curve at `t` (not normalized).
    ///
    /// The derivative is the quadratic Bezier with control points `3(p1 - p0)`, `3(p2 - p1)`, and
    /// `3(p3 - p2)`.
    pub fn derivative(&self, t: T) -> Vector2<T> {
        let three = T::three();
        let d0 = (self.p1 - self.p0).scale(three);
        let d1 = (self.p2 - self.p1).scale(three);
        let d2 = (self.p3 - self.p2).scale(three);
        let mt = T::one() - t;

        d0.scale(mt * mt) + d1.scale(T::two() * mt * t) + d2.scale(t * t)
    }

    /// Unit tangent at `t`, or the zero vector where the derivative vanishes.
    #[inline]
    pub fn tangent(&self, t: T) -> Vector2<T> {
        self.derivative(t).normalize()
    }

    /// Split the curve at `t` using de Casteljau subdivision, returns `[left, right]`.
    ///
    /// `left` covers `[0, t]` and `right` covers `[t, 1]` of this curve, each reparametrized to
    /// `[0, 1]`.
    pub fn split(&self, t: T) -> [Self; 2] {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);

        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);

        let on_curve = p012.lerp(p123, t);

        [
            CubicBezier::new(self.p0, p01, p012, on_curve),
            CubicBezier::new(on_curve, p123, p23, self.p3),
        ]
    }

    /// Sub-curve covering the parametric interval `[t_start, t_end]` of this curve.
    ///
    /// Extracted with two splits: at `t_start`, then the remainder at `t_end` renormalized to the
    /// remainder's own parametrization.
    pub fn sub_curve(&self, t_start: T, t_end: T) -> Self {
        let right = if t_start > T::zero() {
            self.split(t_start)[1]
        } else {
            *self
        };

        let remaining = T::one() - t_start;
        if remaining.fuzzy_eq_zero() {
            return right;
        }

        let t_end_remapped = (t_end - t_start) / remaining;
        if t_end_remapped.fuzzy_eq(T::one()) || t_end_remapped > T::one() {
            return right;
        }

        right.split(t_end_remapped)[0]
    }

    /// Same curve traversed in the opposite direction (`p3, p2, p1, p0`).
    #[inline]
    pub fn reverse(&self) -> Self {
        CubicBezier::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Tight axis aligned bounding box of the curve over `t` in `[0, 1]`.
    ///
    /// Union of the end points with the axis local extrema found at the roots of the derivative.
    pub fn bounding_box(&self) -> Rect<T> {
        let mut bbox = Rect::from_points([self.p0, self.p3]);
        for t in axis_extrema(self.p0.x, self.p1.x, self.p2.x, self.p3.x)
            .into_iter()
            .flatten()
        {
            let x = self.evaluate(t).x;
            bbox.min.x = num_traits::real::Real::min(bbox.min.x, x);
            bbox.max.x = num_traits::real::Real::max(bbox.max.x, x);
        }

        for t in axis_extrema(self.p0.y, self.p1.y, self.p2.y, self.p3.y)
            .into_iter()
            .flatten()
        {
            let y = self.evaluate(t).y;
            bbox.min.y = num_traits::real::Real::min(bbox.min.y, y);
            bbox.max.y = num_traits::real::Real::max(bbox.max.y, y);
        }

        bbox
    }

    /// Test if both interior control points are within `tolerance` distance of the chord.
    pub fn is_flat(&self, tolerance: T) -> bool {
        let chord = self.chord();
        let tol_sq = tolerance * tolerance;
        chord.distance_to_point_squared(self.p1) < tol_sq
            && chord.distance_to_point_squared(self.p2) < tol_sq
    }

    /// Find all intersects between this curve and `other` using default options.
    ///
    /// See [CubicBezier::intersects_with_options] for details.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clip_path_geom::bezier::*;
    /// # use clip_path_geom::core::math::*;
    /// # use clip_path_geom::core::traits::*;
    /// let horizontal = CubicBezier::line(vec2(0.0, 5.0), vec2(10.0, 5.0));
    /// let vertical = CubicBezier::line(vec2(5.0, 0.0), vec2(5.0, 10.0));
    /// let intrs = horizontal.intersects(&vertical);
    /// assert_eq!(intrs.len(), 1);
    /// assert!(intrs[0].point.fuzzy_eq_eps(vec2(5.0, 5.0), 0.1));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> Vec<BezierIntersect<T>> {
        self.intersects_with_options(other, &BezierIntersectOptions::new())
    }

    /// Find all intersects between this curve and `other` by adaptive subdivision.
    ///
    /// Curve pairs whose bounding boxes do not overlap are pruned. Otherwise both curves are split
    /// at `t = 0.5` and all four sub-curve pairs are searched until either both sub-curves are flat
    /// under `options.threshold` or `options.max_depth` is exceeded, at which point the chords are
    /// intersected as line segments. Intersects closer than `options.threshold` to one already
    /// found are dropped.
    ///
    /// Parallel or collinear chords give no intersect, so tangential contact and shared end
    /// points are only found when subdivision happens to produce crossing chords.
    pub fn intersects_with_options(
        &self,
        other: &Self,
        options: &BezierIntersectOptions<T>,
    ) -> Vec<BezierIntersect<T>> {
        let mut found = Vec::new();
        let full_range = (T::zero(), T::one());
        find_intersects(
            self,
            full_range,
            other,
            full_range,
            0,
            options,
            &mut found,
        );

        let merge_dist_sq = options.threshold * options.threshold;
        let mut unique: Vec<BezierIntersect<T>> = Vec::with_capacity(found.len());
        for intr in found {
            let is_dup = unique
                .iter()
                .any(|u| u.point.distance_to_squared(intr.point) < merge_dist_sq);
            if !is_dup {
                unique.push(intr);
            }
        }

        unique
    }

    /// Map a parametric value `s` along the chord to the curve parameter `u` whose point projects
    /// onto the chord at `s`.
    ///
    /// Only meaningful for (near) flat curves where the projection is monotonic. Falls back to `s`
    /// for a degenerate chord.
    pub fn chord_param_to_curve_param(&self, s: T) -> T {
        let chord_dir = self.p3 - self.p0;
        let chord_len_sq = chord_dir.length_squared();
        if chord_len_sq.fuzzy_eq_zero() {
            return clamp(s, T::zero(), T::one());
        }

        let projected = |u: T| (self.evaluate(u) - self.p0).dot(chord_dir) / chord_len_sq;
        let mut lo = T::zero();
        let mut hi = T::one();
        for _ in 0..CHORD_PARAM_REFINE_STEPS {
            let mid = (lo + hi) * T::half();
            if projected(mid) < s {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        (lo + hi) * T::half()
    }
}

/// Parametric values in `(0, 1)` where the derivative of one coordinate of the curve is zero.
fn axis_extrema<T>(p0: T, p1: T, p2: T, p3: T) -> [Option<T>; 2]
where
    T: Real,
{
    let three = T::three();
    let a = three * (-p0 + three * p1 - three * p2 + p3);
    let b = T::six() * (p0 - T::two() * p1 + p2);
    let c = three * (p1 - p0);

    let in_domain = |t: T| {
        if t > T::zero() && t < T::one() {
            Some(t)
        } else {
            None
        }
    };

    if a.abs() < T::fuzzy_epsilon() {
        if b.abs() > T::fuzzy_epsilon() {
            return [in_domain(-c / b), None];
        }
        return [None, None];
    }

    let discriminant = b * b - T::four() * a * c;
    if discriminant < T::zero() {
        return [None, None];
    }

    let (t1, t2) = quadratic_solutions(a, b, c, discriminant.sqrt());
    [in_domain(t1), in_domain(t2)]
}

/// Recursive subdivision step, `range1` and `range2` are the parametric intervals `c1` and `c2`
/// cover on the original curves.
fn find_intersects<T>(
    c1: &CubicBezier<T>,
    range1: (T, T),
    c2: &CubicBezier<T>,
    range2: (T, T),
    depth: usize,
    options: &BezierIntersectOptions<T>,
    found: &mut Vec<BezierIntersect<T>>,
) where
    T: Real,
{
    if !c1.bounding_box().intersects(&c2.bounding_box()) {
        return;
    }

    if depth > options.max_depth || (c1.is_flat(options.threshold) && c2.is_flat(options.threshold))
    {
        if let Some(intr) = chord_intersect(c1, range1, c2, range2) {
            found.push(intr);
        }
        return;
    }

    let half = T::half();
    let [c1_left, c1_right] = c1.split(half);
    let [c2_left, c2_right] = c2.split(half);
    let mid1 = lerp(range1.0, range1.1, half);
    let mid2 = lerp(range2.0, range2.1, half);

    let halves1 = [(c1_left, (range1.0, mid1)), (c1_right, (mid1, range1.1))];
    let halves2 = [(c2_left, (range2.0, mid2)), (c2_right, (mid2, range2.1))];

    for (sub1, sub_range1) in halves1.iter() {
        for (sub2, sub_range2) in halves2.iter() {
            find_intersects(
                sub1,
                *sub_range1,
                sub2,
                *sub_range2,
                depth + 1,
                options,
                found,
            );
        }
    }
}

/// Base case: intersect the chords of two (flat) sub-curves and map the result back to the
/// original curves.
fn chord_intersect<T>(
    c1: &CubicBezier<T>,
    range1: (T, T),
    c2: &CubicBezier<T>,
    range2: (T, T),
) -> Option<BezierIntersect<T>>
where
    T: Real,
{
    let chord1 = c1.chord();
    let chord2 = c2.chord();

    // parallel/collinear (including zero length) chords have no determinate crossing
    let denom = (chord1.end - chord1.start).cross(chord2.end - chord2.start);
    if denom.fuzzy_eq_zero() {
        return None;
    }

    let (s1, s2) = chord1.intersect(&chord2).crossing()?;
    let point = chord1.point_at(s1);

    let to_global = |range: (T, T), u: T| clamp(lerp(range.0, range.1, u), T::zero(), T::one());
    let t1 = to_global(range1, c1.chord_param_to_curve_param(s1));
    let t2 = to_global(range2, c2.chord_param_to_curve_param(s2));

    Some(BezierIntersect::new(point, t1, t2))
}
