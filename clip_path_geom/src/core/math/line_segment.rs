use super::{
    base_math::{line_seg_closest_point, min_max, parametric_from_point, point_from_parametric},
    Vector2,
};
use crate::core::traits::Real;

/// Straight line segment from `start` to `end`.
///
/// Used as the flat approximation of a cubic curve (its chord) once subdivision bottoms out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T> LineSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> T {
        self.start.distance_to(self.end)
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.start.distance_to_squared(self.end)
    }

    /// Unit direction vector from `start` to `end` (zero vector if the segment is a point).
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        (self.end - self.start).normalize()
    }

    /// Point at parametric value `t` (`t = 0` is `start`, `t = 1` is `end`).
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        point_from_parametric(self.start, self.end, t)
    }

    /// Closest point on the segment to `point` (projection clamped to the segment end points).
    #[inline]
    pub fn project_point(&self, point: Vector2<T>) -> Vector2<T> {
        line_seg_closest_point(self.start, self.end, point)
    }

    #[inline]
    pub fn distance_to_point_squared(&self, point: Vector2<T>) -> T {
        point.distance_to_squared(self.project_point(point))
    }

    #[inline]
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        self.distance_to_point_squared(point).sqrt()
    }

    /// Classify the intersect between this segment and `other`, see [line_line_intr].
    #[inline]
    pub fn intersect(&self, other: &Self) -> LineLineIntr<T> {
        line_line_intr(self.start, self.end, other.start, other.end)
    }
}

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// No intersect: segments are parallel and not collinear, or distinct points.
    NoIntersect,
    /// Segments cross (or touch) at one point.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Segments are collinear and overlap each other by some amount.
    Overlapping {
        /// Parametric value for start of coincidence along second segment.
        seg2_t0: T,
        /// Parametric value for end of coincidence along second segment.
        seg2_t1: T,
    },
    /// The infinite lines intersect but one or both of the segments must be extended to reach it.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

impl<T> LineLineIntr<T>
where
    T: Real,
{
    /// Returns the parametric values of the intersect if the segments meet at a single point.
    ///
    /// Overlapping collinear segments have no single crossing point and return `None`.
    #[inline]
    pub fn crossing(&self) -> Option<(T, T)> {
        match *self {
            LineLineIntr::TrueIntersect { seg1_t, seg2_t } => Some((seg1_t, seg2_t)),
            _ => None,
        }
    }
}

/// Finds the intersect between the line segments `v1->v2` and `u1->u2`.
///
/// Segments are processed in parametric form `P(t) = p0 + t * (p1 - p0)` using the 2D cross
/// product (see <http://geomalgorithms.com/a05-_intersect-1.html>). Parametric values are
/// fuzzy compared at length scale so the epsilon means the same thing for long and short segments.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::core::math::*;
/// let v1 = Vector2::new(0.0, 0.0);
/// let v2 = Vector2::new(1.0, 0.0);
/// let u1 = Vector2::new(0.5, -1.0);
/// let u2 = Vector2::new(0.5, 1.0);
/// if let LineLineIntr::TrueIntersect { seg1_t, seg2_t } = line_line_intr(v1, v2, u1, u2) {
///     assert_eq!(seg1_t, 0.5);
///     assert_eq!(seg2_t, 0.5);
/// } else {
///     unreachable!("expected true intersection between line segments");
/// }
/// ```
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
) -> LineLineIntr<T>
where
    T: Real,
{
    use LineLineIntr::*;

    let eps = T::fuzzy_epsilon();
    let v = v2 - v1;
    let u = u2 - u1;
    let w = v1 - u1;
    let denom = v.cross(u);

    let seg1_length = v.length();
    let seg2_length = u.length();
    let t_in_segment =
        |t: T, length: T| (t * length).fuzzy_in_range_eps(T::zero(), length, eps);

    if !denom.fuzzy_eq_zero() {
        let seg1_t = u.cross(w) / denom;
        let seg2_t = v.cross(w) / denom;
        if t_in_segment(seg1_t, seg1_length) && t_in_segment(seg2_t, seg2_length) {
            return TrueIntersect { seg1_t, seg2_t };
        }

        return FalseIntersect { seg1_t, seg2_t };
    }

    // parallel, check if collinear
    if !v.cross(w).fuzzy_eq_zero() || !u.cross(w).fuzzy_eq_zero() {
        return NoIntersect;
    }

    let v_is_point = v1.fuzzy_eq(v2);
    let u_is_point = u1.fuzzy_eq(u2);

    match (v_is_point, u_is_point) {
        (true, true) => {
            if v1.fuzzy_eq(u1) {
                TrueIntersect {
                    seg1_t: T::zero(),
                    seg2_t: T::zero(),
                }
            } else {
                NoIntersect
            }
        }
        (true, false) => {
            let seg2_t = parametric_from_point(u1, u2, v1, eps);
            if t_in_segment(seg2_t, seg2_length) {
                TrueIntersect {
                    seg1_t: T::zero(),
                    seg2_t,
                }
            } else {
                NoIntersect
            }
        }
        (false, true) => {
            let seg1_t = parametric_from_point(v1, v2, u1, eps);
            if t_in_segment(seg1_t, seg1_length) {
                TrueIntersect {
                    seg1_t,
                    seg2_t: T::zero(),
                }
            } else {
                NoIntersect
            }
        }
        (false, false) => collinear_overlap(v1, v2, u1, u2, seg2_length, eps),
    }
}

/// Both segments have length and lie on the same line, find how much of `u1->u2` they share.
fn collinear_overlap<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    seg2_length: T,
    eps: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    let (mut seg2_t0, mut seg2_t1) = min_max(
        parametric_from_point(u1, u2, v1, eps),
        parametric_from_point(u1, u2, v2, eps),
    );

    if !(seg2_t0 * seg2_length).fuzzy_lt_eps(seg2_length, eps)
        || !(seg2_t1 * seg2_length).fuzzy_gt_eps(T::zero(), eps)
    {
        return LineLineIntr::NoIntersect;
    }

    seg2_t0 = num_traits::real::Real::max(seg2_t0, T::zero());
    seg2_t1 = num_traits::real::Real::min(seg2_t1, T::one());

    if ((seg2_t1 - seg2_t0) * seg2_length).fuzzy_eq_zero_eps(eps) {
        // segments line up end to end
        let seg1_t = if v1.fuzzy_eq(u1) || v1.fuzzy_eq(u2) {
            T::zero()
        } else {
            T::one()
        };

        return LineLineIntr::TrueIntersect {
            seg1_t,
            seg2_t: seg2_t0,
        };
    }

    LineLineIntr::Overlapping { seg2_t0, seg2_t1 }
}
