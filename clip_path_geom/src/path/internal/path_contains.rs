use crate::{
    bezier::{BezierIntersectOptions, CubicBezier},
    core::{
        math::{vec2, Rect, Vector2},
        traits::Real,
    },
    path::Path,
};

/// Distance the containment ray is extended past the right edge of the bounding box.
const RAY_OVERSHOOT: f64 = 1000.0;

/// Determine if `point` is inside the closed `path` using even-odd ray casting.
///
/// Open paths never contain a point. See [curves_contain_point] for the algorithm.
pub fn path_contains_point<T>(
    path: &Path<T>,
    point: Vector2<T>,
    options: &BezierIntersectOptions<T>,
) -> bool
where
    T: Real,
{
    if !path.is_closed() {
        return false;
    }

    let curves = path.curves();
    let bbox = curves_bounding_box(&curves);
    curves_contain_point(&curves, &bbox, point, options)
}

/// Union of the bounding boxes of `curves`, default (zero) rect if empty.
pub fn curves_bounding_box<T>(curves: &[CubicBezier<T>]) -> Rect<T>
where
    T: Real,
{
    let mut iter = curves.iter();
    match iter.next() {
        Some(first) => iter.fold(first.bounding_box(), |acc, c| acc.union(&c.bounding_box())),
        None => Rect::default(),
    }
}

/// Even-odd containment test of `point` against the closed loop formed by `curves` (`bbox` must be
/// the bounding box of the curves).
///
/// A horizontal ray from `point` to past the right edge of `bbox` is intersected with every curve
/// and the crossings to the right of `point` are counted, an odd count means inside.
///
/// Rays passing exactly through a node or running along a horizontal curve can miscount.
pub fn curves_contain_point<T>(
    curves: &[CubicBezier<T>],
    bbox: &Rect<T>,
    point: Vector2<T>,
    options: &BezierIntersectOptions<T>,
) -> bool
where
    T: Real,
{
    if curves.is_empty() || !bbox.contains(point) {
        return false;
    }

    ray_crossing_count(curves, bbox, point, options) % 2 == 1
}

/// Number of intersects between the containment ray cast from `point` and `curves`, only counting
/// those strictly to the right of `point`.
pub fn ray_crossing_count<T>(
    curves: &[CubicBezier<T>],
    bbox: &Rect<T>,
    point: Vector2<T>,
    options: &BezierIntersectOptions<T>,
) -> usize
where
    T: Real,
{
    let ray_end = vec2(bbox.max.x + T::from_f64(RAY_OVERSHOOT), point.y);
    let ray = CubicBezier::line(point, ray_end);

    curves
        .iter()
        .flat_map(|c| c.intersects_with_options(&ray, options))
        .filter(|intr| intr.point.x > point.x)
        .count()
}
