use super::path_contains::{curves_bounding_box, curves_contain_point};
use crate::{
    bezier::{BezierIntersectOptions, CubicBezier},
    core::{
        math::{dist_squared, Rect},
        traits::Real,
    },
    path::{
        BooleanOp, BooleanResult, IdSource, NodeType, Path, PathBooleanOptions, PathNode,
        RandomIds,
    },
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};
use std::collections::BTreeMap;

/// Identifies which input path a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanSource {
    /// First path (`self` in [Path::boolean]).
    A,
    /// Second path.
    B,
}

/// Intersect parameter on one curve of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit<T> {
    /// Index of the curve in the path.
    pub curve_index: usize,
    /// Parametric value on the curve.
    pub t: T,
}

/// All the intersects found between the curves of path A and path B.
#[derive(Debug, Clone, Default)]
pub struct BooleanIntersects<T> {
    pub hits_a: Vec<CurveHit<T>>,
    pub hits_b: Vec<CurveHit<T>>,
}

impl<T> BooleanIntersects<T> {
    #[inline]
    pub fn any_intersects(&self) -> bool {
        !self.hits_a.is_empty()
    }
}

/// Piece of one input path curve between two consecutive split parameters.
#[derive(Debug, Clone, Copy)]
pub struct CurveSegment<T> {
    /// The extracted sub-curve.
    pub curve: CubicBezier<T>,
    /// Parametric value of the segment start on the source curve.
    pub t1: T,
    /// Parametric value of the segment end on the source curve.
    pub t2: T,
    /// Index of the source curve in its path.
    pub curve_index: usize,
    pub source: BooleanSource,
    /// Whether the segment midpoint lies inside the other path.
    pub inside_other: bool,
}

impl<T> CurveSegment<T>
where
    T: Real,
{
    /// Same segment traversed in the opposite direction (curve reversed and `t1`/`t2` swapped).
    #[inline]
    pub fn reversed(&self) -> Self {
        CurveSegment {
            curve: self.curve.reverse(),
            t1: self.t2,
            t2: self.t1,
            ..*self
        }
    }
}

/// Find all intersects between every curve of `curves_a` and every curve of `curves_b`.
///
/// The bounding boxes of `curves_b` are loaded into a spatial index so only curve pairs with
/// overlapping boxes are intersected.
pub fn find_intersects<T>(
    curves_a: &[CubicBezier<T>],
    curves_b: &[CubicBezier<T>],
    options: &BezierIntersectOptions<T>,
) -> BooleanIntersects<T>
where
    T: Real,
{
    let mut result = BooleanIntersects {
        hits_a: Vec::new(),
        hits_b: Vec::new(),
    };

    let boxes_b: Vec<Rect<T>> = curves_b.iter().map(|c| c.bounding_box()).collect();
    let index_b = match build_box_index(&boxes_b) {
        Some(index) => index,
        None => return result,
    };

    let mut candidates = Vec::new();
    let mut query_stack = Vec::with_capacity(8);
    for (i, curve_a) in curves_a.iter().enumerate() {
        let bbox = curve_a.bounding_box();
        candidates.clear();
        let mut visitor = |j: usize| {
            candidates.push(j);
        };
        index_b.visit_query_with_stack(
            bbox.min.x,
            bbox.min.y,
            bbox.max.x,
            bbox.max.y,
            &mut visitor,
            &mut query_stack,
        );
        // keep results in curve order
        candidates.sort_unstable();

        for &j in candidates.iter() {
            for intr in curve_a.intersects_with_options(&curves_b[j], options) {
                result.hits_a.push(CurveHit {
                    curve_index: i,
                    t: intr.t1,
                });
                result.hits_b.push(CurveHit {
                    curve_index: j,
                    t: intr.t2,
                });
            }
        }
    }

    result
}

/// Split every curve of a path at its hit parameters, returning the segments in path order.
///
/// Parameters are sorted and any within `param_dedup_eps` of the previous split (or of the curve
/// ends) are dropped. Each curve is always bounded by `0` and `1`, so a curve without hits becomes
/// one whole segment.
pub fn slice_at_intersects<T>(
    curves: &[CubicBezier<T>],
    hits: &[CurveHit<T>],
    source: BooleanSource,
    param_dedup_eps: T,
) -> Vec<CurveSegment<T>>
where
    T: Real,
{
    let mut hits_lookup = BTreeMap::<usize, Vec<T>>::new();
    for hit in hits {
        hits_lookup.entry(hit.curve_index).or_default().push(hit.t);
    }

    let mut segments = Vec::with_capacity(curves.len() + hits.len());
    let mut split_params = Vec::new();
    for (curve_index, curve) in curves.iter().enumerate() {
        split_params.clear();
        split_params.push(T::zero());
        if let Some(ts) = hits_lookup.get_mut(&curve_index) {
            ts.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let upper = T::one() - param_dedup_eps;
            for &t in ts.iter() {
                let prev = split_params[split_params.len() - 1];
                if t > prev + param_dedup_eps && t < upper {
                    split_params.push(t);
                }
            }
        }
        split_params.push(T::one());

        for w in split_params.windows(2) {
            let (t_start, t_end) = (w[0], w[1]);
            segments.push(CurveSegment {
                curve: curve.sub_curve(t_start, t_end),
                t1: t_start,
                t2: t_end,
                curve_index,
                source,
                inside_other: false,
            });
        }
    }

    segments
}

/// Classify each segment as inside or outside the closed loop formed by `other_curves` by testing
/// the segment midpoint (`t = 0.5` on the sub-curve).
pub fn classify_segments<T>(
    segments: &mut [CurveSegment<T>],
    other_curves: &[CubicBezier<T>],
    options: &BezierIntersectOptions<T>,
) where
    T: Real,
{
    let other_bbox = curves_bounding_box(other_curves);
    for seg in segments.iter_mut() {
        let mid = seg.curve.evaluate(T::half());
        seg.inside_other = curves_contain_point(other_curves, &other_bbox, mid, options);
    }
}

/// Test if a classified segment survives the boolean `operation`.
///
/// [BooleanOp::Xor] is performed as two subtractions so it never reaches here as such, it is
/// treated like [BooleanOp::Not].
pub fn keep_segment<T>(operation: BooleanOp, segment: &CurveSegment<T>) -> bool {
    match (operation, segment.source) {
        (BooleanOp::Or, _) => !segment.inside_other,
        (BooleanOp::And, _) => segment.inside_other,
        (BooleanOp::Not | BooleanOp::Xor, BooleanSource::A) => !segment.inside_other,
        (BooleanOp::Not | BooleanOp::Xor, BooleanSource::B) => segment.inside_other,
    }
}

/// Filter classified segments for `operation` and orient them for stitching (kept B segments are
/// reversed when subtracting).
pub fn prune_segments<T>(
    segments_a: &[CurveSegment<T>],
    segments_b: &[CurveSegment<T>],
    operation: BooleanOp,
) -> Vec<CurveSegment<T>>
where
    T: Real,
{
    let reverse_b = matches!(operation, BooleanOp::Not | BooleanOp::Xor);
    segments_a
        .iter()
        .chain(segments_b.iter())
        .filter(|s| keep_segment(operation, *s))
        .map(|s| {
            if reverse_b && s.source == BooleanSource::B {
                s.reversed()
            } else {
                *s
            }
        })
        .collect()
}

/// Result of stitching segments into closed loops.
#[derive(Debug, Clone)]
pub struct StitchResult {
    /// Loops formed, each as the indexes of the segments in traversal order.
    pub loops: Vec<Vec<usize>>,
    /// Number of partial loops discarded at a dead end.
    pub discarded_loops: usize,
}

/// Greedily trace closed loops through `segments`.
///
/// Starting from each unvisited segment in order, the loop is extended with the lowest index
/// unvisited segment whose start is within `stitch_eps_squared` (squared distance) of the current
/// end, until the end comes back to the loop start. A loop that cannot be continued is discarded
/// (its segments stay visited).
pub fn stitch_segments_into_loops<T>(
    segments: &[CurveSegment<T>],
    stitch_eps_squared: T,
) -> StitchResult
where
    T: Real,
{
    let mut result = StitchResult {
        loops: Vec::new(),
        discarded_loops: 0,
    };

    if segments.is_empty() {
        return result;
    }

    let join_eps = stitch_eps_squared.sqrt();

    // load all the segment start points into spatial index
    let start_boxes: Vec<Rect<T>> = segments
        .iter()
        .map(|s| Rect::new(s.curve.p0, s.curve.p0))
        .collect();
    let aabb_index = match build_box_index(&start_boxes) {
        Some(index) => index,
        None => {
            result.discarded_loops = segments.len();
            return result;
        }
    };

    let mut visited = vec![false; segments.len()];
    let mut query_results = Vec::new();
    let mut query_stack = Vec::with_capacity(8);

    for i in 0..segments.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;

        let loop_start = segments[i].curve.p0;
        let mut current_end = segments[i].curve.p3;
        let mut current_loop = vec![i];

        loop {
            if dist_squared(current_end, loop_start) < stitch_eps_squared {
                result.loops.push(current_loop);
                break;
            }

            query_results.clear();
            let mut query_visitor = |j: usize| {
                if !visited[j] && dist_squared(segments[j].curve.p0, current_end) < stitch_eps_squared
                {
                    query_results.push(j);
                }
            };

            aabb_index.visit_query_with_stack(
                current_end.x - join_eps,
                current_end.y - join_eps,
                current_end.x + join_eps,
                current_end.y + join_eps,
                &mut query_visitor,
                &mut query_stack,
            );

            match query_results.iter().min() {
                Some(&next) => {
                    visited[next] = true;
                    current_loop.push(next);
                    current_end = segments[next].curve.p3;
                }
                None => {
                    log::warn!(
                        "discarding partial loop of {} segment(s), no segment continues from ({}, {})",
                        current_loop.len(),
                        current_end.x,
                        current_end.y
                    );
                    result.discarded_loops += 1;
                    break;
                }
            }
        }
    }

    result
}

/// Build a closed path from the segments of one loop.
///
/// Node `i` sits at the start of segment `i` with its outgoing handle from that segment's first
/// control point and its incoming handle from the previous segment's second control point.
pub fn loop_to_path<T>(
    segments: &[CurveSegment<T>],
    loop_indexes: &[usize],
    id_source: &dyn IdSource,
) -> Path<T>
where
    T: Real,
{
    let path_id = id_source.next_id();
    let count = loop_indexes.len();
    let nodes = loop_indexes
        .iter()
        .enumerate()
        .map(|(i, &seg_idx)| {
            let curve = &segments[seg_idx].curve;
            let prev_curve = &segments[loop_indexes[(i + count - 1) % count]].curve;
            PathNode::with_id(
                id_source.next_id(),
                curve.p0,
                prev_curve.p2,
                curve.p1,
                NodeType::Corner,
            )
        })
        .collect();

    Path::with_id(path_id, nodes, true)
}

/// Perform the boolean `operation` between `path_a` and `path_b`.
///
/// Both paths must be closed, otherwise an empty result flagged with
/// [BooleanResult::unsupported_input] is returned. [BooleanOp::Xor] is the concatenation of
/// `A - B` and `B - A`.
pub fn path_boolean<T>(
    path_a: &Path<T>,
    path_b: &Path<T>,
    operation: BooleanOp,
    options: &PathBooleanOptions<T>,
) -> BooleanResult<T>
where
    T: Real,
{
    if !path_a.is_closed() || !path_b.is_closed() {
        log::debug!(
            "skipping {:?} boolean, input path is open (a closed: {}, b closed: {})",
            operation,
            path_a.is_closed(),
            path_b.is_closed()
        );
        return BooleanResult::unsupported();
    }

    let curves_a = path_a.curves();
    let curves_b = {
        let curves = path_b.curves();
        if opposing_directions(&curves_a, &curves) {
            reversed_loop(&curves)
        } else {
            curves
        }
    };

    match operation {
        BooleanOp::Xor => {
            let a_not_b = boolean_pass(&curves_a, &curves_b, BooleanOp::Not, options);
            let b_not_a = boolean_pass(&curves_b, &curves_a, BooleanOp::Not, options);
            a_not_b.merge(b_not_a)
        }
        op => boolean_pass(&curves_a, &curves_b, op, options),
    }
}

/// One intersect, slice, classify, prune, and stitch pass over the curves of two closed paths.
fn boolean_pass<T>(
    curves_a: &[CubicBezier<T>],
    curves_b: &[CubicBezier<T>],
    operation: BooleanOp,
    options: &PathBooleanOptions<T>,
) -> BooleanResult<T>
where
    T: Real,
{
    let intersect_options = &options.intersect_options;
    let intrs = find_intersects(curves_a, curves_b, intersect_options);

    let mut segments_a = slice_at_intersects(
        curves_a,
        &intrs.hits_a,
        BooleanSource::A,
        options.param_dedup_eps,
    );
    let mut segments_b = slice_at_intersects(
        curves_b,
        &intrs.hits_b,
        BooleanSource::B,
        options.param_dedup_eps,
    );

    classify_segments(&mut segments_a, curves_b, intersect_options);
    classify_segments(&mut segments_b, curves_a, intersect_options);

    let kept = prune_segments(&segments_a, &segments_b, operation);
    let stitched = stitch_segments_into_loops(&kept, options.stitch_eps_squared);

    log::trace!(
        "{:?} pass: {} intersects, {} + {} segments, {} kept, {} loops, {} discarded",
        operation,
        intrs.hits_a.len(),
        segments_a.len(),
        segments_b.len(),
        kept.len(),
        stitched.loops.len(),
        stitched.discarded_loops
    );

    let random_ids = RandomIds;
    let id_source: &dyn IdSource = match options.id_source {
        Some(source) => source,
        None => &random_ids,
    };

    let paths = stitched
        .loops
        .iter()
        .map(|l| loop_to_path(&kept, l, id_source))
        .collect();

    BooleanResult::new(paths, stitched.discarded_loops)
}

/// Number of points sampled per curve when approximating the enclosed area.
const AREA_SAMPLES_PER_CURVE: usize = 8;

/// Signed area enclosed by the closed loop of `curves` (positive for counter clockwise).
///
/// Approximated with the shoelace formula over points sampled along each curve, exact for loops
/// of straight curves.
pub fn sampled_signed_area<T>(curves: &[CubicBezier<T>]) -> T
where
    T: Real,
{
    let step = T::one() / T::from_f64(AREA_SAMPLES_PER_CURVE as f64);
    let mut twice_area = T::zero();
    for curve in curves {
        let mut prev = curve.p0;
        for i in 1..=AREA_SAMPLES_PER_CURVE {
            let t = if i == AREA_SAMPLES_PER_CURVE {
                T::one()
            } else {
                step * T::from_f64(i as f64)
            };
            let p = curve.evaluate(t);
            twice_area = twice_area + prev.cross(p);
            prev = p;
        }
    }

    twice_area * T::half()
}

/// True if the two closed loops wind in opposite directions.
pub fn opposing_directions<T>(curves_a: &[CubicBezier<T>], curves_b: &[CubicBezier<T>]) -> bool
where
    T: Real,
{
    let a_ccw = sampled_signed_area(curves_a) >= T::zero();
    let b_ccw = sampled_signed_area(curves_b) >= T::zero();
    a_ccw != b_ccw
}

/// Same closed loop traversed in the opposite direction.
pub fn reversed_loop<T>(curves: &[CubicBezier<T>]) -> Vec<CubicBezier<T>>
where
    T: Real,
{
    curves.iter().rev().map(|c| c.reverse()).collect()
}

/// Spatial index of `boxes`, `None` if the index cannot be built (an empty input also gives
/// `None`).
fn build_box_index<T>(boxes: &[Rect<T>]) -> Option<StaticAABB2DIndex<T>>
where
    T: Real,
{
    if boxes.is_empty() {
        return None;
    }

    let mut builder = StaticAABB2DIndexBuilder::new(boxes.len());
    for b in boxes {
        builder.add(b.min.x, b.min.y, b.max.x, b.max.y);
    }

    match builder.build() {
        Ok(index) => Some(index),
        Err(e) => {
            log::warn!("failed to build spatial index: {e}");
            None
        }
    }
}
