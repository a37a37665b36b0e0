//! Supporting public types used by the path boolean operations.

use super::{IdSource, Path};
use crate::{bezier::BezierIntersectOptions, core::traits::Real};

/// Boolean operation to apply to two closed paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BooleanOp {
    /// Union of the paths.
    Or,
    /// Intersection of the paths.
    And,
    /// The second path subtracted from the first.
    Not,
    /// Exclusive OR between the paths.
    Xor,
}

/// Struct to hold options parameters when performing a boolean operation between paths.
#[derive(Debug, Clone, Copy)]
pub struct PathBooleanOptions<'a, T>
where
    T: Real,
{
    /// Options used when intersecting the curves of the two paths (and for the containment tests
    /// that classify the resulting segments).
    pub intersect_options: BezierIntersectOptions<T>,
    /// Intersect parameters on the same curve closer than this are treated as one split point.
    pub param_dedup_eps: T,
    /// Squared distance below which a segment end is considered connected to the next segment
    /// start when stitching loops together.
    pub stitch_eps_squared: T,
    /// Source of ids for the paths and nodes created, random ids are used if `None`.
    pub id_source: Option<&'a dyn IdSource>,
}

impl<T> PathBooleanOptions<'_, T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            intersect_options: BezierIntersectOptions::new(),
            param_dedup_eps: T::from_f64(1e-5),
            stitch_eps_squared: T::from_f64(0.01),
            id_source: None,
        }
    }
}

impl<T> Default for PathBooleanOptions<'_, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Result of performing a boolean operation between two paths.
#[derive(Debug, Clone, Default)]
pub struct BooleanResult<T = f64> {
    /// Closed paths formed by the operation, all with newly created ids.
    pub paths: Vec<Path<T>>,
    /// Number of partial loops dropped because no segment continued them.
    pub discarded_loops: usize,
    /// True if the operation was not applied because an input path is open.
    pub unsupported_input: bool,
}

impl<T> BooleanResult<T>
where
    T: Real,
{
    #[inline]
    pub fn new(paths: Vec<Path<T>>, discarded_loops: usize) -> Self {
        Self {
            paths,
            discarded_loops,
            unsupported_input: false,
        }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    #[inline]
    pub fn unsupported() -> Self {
        Self {
            paths: Vec::new(),
            discarded_loops: 0,
            unsupported_input: true,
        }
    }

    /// Append the paths and discarded loop count of `other`.
    #[inline]
    pub fn merge(mut self, other: Self) -> Self {
        self.paths.extend(other.paths);
        self.discarded_loops += other.discarded_loops;
        self.unsupported_input |= other.unsupported_input;
        self
    }
}
