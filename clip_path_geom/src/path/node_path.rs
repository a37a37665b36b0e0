use super::{
    internal::{path_boolean::path_boolean, path_contains::path_contains_point},
    BooleanOp, BooleanResult, ElementId, PathBooleanOptions, PathNode,
};
use crate::{
    bezier::{BezierIntersectOptions, CubicBezier},
    core::{
        math::{Matrix3, Rect, Vector2},
        traits::Real,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of [PathNode] joined by cubic Bezier curves, optionally closed.
///
/// Curve `i` runs from node `i` to node `i + 1` using the first node's `handle_out` and the second
/// node's `handle_in` as interior control points. A closed path has one more curve from the last
/// node back to the first.
///
/// All editing methods return a new path and keep the id. Geometry queries and boolean operations
/// use the node coordinates as stored, the optional transform is carried along for callers (use
/// [Path::with_transform_applied] to bake it in first).
///
/// # Examples
///
/// ```
/// # use clip_path_geom::path::*;
/// # use clip_path_geom::core::math::*;
/// let square = Path::new(
///     vec![
///         PathNode::corner(0.0, 0.0),
///         PathNode::corner(10.0, 0.0),
///         PathNode::corner(10.0, 10.0),
///         PathNode::corner(0.0, 10.0),
///     ],
///     true,
/// );
/// assert_eq!(square.curve_count(), 4);
/// assert!(square.contains_point(vec2(5.0, 5.0)));
/// assert!(!square.contains_point(vec2(15.0, 5.0)));
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Path<T = f64> {
    id: ElementId,
    nodes: Vec<PathNode<T>>,
    closed: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    transform: Option<Matrix3<T>>,
}

impl<T> Default for Path<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Path::new(Vec::new(), false)
    }
}

impl<T> Path<T>
where
    T: Real,
{
    /// New path with a random id and identity transform.
    #[inline]
    pub fn new(nodes: Vec<PathNode<T>>, closed: bool) -> Self {
        Self::with_id(ElementId::new_random(), nodes, closed)
    }

    #[inline]
    pub fn with_id(id: ElementId, nodes: Vec<PathNode<T>>, closed: bool) -> Self {
        Path {
            id,
            nodes,
            closed,
            transform: None,
        }
    }

    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[inline]
    pub fn nodes(&self) -> &[PathNode<T>] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, index: usize) -> Option<&PathNode<T>> {
        self.nodes.get(index)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn transform(&self) -> Matrix3<T> {
        self.transform.unwrap_or_default()
    }

    /// Number of curves: `len - 1` if open and `len` if closed, zero for fewer than 2 nodes.
    #[inline]
    pub fn curve_count(&self) -> usize {
        match self.nodes.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Curve at `index` (see [Path::curve_count]).
    pub fn curve_at(&self, index: usize) -> Option<CubicBezier<T>> {
        if index >= self.curve_count() {
            return None;
        }

        let start = &self.nodes[index];
        let end = &self.nodes[(index + 1) % self.nodes.len()];
        Some(CubicBezier::new(
            start.position(),
            start.handle_out(),
            end.handle_in(),
            end.position(),
        ))
    }

    /// Iterate all the curves of the path in order.
    pub fn iter_curves(&self) -> impl Iterator<Item = CubicBezier<T>> + '_ {
        (0..self.curve_count()).filter_map(move |i| self.curve_at(i))
    }

    /// All the curves of the path in order.
    #[inline]
    pub fn curves(&self) -> Vec<CubicBezier<T>> {
        self.iter_curves().collect()
    }

    /// Union of the bounding boxes of all curves.
    ///
    /// A single node path gives a zero size box at the node, an empty path gives the default
    /// (zero) rect.
    pub fn bounding_box(&self) -> Rect<T> {
        let mut curves = self.iter_curves();
        match curves.next() {
            Some(first) => curves.fold(first.bounding_box(), |acc, c| {
                acc.union(&c.bounding_box())
            }),
            None => match self.nodes.first() {
                Some(n) => Rect::new(n.position(), n.position()),
                None => Rect::default(),
            },
        }
    }

    /// Test if `point` is inside the path using even-odd ray casting (always false for an open
    /// path).
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        path_contains_point(self, point, &BezierIntersectOptions::new())
    }

    #[inline]
    pub fn contains_point_with_options(
        &self,
        point: Vector2<T>,
        options: &BezierIntersectOptions<T>,
    ) -> bool {
        path_contains_point(self, point, options)
    }

    #[inline]
    fn with_nodes(&self, nodes: Vec<PathNode<T>>) -> Self {
        Path {
            id: self.id,
            nodes,
            closed: self.closed,
            transform: self.transform,
        }
    }

    /// Copy of the path with `node` appended.
    pub fn add_node(&self, node: PathNode<T>) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.push(node);
        self.with_nodes(nodes)
    }

    /// Copy of the path with `node` inserted at `index` (appended if `index` is past the end).
    pub fn insert_node(&self, index: usize, node: PathNode<T>) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.insert(index.min(nodes.len()), node);
        self.with_nodes(nodes)
    }

    /// Copy of the path without the node(s) with `id`.
    pub fn remove_node(&self, id: ElementId) -> Self {
        self.with_nodes(
            self.nodes
                .iter()
                .filter(|n| n.id() != id)
                .copied()
                .collect(),
        )
    }

    /// Copy of the path with the node at `index` replaced by `node`. An out of range `index`
    /// returns an unchanged copy.
    pub fn update_node(&self, index: usize, node: PathNode<T>) -> Self {
        let mut nodes = self.nodes.clone();
        if let Some(n) = nodes.get_mut(index) {
            *n = node;
        }

        self.with_nodes(nodes)
    }

    #[inline]
    pub fn with_closed(&self, closed: bool) -> Self {
        Path {
            closed,
            ..self.clone()
        }
    }

    #[inline]
    pub fn with_transform(&self, transform: Matrix3<T>) -> Self {
        Path {
            transform: Some(transform),
            ..self.clone()
        }
    }

    /// Copy of the path with the transform applied to every node position and handle, the
    /// resulting path has the identity transform.
    pub fn with_transform_applied(&self) -> Self {
        let transform = match self.transform {
            Some(t) => t,
            None => return self.clone(),
        };

        Path {
            id: self.id,
            nodes: self.nodes.iter().map(|n| n.transformed(&transform)).collect(),
            closed: self.closed,
            transform: None,
        }
    }

    /// Perform a boolean `operation` between this path and `other`.
    ///
    /// Both paths must be closed, otherwise the result is empty with
    /// [BooleanResult::unsupported_input] set. Resulting paths have new ids.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clip_path_geom::path::*;
    /// # use clip_path_geom::core::math::*;
    /// # use clip_path_geom::path_closed;
    /// let s1: Path = path_closed![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)];
    /// let s2: Path = path_closed![(50.0, 50.0), (150.0, 50.0), (150.0, 150.0), (50.0, 150.0)];
    /// let result = s1.boolean(&s2, BooleanOp::Or, &PathBooleanOptions::new());
    /// assert_eq!(result.paths.len(), 1);
    /// let bbox = result.paths[0].bounding_box();
    /// assert!(bbox.min.fuzzy_eq_eps(vec2(0.0, 0.0), 1e-6));
    /// assert!(bbox.max.fuzzy_eq_eps(vec2(150.0, 150.0), 1e-6));
    /// ```
    #[inline]
    pub fn boolean(
        &self,
        other: &Self,
        operation: BooleanOp,
        options: &PathBooleanOptions<T>,
    ) -> BooleanResult<T> {
        path_boolean(self, other, operation, options)
    }

    /// Union of this path and `other` (default options).
    #[inline]
    pub fn union(&self, other: &Self) -> Vec<Self> {
        self.boolean(other, BooleanOp::Or, &PathBooleanOptions::new())
            .paths
    }

    /// `other` subtracted from this path (default options).
    #[inline]
    pub fn subtract(&self, other: &Self) -> Vec<Self> {
        self.boolean(other, BooleanOp::Not, &PathBooleanOptions::new())
            .paths
    }

    /// Intersection of this path and `other` (default options).
    #[inline]
    pub fn intersect(&self, other: &Self) -> Vec<Self> {
        self.boolean(other, BooleanOp::And, &PathBooleanOptions::new())
            .paths
    }

    /// Exclusive OR of this path and `other` (default options).
    #[inline]
    pub fn xor(&self, other: &Self) -> Vec<Self> {
        self.boolean(other, BooleanOp::Xor, &PathBooleanOptions::new())
            .paths
    }
}
