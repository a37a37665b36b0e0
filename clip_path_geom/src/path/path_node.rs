use super::ElementId;
use crate::core::{
    math::{vec2, Matrix3, Vector2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How editing tools keep the two handles of a node related.
///
/// Only a hint for the tools, the geometry in this crate never enforces it.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum NodeType {
    /// Handles are independent.
    #[default]
    Corner,
    /// Handles are collinear, lengths are independent.
    Smooth,
    /// Handles are collinear and of equal length.
    Symmetric,
}

/// Typed partial update of a [PathNode], fields left as `None` keep their current value.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::path::*;
/// # use clip_path_geom::core::math::*;
/// let node = PathNode::corner(1.0, 2.0);
/// let moved = node.update(&NodeUpdate::new().with_position(vec2(5.0, 5.0)));
/// assert_eq!(moved.id(), node.id());
/// assert_eq!(moved.position(), vec2(5.0, 5.0));
/// assert_eq!(moved.handle_in(), vec2(1.0, 2.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct NodeUpdate<T = f64> {
    pub position: Option<Vector2<T>>,
    pub handle_in: Option<Vector2<T>>,
    pub handle_out: Option<Vector2<T>>,
    pub node_type: Option<NodeType>,
}

impl<T> NodeUpdate<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        NodeUpdate {
            position: None,
            handle_in: None,
            handle_out: None,
            node_type: None,
        }
    }

    #[inline]
    pub fn with_position(mut self, position: Vector2<T>) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    pub fn with_handle_in(mut self, handle_in: Vector2<T>) -> Self {
        self.handle_in = Some(handle_in);
        self
    }

    #[inline]
    pub fn with_handle_out(mut self, handle_out: Vector2<T>) -> Self {
        self.handle_out = Some(handle_out);
        self
    }

    #[inline]
    pub fn with_node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }
}

/// Anchor point of a [Path](super::Path) with its two absolute handle positions.
///
/// `handle_in` shapes the curve arriving at the node and `handle_out` the curve leaving it. A
/// handle equal to `position` means the node has no handle on that side.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathNode<T = f64> {
    id: ElementId,
    position: Vector2<T>,
    handle_in: Vector2<T>,
    handle_out: Vector2<T>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    node_type: NodeType,
}

impl<T> PathNode<T>
where
    T: Real,
{
    /// New node with a random id.
    #[inline]
    pub fn new(
        position: Vector2<T>,
        handle_in: Vector2<T>,
        handle_out: Vector2<T>,
        node_type: NodeType,
    ) -> Self {
        Self::with_id(
            ElementId::new_random(),
            position,
            handle_in,
            handle_out,
            node_type,
        )
    }

    #[inline]
    pub fn with_id(
        id: ElementId,
        position: Vector2<T>,
        handle_in: Vector2<T>,
        handle_out: Vector2<T>,
        node_type: NodeType,
    ) -> Self {
        PathNode {
            id,
            position,
            handle_in,
            handle_out,
            node_type,
        }
    }

    /// Corner node at `(x, y)` with both handles collapsed onto the position.
    #[inline]
    pub fn corner(x: T, y: T) -> Self {
        let pos = vec2(x, y);
        Self::new(pos, pos, pos, NodeType::Corner)
    }

    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vector2<T> {
        self.position
    }

    #[inline]
    pub fn handle_in(&self) -> Vector2<T> {
        self.handle_in
    }

    #[inline]
    pub fn handle_out(&self) -> Vector2<T> {
        self.handle_out
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    #[inline]
    pub fn has_handle_in(&self) -> bool {
        !self.handle_in.fuzzy_eq(self.position)
    }

    #[inline]
    pub fn has_handle_out(&self) -> bool {
        !self.handle_out.fuzzy_eq(self.position)
    }

    /// Copy of the node with the fields set in `update` replaced, the id is kept.
    pub fn update(&self, update: &NodeUpdate<T>) -> Self {
        PathNode {
            id: self.id,
            position: update.position.unwrap_or(self.position),
            handle_in: update.handle_in.unwrap_or(self.handle_in),
            handle_out: update.handle_out.unwrap_or(self.handle_out),
            node_type: update.node_type.unwrap_or(self.node_type),
        }
    }

    /// Copy of the node at `position`. Handles are not moved along.
    #[inline]
    pub fn with_position(&self, position: Vector2<T>) -> Self {
        PathNode { position, ..*self }
    }

    #[inline]
    pub fn with_handle_in(&self, handle_in: Vector2<T>) -> Self {
        PathNode { handle_in, ..*self }
    }

    #[inline]
    pub fn with_handle_out(&self, handle_out: Vector2<T>) -> Self {
        PathNode { handle_out, ..*self }
    }

    #[inline]
    pub fn with_type(&self, node_type: NodeType) -> Self {
        PathNode { node_type, ..*self }
    }

    /// Copy of the node with position and both handles mapped through `transform`.
    #[inline]
    pub fn transformed(&self, transform: &Matrix3<T>) -> Self {
        PathNode {
            position: transform.transform_point(self.position),
            handle_in: transform.transform_point(self.handle_in),
            handle_out: transform.transform_point(self.handle_out),
            ..*self
        }
    }
}
