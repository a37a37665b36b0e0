//! Core/common math types and functions for working with 2D points, transforms, boxes, and line
//! segments.
mod base_math;
mod line_segment;
mod matrix3;
mod rect;
mod vector2;

pub use base_math::*;
pub use line_segment::{line_line_intr, LineLineIntr, LineSegment};
pub use matrix3::Matrix3;
pub use rect::Rect;
pub use vector2::{vec2, Vector2};
