//! Geometry kernel for node based vector paths made of cubic Bezier curves.
//!
//! The crate covers the math value types ([core::math::Vector2], [core::math::Matrix3],
//! [core::math::Rect], [core::math::LineSegment]), cubic curves with subdivision based
//! curve/curve intersection ([bezier::CubicBezier]), and closed [path::Path] values with point
//! containment and boolean operations (union, subtract, intersect, xor).
//!
//! All types are immutable values, editing operations return new instances.
//!
//! # Examples
//!
//! ```
//! use clip_path_geom::path_closed;
//! use clip_path_geom::core::math::*;
//! use clip_path_geom::path::*;
//!
//! let outer: Path = path_closed![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)];
//! let inner: Path = path_closed![(25.0, 25.0), (75.0, 25.0), (75.0, 75.0), (25.0, 75.0)];
//!
//! // outer boundary loop plus the hole loop
//! let result = outer.subtract(&inner);
//! assert_eq!(result.len(), 2);
//! ```
#[macro_use]
mod macros;
pub mod bezier;
pub mod core;
pub mod path;

pub use static_aabb2d_index::AABB;
