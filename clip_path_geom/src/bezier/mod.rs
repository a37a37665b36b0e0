//! Cubic Bezier curves: evaluation, subdivision, bounds, and curve/curve intersection.
mod bezier_types;
mod cubic_bezier;

pub use bezier_types::*;
pub use cubic_bezier::*;
