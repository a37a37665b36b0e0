//! Core module has common/shared math, traits, and error types.
pub mod errors;
pub mod math;
pub mod traits;
