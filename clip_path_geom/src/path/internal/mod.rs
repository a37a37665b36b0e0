//! Internal path modules made public for visualization, benchmarking, and testing purposes.
//!
//! Not expected to be used directly as part of the library but may be used to help learn about the
//! algorithms.
pub mod path_boolean;
pub mod path_contains;
