//! Node based paths made of cubic Bezier curves, point containment, and boolean operations
//! between closed paths.
mod id;
pub mod internal;
mod node_path;
mod path_node;
mod path_types;

pub use id::*;
pub use node_path::*;
pub use path_node::*;
pub use path_types::*;
