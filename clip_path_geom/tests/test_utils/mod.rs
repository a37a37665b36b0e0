#![allow(dead_code)]

mod logging;
mod path_modifiers;
mod path_test_properties;

pub use logging::*;
pub use path_modifiers::*;
pub use path_test_properties::*;
