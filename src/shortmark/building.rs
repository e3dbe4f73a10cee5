//! Building the element forest from parsed lines
//!
//! [`element`] applies the attribute merge rules of a single line;
//! [`tree_builder`] nests the resulting nodes by depth.

pub mod element;
pub mod tree_builder;

pub use element::build_element;
pub use tree_builder::build_forest;
