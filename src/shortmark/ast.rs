//! Element tree produced by the parser
//!
//! A converted document is a forest: an ordered list of root [`ElementNode`]s,
//! each owning its children. Attribute and style maps keep insertion order,
//! because that order is visible in every rendered format.

pub mod attributes;
pub mod element;
pub mod snapshot;

pub use attributes::{Attributes, Styles};
pub use element::ElementNode;
pub use snapshot::{snapshot_from_forest, ElementSnapshot};
