//! Testing utilities
//!
//! Tests should assert on forests through the fluent API in
//! [`ast_assertions`] rather than matching on node fields by hand:
//!
//! ```ignore
//! use shortmark::shortmark::testing::assert_forest;
//!
//! let forest = shortmark::parse(source)?;
//! assert_forest(&forest)
//!     .count(1)
//!     .root(0, |div| {
//!         div.tag("div")
//!             .class("card")
//!             .child(0, |img| {
//!                 img.tag("img").attr("src", "avatar.png").is_leaf();
//!             });
//!     });
//! ```
//!
//! Failure messages carry a path such as `forest[0].children[1]` to the
//! offending node.

pub mod ast_assertions;

pub use ast_assertions::{assert_forest, ElementAssertion, ForestAssertion};
