//! Parsing of individual shorthand lines
//!
//! [`line_grammar`] matches a line end-to-end and exposes its parts;
//! [`style_block`] parses the body of an inline `:{ ... }` block.

pub mod line_grammar;
pub mod style_block;

pub use line_grammar::{parse_line, ParsedLine, Shorthand, INDENT_WIDTH};
pub use style_block::parse_style_block;
