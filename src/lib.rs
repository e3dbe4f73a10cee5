//! # shortmark
//!
//! Converts an indentation-based markup shorthand into markup (HTML-like) or
//! component-template (JSX-like) text.
//!
//! ```text
//! <div> card
//!   <h2> title = "Card Title" :{ font-size: 1.5rem; }
//! ```
//!
//! The pipeline is linear: source text is normalized into lines, each line is
//! matched against the line grammar, the matched lines are assembled into a
//! forest by indentation, and the forest is serialized by one of the formats.
//!
//! ## Testing
//!
//! The [testing module](shortmark::testing) has a fluent assertion API for forests.

pub mod shortmark;

pub use shortmark::ast::{Attributes, ElementNode, Styles};
pub use shortmark::error::{FormatError, ParseError};
pub use shortmark::formats::{Format, FormatRegistry, OutputFormat};
pub use shortmark::pipeline::{parse, render, render_or_error_text};
