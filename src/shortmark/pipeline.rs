//! Conversion pipeline
//!
//! ```text
//! source ──normalize──▶ lines ──parse_line──▶ parsed lines ──build──▶ forest ──render──▶ text
//! ```
//!
//! Every stage is a pure function. The first line that fails the grammar
//! aborts the conversion and nothing is rendered.

use crate::shortmark::ast::ElementNode;
use crate::shortmark::building::{build_element, build_forest};
use crate::shortmark::error::ParseError;
use crate::shortmark::formats::OutputFormat;
use crate::shortmark::lexing::normalize_source;
use crate::shortmark::parsing::parse_line;
use log::debug;

/// Error prefix shown by editor surfaces in place of output.
pub const DEFAULT_ERROR_PREFIX: &str = "// ERROR: ";

/// Parse shorthand source into an element forest.
pub fn parse(input: &str) -> Result<Vec<ElementNode>, ParseError> {
    let lines = normalize_source(input);
    debug!("normalized source into {} non-blank lines", lines.len());

    let mut nodes = Vec::with_capacity(lines.len());
    for line in &lines {
        let parsed = parse_line(line).map_err(|err| {
            debug!("line {} rejected: {}", line.number, err);
            err
        })?;
        nodes.push((build_element(&parsed), parsed.depth()));
    }

    let forest = build_forest(nodes);
    debug!("built forest with {} roots", forest.len());
    Ok(forest)
}

/// Convert shorthand source to the given output format.
pub fn render(input: &str, format: OutputFormat) -> Result<String, ParseError> {
    let forest = parse(input)?;
    Ok(format.render(&forest))
}

/// Convert shorthand source, or describe the failure.
///
/// Returns the rendered text, or `error_prefix` followed by the error message
/// when the source is malformed. This is what an editor shows in its output
/// pane.
pub fn render_or_error_text(input: &str, format: OutputFormat, error_prefix: &str) -> String {
    match render(input, format) {
        Ok(output) => output,
        Err(err) => format!("{}{}", error_prefix, err),
    }
}
