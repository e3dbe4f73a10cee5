//! The shorthand source format itself (parse only)

use crate::shortmark::ast::ElementNode;
use crate::shortmark::error::FormatError;
use crate::shortmark::formats::format::Format;
use crate::shortmark::pipeline;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortmarkFormat;

impl Format for ShortmarkFormat {
    fn name(&self) -> &str {
        "shortmark"
    }

    fn description(&self) -> &str {
        "Indentation-based markup shorthand"
    }

    fn file_extensions(&self) -> &[&str] {
        &["smk", "shortmark"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<ElementNode>, FormatError> {
        Ok(pipeline::parse(source)?)
    }
}
