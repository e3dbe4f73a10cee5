//! Markup format (HTML-like output)
//!
//! - attribute names are written unchanged
//! - styles become one `style="prop: value; prop2: value2;"` attribute
//! - empty elements keep an explicit close tag: `<div></div>`

use super::serializer::{serialize_forest, Dialect};
use crate::shortmark::ast::{ElementNode, Styles};
use crate::shortmark::error::FormatError;
use crate::shortmark::formats::format::Format;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupDialect;

impl Dialect for MarkupDialect {
    fn style_attribute(&self, styles: &Styles) -> String {
        let css = styles
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ");
        format!("style=\"{}\"", css)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupFormat;

impl Format for MarkupFormat {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "HTML-like markup with explicit close tags"
    }

    fn aliases(&self) -> &[&str] {
        &["html"]
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, forest: &[ElementNode]) -> Result<String, FormatError> {
        Ok(serialize_forest(forest, &MarkupDialect))
    }
}
