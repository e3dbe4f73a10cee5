//! Component-template format (JSX-like output)
//!
//! - `class` is renamed to `className`; every other name is unchanged
//! - styles become an object literal with JSON-quoted keys and values:
//!   `style={{ "prop": "value", "prop2": "value2" }}`
//! - an element with no text and no children self-closes: `<img />`

use super::serializer::{serialize_forest, Dialect};
use crate::shortmark::ast::attributes::CLASS;
use crate::shortmark::ast::{ElementNode, Styles};
use crate::shortmark::error::FormatError;
use crate::shortmark::formats::format::Format;
use serde_json::Value;
use std::borrow::Cow;

pub const CLASS_NAME: &str = "className";

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentDialect;

impl Dialect for ComponentDialect {
    fn attribute_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if name == CLASS {
            Cow::Borrowed(CLASS_NAME)
        } else {
            Cow::Borrowed(name)
        }
    }

    fn style_attribute(&self, styles: &Styles) -> String {
        let entries = styles
            .iter()
            .map(|(property, value)| format!("{}: {}", json_string(property), json_string(value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("style={{{{ {} }}}}", entries)
    }

    fn self_closes_empty(&self) -> bool {
        true
    }
}

fn json_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentTemplateFormat;

impl Format for ComponentTemplateFormat {
    fn name(&self) -> &str {
        "component-template"
    }

    fn description(&self) -> &str {
        "JSX-like component template with className and style objects"
    }

    fn aliases(&self) -> &[&str] {
        &["jsx", "tsx"]
    }

    fn file_extensions(&self) -> &[&str] {
        &["jsx", "tsx"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, forest: &[ElementNode]) -> Result<String, FormatError> {
        Ok(serialize_forest(forest, &ComponentDialect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: ElementNode) -> String {
        ComponentTemplateFormat.serialize(&[node]).unwrap()
    }

    #[test]
    fn test_class_becomes_class_name() {
        let node = ElementNode::new("div").with_class("card");
        assert_eq!(render(node), r#"<div className="card" />"#);
    }

    #[test]
    fn test_other_attributes_pass_through() {
        let node = ElementNode::new("label")
            .with_attr("for", "email")
            .with_attr("data-class", "x");
        assert_eq!(render(node), r#"<label for="email" data-class="x" />"#);
    }

    #[test]
    fn test_style_object_literal() {
        let styles: Styles = [("width", "100px"), ("height", "100px")].into_iter().collect();
        let node = ElementNode::new("img").with_styles(styles);
        assert_eq!(
            render(node),
            r#"<img style={{ "width": "100px", "height": "100px" }} />"#
        );
    }

    #[test]
    fn test_style_values_are_json_quoted() {
        let styles: Styles = [("font-family", "\"Fira Sans\", serif")].into_iter().collect();
        let node = ElementNode::new("p").with_styles(styles);
        assert_eq!(
            render(node),
            r#"<p style={{ "font-family": "\"Fira Sans\", serif" }} />"#
        );
    }

    #[test]
    fn test_empty_style_object() {
        let node = ElementNode::new("p").with_styles(Styles::new());
        assert_eq!(render(node), "<p style={{  }} />");
    }

    #[test]
    fn test_element_with_text_is_not_self_closing() {
        let node = ElementNode::new("h1").with_class("t").with_text("Hi");
        assert_eq!(render(node), "<h1 className=\"t\">\n  Hi\n</h1>");
    }
}
