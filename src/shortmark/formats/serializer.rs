//! Element tree serializer
//!
//! Walks a forest and writes each root as an indented block, two spaces per
//! depth, roots joined by `\n`. The walk is shared by every document format;
//! a [`Dialect`] decides attribute names, the style attribute, and whether an
//! empty element self-closes.
//!
//! Body layout for an element at indent `pad`:
//!
//! ```text
//! pad<tag attrs></tag>            no text, no children (non self-closing dialect)
//! pad<tag attrs />                no text, no children (self-closing dialect)
//! pad<tag attrs>                  otherwise
//! pad  text                       if text
//! <children, one level deeper>    if children
//! pad</tag>
//! ```
//!
//! Text and attribute values are written as-is; no escaping is applied.

use crate::shortmark::ast::{ElementNode, Styles};
use std::borrow::Cow;

pub const INDENT: &str = "  ";

/// Naming and layout conventions of one output format.
pub trait Dialect {
    /// The rendered name of an attribute.
    fn attribute_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(name)
    }

    /// The full style attribute, e.g. `style="color: red;"`.
    fn style_attribute(&self, styles: &Styles) -> String;

    /// Whether an element without text and children renders as `<tag />`.
    fn self_closes_empty(&self) -> bool {
        false
    }
}

pub fn serialize_forest<D: Dialect + ?Sized>(forest: &[ElementNode], dialect: &D) -> String {
    forest
        .iter()
        .map(|root| {
            let mut out = String::new();
            write_element(&mut out, root, dialect, 0);
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_element<D: Dialect + ?Sized>(
    out: &mut String,
    node: &ElementNode,
    dialect: &D,
    depth: usize,
) {
    let pad = INDENT.repeat(depth);
    let attrs = render_attributes(node, dialect);

    out.push_str(&pad);

    if node.is_empty() {
        if dialect.self_closes_empty() {
            out.push_str(&format!("<{}{} />", node.tag, attrs));
        } else {
            out.push_str(&format!("<{}{}></{}>", node.tag, attrs, node.tag));
        }
        return;
    }

    out.push_str(&format!("<{}{}>", node.tag, attrs));

    if let Some(text) = node.renderable_text() {
        out.push('\n');
        out.push_str(&pad);
        out.push_str(INDENT);
        out.push_str(text);
    }

    for child in &node.children {
        out.push('\n');
        write_element(out, child, dialect, depth + 1);
    }

    out.push('\n');
    out.push_str(&pad);
    out.push_str(&format!("</{}>", node.tag));
}

/// Attributes in map order, then the style attribute, each preceded by a space.
fn render_attributes<D: Dialect + ?Sized>(node: &ElementNode, dialect: &D) -> String {
    let mut parts: Vec<String> = node
        .attrs
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", dialect.attribute_name(name), value))
        .collect();

    if let Some(styles) = &node.styles {
        parts.push(dialect.style_attribute(styles));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}
