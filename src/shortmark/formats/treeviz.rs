//! Treeviz formatter for element forests
//!
//! One line per element, two spaces per level of nesting:
//!
//! ```text
//! <div>#root.main-container.theme-dark [data-role]
//!   <h1>.page-title "Welcome to Short Markup" {2}
//! ```
//!
//! After the tag come the id, the classes, the names of the remaining
//! attributes in brackets, the text preview (truncated to 30 characters) and
//! the number of style declarations in braces.

use crate::shortmark::ast::attributes::{CLASS, ID};
use crate::shortmark::ast::ElementNode;
use crate::shortmark::error::FormatError;
use crate::shortmark::formats::format::Format;

const TEXT_PREVIEW_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(node: &ElementNode) -> String {
    let mut label = format!("<{}>", node.tag);

    if let Some(id) = node.id() {
        label.push('#');
        label.push_str(id);
    }
    for class in node.class().unwrap_or("").split_whitespace() {
        label.push('.');
        label.push_str(class);
    }

    let others: Vec<&str> = node
        .attrs
        .names()
        .filter(|name| *name != CLASS && *name != ID)
        .collect();
    if !others.is_empty() {
        label.push_str(&format!(" [{}]", others.join(", ")));
    }

    if let Some(text) = &node.text_content {
        label.push_str(&format!(" \"{}\"", truncate(text, TEXT_PREVIEW_CHARS)));
    }
    if let Some(styles) = &node.styles {
        label.push_str(&format!(" {{{}}}", styles.len()));
    }

    label
}

fn write_node(out: &mut Vec<String>, node: &ElementNode, depth: usize) {
    out.push(format!("{}{}", "  ".repeat(depth), label(node)));
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}

pub fn to_treeviz_str(forest: &[ElementNode]) -> String {
    let mut lines = Vec::new();
    for root in forest {
        write_node(&mut lines, root, 0);
    }
    lines.join("\n")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "ast-treeviz"
    }

    fn description(&self) -> &str {
        "One line per element, indented by depth"
    }

    fn aliases(&self) -> &[&str] {
        &["treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, forest: &[ElementNode]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(forest))
    }
}
