//! Element node
//!
//! One node is created per shorthand line. Children are owned exclusively by
//! their parent; the forest owns the roots.

use super::attributes::{Attributes, Styles, CLASS, ID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    pub attrs: Attributes,
    /// `None` when the line had no `:{ ... }` block.
    pub styles: Option<Styles>,
    /// `Some` iff the line had a `= "..."` assignment, even an empty one.
    pub text_content: Option<String>,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            styles: None,
            text_content: None,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.attrs.append_class(class);
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn class(&self) -> Option<&str> {
        self.attrs.get(CLASS)
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs.get(ID)
    }

    /// Text that renderers emit as a body line.
    ///
    /// An empty `= ""` assignment is kept on the node but renders like a node
    /// without text.
    pub fn renderable_text(&self) -> Option<&str> {
        self.text_content.as_deref().filter(|text| !text.is_empty())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when the node renders with no body at all.
    pub fn is_empty(&self) -> bool {
        self.renderable_text().is_none() && self.is_leaf()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ElementNode::subtree_len)
            .sum::<usize>()
    }
}
