//! Fluent assertion API for element forests

use crate::shortmark::ast::ElementNode;

/// Create an assertion builder for a forest
pub fn assert_forest(forest: &[ElementNode]) -> ForestAssertion<'_> {
    ForestAssertion {
        forest,
        context: "forest".to_string(),
    }
}

fn summarize(nodes: &[ElementNode]) -> String {
    nodes
        .iter()
        .map(|n| format!("<{}>", n.tag))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct ForestAssertion<'a> {
    forest: &'a [ElementNode],
    context: String,
}

impl<'a> ForestAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.forest.len(),
            expected,
            "{}: Expected {} roots, found {}: [{}]",
            self.context,
            expected,
            self.forest.len(),
            summarize(self.forest)
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.count(0)
    }

    pub fn root<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let node = self.forest.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Root index {} out of bounds ({} roots)",
                self.context,
                index,
                self.forest.len()
            )
        });
        assertion(ElementAssertion {
            node,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Root tags in order
    pub fn tags(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.forest.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(actual, expected, "{}: root tags differ", self.context);
        self
    }
}

pub struct ElementAssertion<'a> {
    node: &'a ElementNode,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    pub fn node(&self) -> &'a ElementNode {
        self.node
    }

    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.node.tag, expected,
            "{}: Expected tag <{}>, found <{}>",
            self.context, expected, self.node.tag
        );
        self
    }

    pub fn attr(self, name: &str, expected: &str) -> Self {
        assert_eq!(
            self.node.attrs.get(name),
            Some(expected),
            "{}: attribute '{}' mismatch",
            self.context,
            name
        );
        self
    }

    pub fn no_attr(self, name: &str) -> Self {
        assert!(
            !self.node.attrs.contains(name),
            "{}: Expected no '{}' attribute, found {:?}",
            self.context,
            name,
            self.node.attrs.get(name)
        );
        self
    }

    /// Attribute names in map order
    pub fn attr_order(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.node.attrs.names().collect();
        assert_eq!(actual, expected, "{}: attribute order differs", self.context);
        self
    }

    pub fn class(self, expected: &str) -> Self {
        self.attr("class", expected)
    }

    pub fn id(self, expected: &str) -> Self {
        self.attr("id", expected)
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text_content.as_deref(),
            Some(expected),
            "{}: text content mismatch",
            self.context
        );
        self
    }

    pub fn no_text(self) -> Self {
        assert!(
            self.node.text_content.is_none(),
            "{}: Expected no text, found {:?}",
            self.context,
            self.node.text_content
        );
        self
    }

    pub fn style(self, property: &str, expected: &str) -> Self {
        let styles = self
            .node
            .styles
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected styles, found none", self.context));
        assert_eq!(
            styles.get(property),
            Some(expected),
            "{}: style '{}' mismatch",
            self.context,
            property
        );
        self
    }

    /// Style properties in map order
    pub fn style_order(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .styles
            .as_ref()
            .map(|s| s.properties().collect())
            .unwrap_or_default();
        assert_eq!(actual, expected, "{}: style order differs", self.context);
        self
    }

    pub fn no_styles(self) -> Self {
        assert!(
            self.node.styles.is_none(),
            "{}: Expected no styles, found {:?}",
            self.context,
            self.node.styles
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            self.node.children.len(),
            summarize(&self.node.children)
        );
        self
    }

    pub fn is_leaf(self) -> Self {
        self.child_count(0)
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let child = self.node.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                self.node.children.len()
            )
        });
        assertion(ElementAssertion {
            node: child,
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}
