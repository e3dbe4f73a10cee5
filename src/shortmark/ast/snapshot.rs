//! Forest snapshot - a serializable view of the element tree
//!
//! The `ast-json` and `ast-yaml` formats serialize this snapshot rather than
//! the nodes themselves, so the dump layout stays stable if the node type
//! grows fields that are not part of the document.

use super::{Attributes, ElementNode, Styles};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub tag: String,

    pub attrs: Attributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

impl From<&ElementNode> for ElementSnapshot {
    fn from(node: &ElementNode) -> Self {
        Self {
            tag: node.tag.clone(),
            attrs: node.attrs.clone(),
            styles: node.styles.clone(),
            text: node.text_content.clone(),
            children: node.children.iter().map(ElementSnapshot::from).collect(),
        }
    }
}

pub fn snapshot_from_forest(forest: &[ElementNode]) -> Vec<ElementSnapshot> {
    forest.iter().map(ElementSnapshot::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keeps_structure() {
        let forest = vec![ElementNode::new("div")
            .with_class("card")
            .with_child(ElementNode::new("p").with_text("hi"))];

        let snapshot = snapshot_from_forest(&forest);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].tag, "div");
        assert_eq!(snapshot[0].attrs.get("class"), Some("card"));
        assert_eq!(snapshot[0].children[0].text.as_deref(), Some("hi"));
        assert!(snapshot[0].styles.is_none());
    }
}
