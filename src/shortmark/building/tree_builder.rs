//! Tree Builder - nests element nodes by indentation depth
//!
//! Keeps a stack of open elements, each tagged with its depth. For a node at
//! depth `d`, every open element with depth `>= d` is closed first; the node
//! then belongs to the new stack top, or to the forest when the stack is
//! empty. Because the parent is the nearest open element that is shallower,
//! a jump of several levels still nests under the last open element.
//!
//! Closed elements are moved into their parent (or the forest) when they are
//! popped. Siblings are closed in source order, so child order is source order.

use crate::shortmark::ast::ElementNode;
use log::trace;

struct OpenElement {
    node: ElementNode,
    depth: usize,
}

/// Build a forest from `(node, depth)` pairs in source order.
///
/// Never fails; an empty input yields an empty forest.
pub fn build_forest<I>(nodes: I) -> Vec<ElementNode>
where
    I: IntoIterator<Item = (ElementNode, usize)>,
{
    let mut forest = Vec::new();
    let mut stack: Vec<OpenElement> = Vec::new();

    for (node, depth) in nodes {
        close_to_depth(&mut stack, &mut forest, depth);

        match stack.last() {
            Some(parent) => trace!(
                "<{}> at depth {} goes under <{}> at depth {}",
                node.tag,
                depth,
                parent.node.tag,
                parent.depth
            ),
            None => trace!("<{}> at depth {} is a root", node.tag, depth),
        }

        stack.push(OpenElement { node, depth });
    }

    close_to_depth(&mut stack, &mut forest, 0);
    forest
}

/// Close every open element whose depth is `>= depth`.
fn close_to_depth(stack: &mut Vec<OpenElement>, forest: &mut Vec<ElementNode>, depth: usize) {
    while stack.last().is_some_and(|open| open.depth >= depth) {
        let Some(closed) = stack.pop() else {
            break;
        };
        match stack.last_mut() {
            Some(parent) => parent.node.children.push(closed.node),
            None => forest.push(closed.node),
        }
    }
}
