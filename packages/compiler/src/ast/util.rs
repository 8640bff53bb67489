//! AST utilities
//!
//! Type-dispatched accessors and predicates the parser uses while it streams
//! nodes into the tree.

use super::builders::build_text;
use super::nodes::{CallExpression, Node};
use crate::error::{InternalError, Result};

/// The mutable child sequence of a `Program` (its body) or an `ElementNode`.
///
/// Any other node kind means an upstream pass is confused about the tree
/// shape, so this fails instead of handing back an empty sequence.
pub fn children_for(node: &mut Node) -> Result<&mut Vec<Node>> {
    match node {
        Node::Program(program) => Ok(&mut program.body),
        Node::Element(element) => Ok(&mut element.children),
        other => Err(InternalError::NotAParent { kind: other.kind() }.into()),
    }
}

/// Whether the node renders as a live binding point.
pub fn uses_morph(node: &Node) -> bool {
    matches!(
        node,
        Node::Mustache(_) | Node::Block(_) | Node::Component(_)
    )
}

/// Append `node` to `parent`'s children.
///
/// Two morph-producing siblings are never left adjacent: an empty text node
/// is placed between them first.
pub fn append_child(parent: &mut Node, node: Node) -> Result<()> {
    let children = children_for(parent)?;
    push_separated(children, node);
    Ok(())
}

pub(crate) fn push_separated(children: &mut Vec<Node>, node: Node) {
    if let Some(last) = children.last() {
        if uses_morph(last) && uses_morph(&node) {
            log::trace!(
                "separating adjacent {} and {} with an empty text node",
                last.kind(),
                node.kind()
            );
            children.push(build_text(""));
        }
    }
    children.push(node);
}

/// A call-shaped expression is a helper invocation when it passes any
/// argument; a bare reference is not.
pub fn is_helper<E: CallExpression + ?Sized>(expr: &E) -> bool {
    !expr.params().is_empty() || !expr.hash().pairs.is_empty()
}
