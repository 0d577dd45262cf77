//! Per-kind callbacks for the source vocabulary.
//!
//! A [`SourceVisitor`] overrides only the `enter_*`/`exit_*` pairs it needs.
//! Dispatch is a `match` on the node, so adding a kind to the source tree is a
//! compile error here until it is handled.

use super::{traverse, NodeRef, Visitor};
use crate::error::TraverseError;
use prefix_ast::source::Node;

type Parent<'a> = Option<NodeRef<'a, Node>>;

/// Optional enter/exit callbacks for each source node kind.
pub trait SourceVisitor {
    fn enter_program(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_program(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_number_literal(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_number_literal(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_string_literal(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_string_literal(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_call_expression(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_call_expression(&mut self, _node: NodeRef<'_, Node>, _parent: Parent<'_>) -> Result<(), TraverseError> {
        Ok(())
    }
}

/// Adapts a [`SourceVisitor`] to the generic [`Visitor`] interface.
struct Dispatch<'v, V: ?Sized>(&'v mut V);

impl<V: SourceVisitor + ?Sized> Visitor<Node> for Dispatch<'_, V> {
    fn enter(&mut self, node: NodeRef<'_, Node>, parent: Parent<'_>) -> Result<(), TraverseError> {
        match node.node() {
            Node::Program { .. } => self.0.enter_program(node, parent),
            Node::NumberLiteral { .. } => self.0.enter_number_literal(node, parent),
            Node::StringLiteral { .. } => self.0.enter_string_literal(node, parent),
            Node::CallExpression { .. } => self.0.enter_call_expression(node, parent),
        }
    }

    fn exit(&mut self, node: NodeRef<'_, Node>, parent: Parent<'_>) -> Result<(), TraverseError> {
        match node.node() {
            Node::Program { .. } => self.0.exit_program(node, parent),
            Node::NumberLiteral { .. } => self.0.exit_number_literal(node, parent),
            Node::StringLiteral { .. } => self.0.exit_string_literal(node, parent),
            Node::CallExpression { .. } => self.0.exit_call_expression(node, parent),
        }
    }
}

/// Walk a source tree with per-kind callbacks.
pub fn traverse_source<V>(root: &Node, visitor: &mut V) -> Result<(), TraverseError>
where
    V: SourceVisitor + ?Sized,
{
    traverse(root, &mut Dispatch(visitor))
}
