//! # Target AST
//!
//! Tree consumed by the code generator to emit infix calls such as
//! `add(2, subtract(4, 2));`.
//!
//! ## Example
//!
//! ```rust
//! use prefix_ast::target::Node;
//!
//! let stmt = Node::statement(Node::call("add", vec![Node::number("2")]));
//! assert_eq!(stmt.children().len(), 1);
//! ```

use crate::kind::NodeKind;
use serde::{Deserialize, Serialize};

/// A node of the target vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Root: ordered statements (or bare literals).
    Program { body: Vec<Node> },
    /// A top-level call used as a statement.
    ExpressionStatement { expression: Box<Node> },
    /// `callee(arguments...)`.
    CallExpression {
        callee: Identifier,
        arguments: Vec<Node>,
    },
    /// A bare name.
    Identifier { name: String },
    /// Text of a digit run.
    NumberLiteral { value: String },
    /// Text emitted between quotes.
    StringLiteral { value: String },
}

/// Callee of a target call. Serialized as a tagged `Identifier` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CalleeRepr", into = "CalleeRepr")]
pub struct Identifier {
    /// Never empty.
    pub name: String,
}

impl Identifier {
    /// Create an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum CalleeRepr {
    Identifier { name: String },
}

impl From<CalleeRepr> for Identifier {
    fn from(repr: CalleeRepr) -> Self {
        let CalleeRepr::Identifier { name } = repr;
        Self { name }
    }
}

impl From<Identifier> for CalleeRepr {
    fn from(ident: Identifier) -> Self {
        CalleeRepr::Identifier { name: ident.name }
    }
}

impl Node {
    /// Create a program root.
    pub fn program(body: Vec<Node>) -> Self {
        Self::Program { body }
    }

    /// Wrap an expression as a statement.
    pub fn statement(expression: Node) -> Self {
        Self::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    /// Create a call expression with an identifier callee.
    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Self::CallExpression {
            callee: Identifier::new(callee),
            arguments,
        }
    }

    /// Create an identifier node.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Create a number literal.
    pub fn number(value: impl Into<String>) -> Self {
        Self::NumberLiteral {
            value: value.into(),
        }
    }

    /// Create a string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    /// Kind of this node.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program { .. } => NodeKind::Program,
            Self::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            Self::CallExpression { .. } => NodeKind::CallExpression,
            Self::Identifier { .. } => NodeKind::Identifier,
            Self::NumberLiteral { .. } => NodeKind::NumberLiteral,
            Self::StringLiteral { .. } => NodeKind::StringLiteral,
        }
    }

    /// Children in visiting order. The callee of a call is not a child; it
    /// is part of the call itself.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Program { body } => body,
            Self::ExpressionStatement { expression } => std::slice::from_ref(&**expression),
            Self::CallExpression { arguments, .. } => arguments,
            Self::Identifier { .. } | Self::NumberLiteral { .. } | Self::StringLiteral { .. } => {
                &[]
            }
        }
    }

    /// Count nodes of `kind` in this subtree, including `self`.
    pub fn count(&self, kind: NodeKind) -> usize {
        let mut pending = vec![self];
        let mut total = 0;
        while let Some(node) = pending.pop() {
            total += usize::from(node.kind() == kind);
            pending.extend(node.children());
        }
        total
    }
}

/// Drops nested nodes from a worklist so tree depth never reaches the call
/// stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            take_children(&mut node, &mut pending);
        }
    }
}

fn take_children(node: &mut Node, pending: &mut Vec<Node>) {
    match node {
        Node::Program { body: children } | Node::CallExpression { arguments: children, .. } => {
            pending.append(children)
        }
        Node::ExpressionStatement { expression } => {
            pending.push(std::mem::replace(&mut **expression, Node::program(Vec::new())))
        }
        Node::Identifier { .. } | Node::NumberLiteral { .. } | Node::StringLiteral { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_has_single_child() {
        let stmt = Node::statement(Node::call("f", Vec::new()));
        assert_eq!(stmt.children().len(), 1);
        assert_eq!(stmt.children()[0].kind(), NodeKind::CallExpression);
    }

    #[test]
    fn test_callee_is_not_a_child() {
        let call = Node::call("add", vec![Node::number("1")]);
        assert_eq!(call.children(), &[Node::number("1")]);
    }

    #[test]
    fn test_drop_deep_tree() {
        let mut node = Node::number("1");
        for depth in 0..200_000 {
            node = if depth % 2 == 0 {
                Node::call("f", vec![node])
            } else {
                Node::statement(node)
            };
        }
        let program = Node::program(vec![node]);
        assert_eq!(program.count(NodeKind::ExpressionStatement), 100_000);
        drop(program);
    }

    #[test]
    fn test_count_skips_callee() {
        let program = Node::program(vec![Node::statement(Node::call(
            "add",
            vec![Node::call("one", Vec::new())],
        ))]);
        assert_eq!(program.count(NodeKind::CallExpression), 2);
        assert_eq!(program.count(NodeKind::Identifier), 0);
    }
}
