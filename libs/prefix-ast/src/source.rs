//! # Source AST
//!
//! Tree produced by the parser from prefix-notation input such as
//! `(add 2 (subtract 4 2))`.
//!
//! ## Example
//!
//! ```rust
//! use prefix_ast::source::Node;
//!
//! let call = Node::call("subtract", vec![Node::number("4"), Node::number("2")]);
//! assert_eq!(call.children().len(), 2);
//! ```

use crate::kind::NodeKind;
use serde::{Deserialize, Serialize};

/// A node of the source vocabulary.
///
/// `Program` is only ever produced as the root; every other node is reachable
/// from it exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Root: ordered top-level expressions.
    Program { body: Vec<Node> },
    /// Text of a digit run.
    NumberLiteral { value: String },
    /// Text between the quotes, quotes stripped.
    StringLiteral { value: String },
    /// `(name params...)`. `name` is never empty; `params` may be.
    CallExpression { name: String, params: Vec<Node> },
}

impl Node {
    /// Create a program root.
    pub fn program(body: Vec<Node>) -> Self {
        Self::Program { body }
    }

    /// Create a number literal.
    pub fn number(value: impl Into<String>) -> Self {
        Self::NumberLiteral {
            value: value.into(),
        }
    }

    /// Create a string literal. `value` excludes the quotes.
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    /// Create a call expression.
    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Self::CallExpression {
            name: name.into(),
            params,
        }
    }

    /// Kind of this node.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program { .. } => NodeKind::Program,
            Self::NumberLiteral { .. } => NodeKind::NumberLiteral,
            Self::StringLiteral { .. } => NodeKind::StringLiteral,
            Self::CallExpression { .. } => NodeKind::CallExpression,
        }
    }

    /// Children in visiting order: `Program.body`, `CallExpression.params`,
    /// nothing for literals.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Program { body } => body,
            Self::CallExpression { params, .. } => params,
            Self::NumberLiteral { .. } | Self::StringLiteral { .. } => &[],
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
        let mut pending = match self {
            Self::Program { body: children } | Self::CallExpression { params: children, .. } => {
                std::mem::take(children)
            }
            Self::NumberLiteral { .. } | Self::StringLiteral { .. } => return,
        };
        while let Some(mut node) = pending.pop() {
            match &mut node {
                Self::Program { body: children }
                | Self::CallExpression { params: children, .. } => pending.append(children),
                Self::NumberLiteral { .. } | Self::StringLiteral { .. } => {}
            }
        }
    }
}
