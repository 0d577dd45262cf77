//! # Serialized Trees
//!
//! Untyped syntax tree in the JSON object shape used by hosts:
//!
//! ```text
//! { "type": "CallExpression", "name": "add", "params": [ ... ] }
//! { "type": "ExpressionStatement", "expression": { ... } }
//! ```
//!
//! Trees arriving this way have not been checked against either vocabulary,
//! so a node's `type` may be anything. The traverser and the code generator
//! accept them and report unknown kinds as errors.
//!
//! ## Usage
//!
//! ```rust
//! use prefix_ast::{source, SerializedNode};
//!
//! let node = SerializedNode::from(&source::Node::number("7"));
//! assert_eq!(node.node_type, "NumberLiteral");
//! assert_eq!(node.value.as_deref(), Some("7"));
//! ```

use crate::kind::NodeKind;
use crate::{source, target};
use serde::{Deserialize, Serialize};

/// A node of either vocabulary, or of neither.
///
/// Every field other than `type` is optional; which ones a consumer reads
/// depends on the kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedNode {
    /// Node type tag (e.g. "Program", "CallExpression").
    #[serde(rename = "type")]
    pub node_type: String,

    /// Literal text of `NumberLiteral` / `StringLiteral`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Name of a source `CallExpression` or of an `Identifier`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parameters of a source `CallExpression`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<SerializedNode>>,

    /// Statements of a `Program`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<SerializedNode>>,

    /// Wrapped expression of an `ExpressionStatement`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Box<SerializedNode>>,

    /// Callee of a target `CallExpression`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callee: Option<Box<SerializedNode>>,

    /// Arguments of a target `CallExpression`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<SerializedNode>>,
}

impl SerializedNode {
    /// Create a node carrying only its type tag.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    /// Known kind of this node, if its tag names one.
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_name(&self.node_type)
    }
}

impl From<&source::Node> for SerializedNode {
    fn from(node: &source::Node) -> Self {
        let mut out = Self::new(node.kind().as_str());
        match node {
            source::Node::Program { body } => {
                out.body = Some(body.iter().map(Self::from).collect());
            }
            source::Node::NumberLiteral { value } | source::Node::StringLiteral { value } => {
                out.value = Some(value.clone());
            }
            source::Node::CallExpression { name, params } => {
                out.name = Some(name.clone());
                out.params = Some(params.iter().map(Self::from).collect());
            }
        }
        out
    }
}

impl From<&target::Node> for SerializedNode {
    fn from(node: &target::Node) -> Self {
        let mut out = Self::new(node.kind().as_str());
        match node {
            target::Node::Program { body } => {
                out.body = Some(body.iter().map(Self::from).collect());
            }
            target::Node::ExpressionStatement { expression } => {
                out.expression = Some(Box::new(Self::from(&**expression)));
            }
            target::Node::CallExpression { callee, arguments } => {
                let mut ident = Self::new(NodeKind::Identifier.as_str());
                ident.name = Some(callee.name.clone());
                out.callee = Some(Box::new(ident));
                out.arguments = Some(arguments.iter().map(Self::from).collect());
            }
            target::Node::Identifier { name } => {
                out.name = Some(name.clone());
            }
            target::Node::NumberLiteral { value } | target::Node::StringLiteral { value } => {
                out.value = Some(value.clone());
            }
        }
        out
    }
}
