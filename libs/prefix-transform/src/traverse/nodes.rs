//! Child-enumeration rules for the trees in `prefix-ast`.

use super::Traversable;
use crate::error::TraverseError;
use prefix_ast::{source, target, NodeKind, SerializedNode};

impl Traversable for source::Node {
    fn kind_name(&self) -> &str {
        self.kind().as_str()
    }

    fn children(&self) -> Result<&[Self], TraverseError> {
        Ok(source::Node::children(self))
    }
}

impl Traversable for target::Node {
    fn kind_name(&self) -> &str {
        self.kind().as_str()
    }

    fn children(&self) -> Result<&[Self], TraverseError> {
        Ok(target::Node::children(self))
    }
}

/// Serialized trees are checked as they are walked: the `type` tag decides
/// which field holds the children, and an unrecognised tag is an error.
impl Traversable for SerializedNode {
    fn kind_name(&self) -> &str {
        &self.node_type
    }

    fn children(&self) -> Result<&[Self], TraverseError> {
        let Some(kind) = self.kind() else {
            return Err(TraverseError::UnknownNodeKind(self.node_type.clone()));
        };

        let children = match kind {
            NodeKind::Program => self.body.as_deref(),
            NodeKind::CallExpression => self.params.as_deref().or(self.arguments.as_deref()),
            NodeKind::ExpressionStatement => self.expression.as_deref().map(std::slice::from_ref),
            NodeKind::NumberLiteral | NodeKind::StringLiteral | NodeKind::Identifier => None,
        };

        Ok(children.unwrap_or(&[]))
    }
}
