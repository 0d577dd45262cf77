//! Text emission for target trees.

use crate::error::CodeGenError;
use config::constants::{
    ARGUMENT_SEPARATOR, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, STATEMENT_SEPARATOR,
    STATEMENT_TERMINATOR, STRING_DELIMITER,
};
use prefix_ast::target::Node;
use prefix_ast::{NodeKind, SerializedNode};
use stacker::maybe_grow;

/// A tree that can be rendered as infix call text.
pub trait Emit {
    fn emit(&self) -> Result<String, CodeGenError>;
}

/// Render `node` and everything below it.
pub fn generate<N: Emit + ?Sized>(node: &N) -> Result<String, CodeGenError> {
    node.emit()
}

fn quote(value: &str) -> String {
    format!("{STRING_DELIMITER}{value}{STRING_DELIMITER}")
}

fn join<'a, N, I>(nodes: I, separator: &str) -> Result<String, CodeGenError>
where
    N: Emit + 'a,
    I: IntoIterator<Item = &'a N>,
{
    Ok(nodes
        .into_iter()
        .map(Emit::emit)
        .collect::<Result<Vec<_>, _>>()?
        .join(separator))
}

// =============================================================================
// TYPED TREES
// =============================================================================

impl Emit for Node {
    fn emit(&self) -> Result<String, CodeGenError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            Ok(match self {
                Node::Program { body } => join(body, STATEMENT_SEPARATOR)?,
                Node::ExpressionStatement { expression } => {
                    format!("{}{STATEMENT_TERMINATOR}", expression.emit()?)
                }
                Node::CallExpression { callee, arguments } => {
                    format!("{}({})", callee.name, join(arguments, ARGUMENT_SEPARATOR)?)
                }
                Node::Identifier { name } => name.clone(),
                Node::NumberLiteral { value } => value.clone(),
                Node::StringLiteral { value } => quote(value),
            })
        })
    }
}

// =============================================================================
// SERIALIZED TREES
// =============================================================================

impl Emit for SerializedNode {
    fn emit(&self) -> Result<String, CodeGenError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let kind = self
                .kind()
                .ok_or_else(|| CodeGenError::UnknownNodeKind(self.node_type.clone()))?;

            Ok(match kind {
                NodeKind::Program => join(field(self, &self.body, "body")?, STATEMENT_SEPARATOR)?,
                NodeKind::ExpressionStatement => {
                    let expression = field(self, &self.expression, "expression")?;
                    format!("{}{STATEMENT_TERMINATOR}", expression.emit()?)
                }
                NodeKind::CallExpression => {
                    // A source-shaped call has `name` and `params` but no callee.
                    let callee = field(self, &self.callee, "callee")?;
                    let arguments = field(self, &self.arguments, "arguments")?;
                    format!("{}({})", callee.emit()?, join(arguments, ARGUMENT_SEPARATOR)?)
                }
                NodeKind::Identifier => field(self, &self.name, "name")?.clone(),
                NodeKind::NumberLiteral => field(self, &self.value, "value")?.clone(),
                NodeKind::StringLiteral => quote(field(self, &self.value, "value")?),
            })
        })
    }
}

/// A field `node`'s kind cannot render without.
fn field<'a, T>(
    node: &SerializedNode,
    slot: &'a Option<T>,
    name: &'static str,
) -> Result<&'a T, CodeGenError> {
    slot.as_ref().ok_or_else(|| CodeGenError::MissingField {
        kind: node.node_type.clone(),
        field: name,
    })
}

// =============================================================================
// TESTS
// =============================================================================
