//! Code generation errors.

use thiserror::Error;

/// Errors raised while emitting text.
///
/// Only serialized trees can trigger these; a typed target tree always
/// renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    #[error("unknown node kind '{0}'")]
    UnknownNodeKind(String),

    #[error("{kind} node is missing its '{field}' field")]
    MissingField { kind: String, field: &'static str },
}
