//! # Traversal Errors
//!
//! Both variants signal a tree that breaks the shape contract, never bad
//! user input.

use prefix_ast::NodeKind;
use thiserror::Error;

/// Errors raised while walking a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// A node whose kind has no child-enumeration rule.
    #[error("unknown node kind '{0}'")]
    UnknownNodeKind(String),

    /// A node reached under a parent that offers it no place to go, such as a
    /// `Program` nested inside a call.
    #[error("{kind} has no insertion slot in its parent")]
    DetachedNode {
        /// Kind of the node that could not be placed.
        kind: NodeKind,
    },
}
