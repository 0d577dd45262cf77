//! # Node Kinds
//!
//! The shared node-kind vocabulary. Names match the `"type"` tags used in
//! serialized trees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every node kind known to either tree vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root of both vocabularies.
    Program,
    /// Digit run, both vocabularies.
    NumberLiteral,
    /// Quoted text, both vocabularies.
    StringLiteral,
    /// Function application, both vocabularies (different shapes).
    CallExpression,
    /// Target-only statement wrapper around a top-level call.
    ExpressionStatement,
    /// Target-only callee name.
    Identifier,
}

impl NodeKind {
    /// All kinds, in declaration order.
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Program,
        NodeKind::NumberLiteral,
        NodeKind::StringLiteral,
        NodeKind::CallExpression,
        NodeKind::ExpressionStatement,
        NodeKind::Identifier,
    ];

    /// Tag used for this kind in serialized trees.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::NumberLiteral => "NumberLiteral",
            Self::StringLiteral => "StringLiteral",
            Self::CallExpression => "CallExpression",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::Identifier => "Identifier",
        }
    }

    /// Look up a kind by its serialized tag.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use prefix_ast::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_name("Identifier"), Some(NodeKind::Identifier));
    /// assert_eq!(NodeKind::from_name("BinaryExpression"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(NodeKind::from_name("program"), None);
    }
}
