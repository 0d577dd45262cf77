//! # Tokens
//!
//! Token types for the prefix-call lexer.
//!
//! ## Example
//!
//! ```rust
//! use prefix_parser::lexer::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Number, "10");
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A classified fragment of source text.
///
/// ## Example
///
/// ```rust
/// use prefix_parser::lexer::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Name, "add");
/// assert_eq!(token.text, "add");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text. For strings, the quotes are already stripped.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// Digit run like `123`
    Number,
    /// Quoted text like `"foo"`
    String,
    /// Letter run like `add`
    Name,
}

impl TokenKind {
    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::ParenOpen => "paren-open",
            Self::ParenClose => "paren-close",
            Self::Number => "number",
            Self::String => "string",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Name, "add").to_string(), "name 'add'");
        assert_eq!(TokenKind::ParenOpen.display(), "paren-open");
    }

    #[test]
    fn test_token_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&Token::new(TokenKind::ParenClose, ")")).unwrap();
        assert_eq!(json, r#"{"kind":"paren-close","text":")"}"#);
    }
}
