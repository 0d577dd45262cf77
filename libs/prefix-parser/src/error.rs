//! # Syntax Errors
//!
//! Error types for the lexer and the parser.
//!
//! ## Example
//!
//! ```rust
//! use prefix_parser::error::LexError;
//!
//! let error = LexError::UnexpectedCharacter { character: '#', position: 8 };
//! assert_eq!(error.to_string(), "unexpected character '#' at position 8");
//! ```

use crate::lexer::Token;
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// Errors raised while splitting source text into tokens.
///
/// Positions are 1-based character offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that belongs to no token class.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position: usize,
    },

    /// A string literal whose closing quote never arrives.
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString {
        /// Position of the opening quote.
        position: usize,
    },
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Errors raised while building the source tree from tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The current token matches no production.
    #[error("unexpected token {0}")]
    UnexpectedToken(Token),

    /// A production needed another token but the sequence was exhausted.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_unterminated_string_display() {
        let error = LexError::UnterminatedString { position: 3 };
        assert!(error.to_string().contains("position 3"));
    }

    #[test]
    fn test_unexpected_token_display() {
        let error = ParseError::UnexpectedToken(Token::new(TokenKind::ParenClose, ")"));
        let msg = error.to_string();
        assert!(msg.contains("unexpected token"));
        assert!(msg.contains("')'"));
    }

    #[test]
    fn test_unexpected_end_display() {
        assert_eq!(
            ParseError::UnexpectedEndOfInput.to_string(),
            "unexpected end of input"
        );
    }
}
