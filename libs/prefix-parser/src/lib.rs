//! # Prefix Parser
//!
//! Lexer and parser for the prefix-notation call language.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → source::Node::Program
//! ```
//!
//! ## Example
//!
//! ```rust
//! use prefix_parser::{parse, tokenize};
//!
//! let tokens = tokenize("(add 2 (subtract 4 2))").unwrap();
//! let program = parse(tokens).unwrap();
//! assert_eq!(program.children().len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the compiler pipeline:
//!
//! ```text
//! prefix-parser → prefix-transform → prefix-codegen → prefix-compiler
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{LexError, ParseError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use prefix_ast::source::Node;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Split source text into tokens.
///
/// ## Example
///
/// ```rust
/// use prefix_parser::{tokenize, TokenKind};
///
/// let tokens = tokenize("(add 1 2)").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1].kind, TokenKind::Name);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Parse a token sequence into a `Program` node. The tokens are consumed.
///
/// ## Example
///
/// ```rust
/// use prefix_parser::{parse, tokenize, ParseError};
///
/// let err = parse(tokenize("(add 1").unwrap()).unwrap_err();
/// assert_eq!(err, ParseError::UnexpectedEndOfInput);
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_call() {
        let program = parse(tokenize("(add 123 456)").unwrap()).unwrap();
        assert_eq!(
            program,
            Node::program(vec![Node::call(
                "add",
                vec![Node::number("123"), Node::number("456")]
            )])
        );
    }

    #[test]
    fn test_parse_empty_source() {
        let program = parse(tokenize("   ").unwrap()).unwrap();
        assert_eq!(program, Node::program(Vec::new()));
    }
}
