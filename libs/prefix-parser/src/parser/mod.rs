//! # Prefix Parser
//!
//! Recursive descent parser for prefix call expressions.
//! Produces the source AST.
//!
//! ## Example
//!
//! ```rust
//! use prefix_parser::lexer::Lexer;
//! use prefix_parser::parser::Parser;
//!
//! let tokens = Lexer::new("(add 2 2)").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.children().len(), 1);
//! ```

mod expressions;

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use prefix_ast::source::Node;
use std::iter::Peekable;
use std::vec::IntoIter;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a single shared token cursor.
///
/// Owns the token stream; every production consumes from the same cursor.
pub struct Parser {
    /// Token stream, consumed front to back.
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    /// Create a new parser that takes ownership of `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Parse the entire token stream into a `Program`.
    ///
    /// Top-level expressions are collected until the stream is exhausted, so
    /// sibling calls such as `(a 1) (b 2)` are allowed.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.parse_expression()?);
        }

        Ok(Node::program(body))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Check if every token has been consumed.
    fn is_at_end(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Check if current token matches kind.
    ///
    /// Running out of tokens is an error here: the caller is inside a
    /// production that still needs input.
    fn check(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        self.tokens
            .peek()
            .map(|token| token.kind == kind)
            .ok_or(ParseError::UnexpectedEndOfInput)
    }

    /// Consume and return the current token.
    fn advance(&mut self) -> Result<Token, ParseError> {
        self.tokens.next().ok_or(ParseError::UnexpectedEndOfInput)
    }

    /// Consume the current token if it matches `kind`.
    ///
    /// ## Returns
    ///
    /// Ok with consumed token, or Err carrying the token that was found
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.advance()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::UnexpectedToken(token))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
