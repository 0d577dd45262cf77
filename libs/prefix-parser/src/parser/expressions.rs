//! # Expression Parsing
//!
//! The single `expression` production.
//!
//! ## Grammar
//!
//! ```text
//! expression = number | string | "(" name expression* ")"
//! ```

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use prefix_ast::source::Node;
use stacker::maybe_grow;

impl Parser {
    /// Parse one expression.
    ///
    /// Nesting depth follows the input; the stack is grown on demand.
    pub(super) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let token = self.advance()?;

            match token.kind {
                TokenKind::Number => Ok(Node::number(token.text)),
                TokenKind::String => Ok(Node::string(token.text)),
                TokenKind::ParenOpen => self.parse_call(),
                TokenKind::ParenClose | TokenKind::Name => Err(ParseError::UnexpectedToken(token)),
            }
        })
    }

    /// Parse the rest of a call after its opening paren.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// call = "(" name expression* ")"
    /// ```
    ///
    /// ## Example
    ///
    /// ```text
    /// (add 2 3)
    /// (add 2 (subtract 4 2))
    /// (now)
    /// ```
    fn parse_call(&mut self) -> Result<Node, ParseError> {
        let name = self.expect(TokenKind::Name)?;
        let mut params = Vec::new();

        while !self.check(TokenKind::ParenClose)? {
            params.push(self.parse_expression()?);
        }
        self.advance()?; // Closing paren

        Ok(Node::call(name.text, params))
    }
}

// =============================================================================
// TESTS
// =============================================================================
