//! # Prefix Lexer
//!
//! Tokenizes prefix-notation source into parens, numbers, strings and names.
//!
//! ## Example
//!
//! ```rust
//! use prefix_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(add 2 2)").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::ParenOpen);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::LexError;
use config::constants::STRING_DELIMITER;

// =============================================================================
// LEXER
// =============================================================================

/// Prefix-call lexer.
///
/// Classifies each character in a fixed order: `(`, `)`, whitespace, digit,
/// quote, letter. Anything else is an error.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Tokens in source order, or the first lexical error.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use prefix_parser::lexer::Lexer;
    /// use prefix_parser::LexError;
    ///
    /// let err = Lexer::new("(add 1 #)").tokenize().unwrap_err();
    /// assert_eq!(err, LexError::UnexpectedCharacter { character: '#', position: 8 });
    /// ```
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.peek() {
            self.scan_token(c)?;
        }
        Ok(self.tokens)
    }

    /// Scan a single token starting at `c`, or skip it if it is whitespace.
    fn scan_token(&mut self, c: char) -> Result<(), LexError> {
        match c {
            '(' => self.scan_single(TokenKind::ParenOpen),
            ')' => self.scan_single(TokenKind::ParenClose),
            c if c.is_whitespace() => {
                self.cursor.advance();
            }
            c if c.is_ascii_digit() => self.scan_run(TokenKind::Number, |c| c.is_ascii_digit()),
            STRING_DELIMITER => self.scan_string()?,
            c if c.is_ascii_alphabetic() => {
                self.scan_run(TokenKind::Name, |c| c.is_ascii_alphabetic())
            }
            character => {
                return Err(LexError::UnexpectedCharacter {
                    character,
                    position: self.cursor.position() + 1,
                })
            }
        }
        Ok(())
    }

    /// Emit a one-character token.
    fn scan_single(&mut self, kind: TokenKind) {
        if let Some(c) = self.cursor.advance() {
            self.tokens.push(Token::new(kind, c));
        }
    }

    /// Emit a token for the longest run of characters in one class.
    fn scan_run(&mut self, kind: TokenKind, class: impl Fn(char) -> bool) {
        let text = self.cursor.consume_while(class);
        self.tokens.push(Token::new(kind, text));
    }

    /// Scan a string literal. No escapes; the text ends at the next quote.
    fn scan_string(&mut self) -> Result<(), LexError> {
        let position = self.cursor.position() + 1;
        self.cursor.advance(); // Opening quote

        let text = self.cursor.consume_while(|c| c != STRING_DELIMITER);
        if self.cursor.advance() != Some(STRING_DELIMITER) {
            return Err(LexError::UnterminatedString { position });
        }

        self.tokens.push(Token::new(TokenKind::String, text));
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
