//! # Character Cursor
//!
//! Single forward cursor over the source characters.
//! Tracks the byte offset for slicing and the character offset for errors.
//!
//! ## Example
//!
//! ```rust
//! use prefix_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("add");
//! assert_eq!(cursor.peek(), Some('a'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('d'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// Never moves backwards and looks at most one character ahead.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Characters consumed so far.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            position: 0,
        }
    }

    /// Number of characters consumed so far (0-based index of `peek()`).
    ///
    /// ## Example
    ///
    /// ```rust
    /// use prefix_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("é1");
    /// cursor.advance();
    /// assert_eq!(cursor.position(), 1);
    /// ```
    pub fn position(&self) -> usize {
        self.position
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        self.position += 1;
        Some(c)
    }

    /// Consume characters while `predicate` holds and return them as one
    /// slice of the source.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use prefix_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.consume_while(|c| c.is_ascii_digit()), "123");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// ```
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.byte;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
