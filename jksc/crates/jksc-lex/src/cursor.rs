//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking the source one byte at a time, tracking line/column
//! information for error reporting.

/// A cursor for traversing source code byte by byte.
///
/// The cursor only moves forward. Lookahead is available through
/// [`Cursor::peek`]; the byte just consumed through [`Cursor::prev`].
///
/// Every consumed byte advances the column by one, tabs and the bytes of
/// multi-byte UTF-8 sequences included. Consuming `\n` moves to column 1 of
/// the next line.
///
/// # Example
///
/// ```
/// use jksc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current(), b'i');
/// cursor.advance();
/// assert_eq!(cursor.current(), b'n');
/// assert_eq!(cursor.prev(), b'i');
/// ```
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the cursor position, or `0` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    ///
    /// Returns the sentinel `0` when that position is past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use jksc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(0), b'a');
    /// assert_eq!(cursor.peek(2), b'c');
    /// assert_eq!(cursor.peek(3), 0);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.source
            .get(self.position.saturating_add(offset))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the byte just before the cursor, or `0` at the start.
    #[inline]
    pub fn prev(&self) -> u8 {
        self.position
            .checked_sub(1)
            .and_then(|pos| self.source.get(pos))
            .copied()
            .unwrap_or(0)
    }

    /// Advances the cursor by one byte.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.source.get(self.position) else {
            return;
        };
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by `count` bytes, stopping at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use jksc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nbcd");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current(), b'c');
    /// assert_eq!((cursor.line(), cursor.column()), (2, 2));
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Advances to the end of the source, tracking lines on the way.
    pub fn advance_to_end(&mut self) {
        while !self.is_at_end() {
            self.advance();
        }
    }

    /// Checks if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes from `start` up to the cursor.
    ///
    /// An empty slice is returned if `start` lies past the cursor.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.source.get(start..self.position).unwrap_or_default()
    }

    /// Returns the bytes from the cursor to the end of the source.
    pub fn remaining(&self) -> &'a [u8] {
        self.source.get(self.position..).unwrap_or_default()
    }

    /// Returns the full source.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}
