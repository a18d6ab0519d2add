//! Comment lexing.
//!
//! This module handles skipping whitespace, line comments and block comments.

use jksc_util::Span;

use crate::chars::is_whitespace;
use crate::error::LexErrorKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. Never produces a token itself.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            match (self.cursor.current(), self.cursor.peek(1)) {
                (b'/', b'/') => self.skip_line_comment(),
                (b'/', b'*') => self.skip_block_comment(),
                (c, _) if is_whitespace(c) => self.cursor.advance(),
                _ => return,
            }
        }
    }

    /// Skips a `//` comment up to, not including, the line break.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
    }

    /// Skips a `/* ... */` comment.
    ///
    /// Block comments do not nest. Without a closing `*/` the rest of the
    /// input is swallowed and one error is recorded at the opening `/*`.
    fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance_n(2);

        loop {
            if self.cursor.is_at_end() {
                let span = Span::new(start, start + 2, line, column);
                self.record_error(LexErrorKind::UnterminatedComment, span);
                return;
            }
            if self.cursor.current() == b'*' && self.cursor.peek(1) == b'/' {
                self.cursor.advance_n(2);
                return;
            }
            self.cursor.advance();
        }
    }
}
