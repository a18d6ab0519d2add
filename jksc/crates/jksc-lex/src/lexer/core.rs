//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-token dispatch and
//! the driver that scans a whole source.

use jksc_util::{Handler, Span};
use log::{debug, trace};

use crate::chars::is_ident_start;
use crate::cursor::Cursor;
use crate::error::{LexErrorKind, LexResult, SyntaxError};
use crate::tables::LexTables;
use crate::token::{Token, TokenType};

/// Lexer for the JKS programming language.
///
/// The lexer transforms source code text into a stream of tokens. Malformed
/// input never stops it: each problem is recorded as a [`SyntaxError`] and a
/// best-effort token is produced in its place.
///
/// # Example
///
/// ```
/// use jksc_lex::{Lexer, TokenType};
///
/// let mut lexer = Lexer::new("x += 1;");
/// assert_eq!(lexer.next_token().kind, TokenType::Identifier);
/// assert_eq!(lexer.next_token().kind, TokenType::PlusEq);
/// assert_eq!(lexer.next_token().kind, TokenType::Number);
/// assert_eq!(lexer.next_token().kind, TokenType::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenType::EndOfInput);
/// assert!(lexer.errors().is_empty());
/// ```
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Keyword and symbol tables.
    pub(crate) tables: &'a LexTables,

    /// Errors recorded so far, in discovery order.
    errors: Vec<SyntaxError>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the end-of-input token has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer using the shared default tables.
    pub fn new(source: &'a str) -> Self {
        Self::with_tables(source, LexTables::shared())
    }

    /// Creates a new lexer using the given tables.
    pub fn with_tables(source: &'a str, tables: &'a LexTables) -> Self {
        Self {
            cursor: Cursor::new(source),
            tables,
            errors: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current byte.
    /// Once the input is exhausted every call returns
    /// [`TokenType::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.begin_token();

        if self.cursor.is_at_end() {
            self.finished = true;
            return self.make_token(TokenType::EndOfInput, Vec::new());
        }

        match self.cursor.current() {
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            b'.' if self.cursor.peek(1).is_ascii_digit() => self.lex_number(),
            b'"' => self.lex_string(),
            _ => self.lex_symbol(),
        }
    }

    /// Scans the whole source, end-of-input token included.
    ///
    /// # Example
    ///
    /// ```
    /// use jksc_lex::{Lexer, TokenType};
    ///
    /// let out = Lexer::new("a && b").tokenize();
    /// let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [TokenType::Identifier, TokenType::DoubleAmpersand, TokenType::Identifier, TokenType::EndOfInput]
    /// );
    /// ```
    pub fn tokenize(mut self) -> Tokenized {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            "scanned {} bytes into {} tokens with {} errors",
            self.cursor.source().len(),
            tokens.len(),
            self.errors.len()
        );

        Tokenized {
            tokens,
            errors: self.errors,
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(crate) fn make_token(&self, kind: TokenType, value: Vec<u8>) -> Token {
        Token::new(kind, value, self.token_span())
    }

    /// Token whose value is its source spelling.
    pub(crate) fn spelled_token(&self, kind: TokenType) -> Token {
        let text = self.cursor.slice_from(self.token_start);
        self.make_token(kind, text.to_vec())
    }

    /// Records an error at the byte under the cursor.
    pub(crate) fn error_at_cursor(&mut self, kind: LexErrorKind) {
        let start = self.cursor.position();
        let end = if self.cursor.is_at_end() { start } else { start + 1 };
        let span = Span::new(start, end, self.cursor.line(), self.cursor.column());
        self.record_error(kind, span);
    }

    /// Records an error covering the current token so far.
    pub(crate) fn error_at_token_start(&mut self, kind: LexErrorKind) {
        self.record_error(kind, self.token_span());
    }

    /// Records an error at an explicit position.
    ///
    /// A failure point is reported once: an error at the same offset as the
    /// previous one is dropped.
    pub(crate) fn record_error(&mut self, kind: LexErrorKind, span: Span) {
        if self
            .errors
            .last()
            .is_some_and(|last| last.span.start == span.start)
        {
            return;
        }
        trace!("{}:{}: {}", span.line, span.column, kind);
        self.errors.push(SyntaxError::new(kind, span));
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token, the end-of-input marker last.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

/// The outcome of scanning a whole source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Tokens in source order; the last one is always end-of-input.
    pub tokens: Vec<Token>,
    /// Errors in discovery order.
    pub errors: Vec<SyntaxError>,
}

impl Tokenized {
    /// Checks if any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Hands every error to a diagnostic handler.
    pub fn emit_errors(&self, handler: &Handler) {
        for error in &self.errors {
            error.emit(handler);
        }
    }

    /// Returns the tokens, or the errors if there were any.
    pub fn into_result(self) -> LexResult<Vec<Token>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}
