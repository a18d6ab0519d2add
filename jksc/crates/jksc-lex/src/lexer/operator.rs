//! Operator and separator lexing.

use crate::error::LexErrorKind;
use crate::tables::MAX_SYMBOL_LEN;
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or separator by longest match.
    ///
    /// Tries the next three bytes against the symbol table, then two, then
    /// one, so `**=` is one token rather than `*` `*` `=`. A `*/` reaching
    /// this point closes no comment and becomes an unknown token. Any byte
    /// that starts no symbol becomes a one-byte unknown token.
    pub(crate) fn lex_symbol(&mut self) -> Token {
        if self.cursor.current() == b'*' && self.cursor.peek(1) == b'/' {
            self.cursor.advance_n(2);
            self.error_at_token_start(LexErrorKind::UnmatchedCommentClose);
            return self.spelled_token(TokenType::Unknown);
        }

        let remaining = self.cursor.remaining();
        for len in (1..=MAX_SYMBOL_LEN.min(remaining.len())).rev() {
            if let Some(kind) = self.tables.lookup_symbol(&remaining[..len]) {
                self.cursor.advance_n(len);
                return self.make_token(kind, Vec::new());
            }
        }

        self.cursor.advance();
        self.error_at_token_start(LexErrorKind::UnknownToken);
        self.spelled_token(TokenType::Unknown)
    }
}
