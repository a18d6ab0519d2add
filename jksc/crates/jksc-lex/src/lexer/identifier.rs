//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumeric characters or underscores. The whole run is then looked
    /// up in the keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current()) {
            self.cursor.advance();
        }

        let word = self.cursor.slice_from(self.token_start);
        let kind = if self.tables.is_keyword(word) {
            TokenType::Keyword
        } else {
            TokenType::Identifier
        };
        self.spelled_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_util::{kinds, lex_all};
    use crate::tables::KEYWORDS;
    use crate::TokenType::*;

    #[test]
    fn test_simple_identifier() {
        let (tokens, errs) = lex_all("foo");
        assert_eq!(tokens[0].kind, Identifier);
        assert_eq!(tokens[0].text(), "foo");
        assert!(errs.is_empty());
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let (tokens, _) = lex_all("_foo_bar_123 __");
        assert_eq!(tokens[0].text(), "_foo_bar_123");
        assert_eq!(tokens[1].text(), "__");
    }

    #[test]
    fn test_all_keywords() {
        for kw in KEYWORDS {
            let (tokens, _) = lex_all(kw);
            assert_eq!(tokens.len(), 1, "{}", kw);
            assert_eq!(tokens[0].kind, Keyword, "{}", kw);
            assert_eq!(tokens[0].text(), *kw);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds("integer"), vec![Identifier, EndOfInput]);
        assert_eq!(kinds("if_"), vec![Identifier, EndOfInput]);
        assert_eq!(kinds("bool2"), vec![Identifier, EndOfInput]);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(kinds("While TRUE"), vec![Identifier, Identifier, EndOfInput]);
    }

    #[test]
    fn test_identifier_stops_at_symbol() {
        let (tokens, _) = lex_all("x+y");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].col(), 3);
    }
}
