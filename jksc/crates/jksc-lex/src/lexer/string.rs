//! String literal lexing.
//!
//! This module handles lexing of string literals and their escape
//! sequences. The token value is the decoded byte sequence.

use crate::chars::hex_digit_value;
use crate::error::LexErrorKind;
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Strings do not span lines. A raw line break or the end of input
    /// closes the token early with an error at the opening quote; the bytes
    /// decoded so far are kept and the line break is left for the skipper.
    ///
    /// # Escape Sequences
    ///
    /// - `\'`, `\"`, `\\`
    /// - `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v`
    /// - `\xH...` - one or more hex digits, keeping the low byte
    /// - `\N`, `\NN`, `\NNN` - up to three octal digits, keeping the low byte
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();
        let mut value = Vec::new();

        loop {
            if self.cursor.is_at_end() {
                break;
            }
            match self.cursor.current() {
                b'"' => {
                    self.cursor.advance();
                    return self.make_token(TokenType::String, value);
                },
                b'\n' => break,
                b'\\' => {
                    self.cursor.advance();
                    self.lex_escape(&mut value);
                },
                c => {
                    value.push(c);
                    self.cursor.advance();
                },
            }
        }

        self.error_at_token_start(LexErrorKind::UnclosedString);
        self.make_token(TokenType::String, value)
    }

    /// Decodes the escape sequence after a backslash into `value`.
    fn lex_escape(&mut self, value: &mut Vec<u8>) {
        let c = self.cursor.current();
        let simple = match c {
            b'\'' | b'"' | b'\\' => Some(c),
            b'a' => Some(0x07),
            b'b' => Some(0x08),
            b'f' => Some(0x0C),
            b'n' => Some(b'\n'),
            b'r' => Some(b'\r'),
            b't' => Some(b'\t'),
            b'v' => Some(0x0B),
            _ => None,
        };
        if let Some(byte) = simple {
            value.push(byte);
            self.cursor.advance();
            return;
        }

        match c {
            b'x' => {
                self.cursor.advance();
                let mut byte = 0u8;
                let mut digits = 0;
                while let Some(d) = hex_digit_value(self.cursor.current()) {
                    byte = byte.wrapping_mul(16).wrapping_add(d);
                    digits += 1;
                    self.cursor.advance();
                }
                if digits == 0 {
                    self.error_at_cursor(LexErrorKind::MissingHexDigits);
                } else {
                    value.push(byte);
                }
            },
            b'0'..=b'7' => {
                let mut byte = 0u8;
                let mut digits = 0;
                while digits < 3 && matches!(self.cursor.current(), b'0'..=b'7') {
                    byte = byte
                        .wrapping_mul(8)
                        .wrapping_add(self.cursor.current() - b'0');
                    digits += 1;
                    self.cursor.advance();
                }
                value.push(byte);
            },
            // Backslash at a line break or the end of input: the string is
            // unclosed, which is reported by the caller.
            b'\n' => {},
            _ if self.cursor.is_at_end() => {},
            _ => {
                self.error_at_cursor(LexErrorKind::UnknownEscape);
                value.push(c);
                self.cursor.advance();
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_util::{errors, kinds, lex_all};
    use crate::tokenize;
    use crate::LexErrorKind::*;
    use crate::TokenType::*;

    fn lex_str(source: &str) -> Vec<u8> {
        let (tokens, _) = lex_all(source);
        assert_eq!(tokens[0].kind, String, "{}", source);
        tokens[0].value.clone()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex_str(r#""hello""#), b"hello");
        assert_eq!(lex_str(r#""""#), b"");
        assert!(errors(r#""hello""#).is_empty());
    }

    #[test]
    fn test_escaped_newline() {
        let (tokens, errs) = lex_all(r#""a\nb""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, b"a\nb");
        assert!(errs.is_empty());
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(
            lex_str(r#""\'\"\\\a\b\f\n\r\t\v""#),
            b"'\"\\\x07\x08\x0C\n\r\t\x0B"
        );
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(lex_str(r#""\x41\x4a""#), b"AJ");
        assert_eq!(lex_str(r#""\xFF""#), vec![0xFF]);
        assert!(errors(r#""\x41""#).is_empty());
    }

    #[test]
    fn test_hex_escape_is_greedy() {
        // 0x141 keeps its low byte
        assert_eq!(lex_str(r#""\x141""#), b"A");
        assert_eq!(lex_str(r#""\x4g""#), b"\x04g");
    }

    #[test]
    fn test_hex_escape_without_digits() {
        assert_eq!(lex_str(r#""a\xz""#), b"az");
        assert_eq!(errors(r#""a\xz""#), vec![(MissingHexDigits, 1, 5)]);
    }

    #[test]
    fn test_octal_escape() {
        assert_eq!(lex_str(r#""\101\0\12""#), b"A\0\n");
        assert_eq!(lex_str(r#""\1011""#), b"A1");
        assert_eq!(lex_str(r#""\777""#), vec![0xFF]);
        assert_eq!(lex_str(r#""\08""#), b"\x008");
        assert!(errors(r#""\101\0\777""#).is_empty());
    }

    #[test]
    fn test_unknown_escape() {
        assert_eq!(lex_str(r#""\q\8""#), b"q8");
        assert_eq!(
            errors(r#""\q\8""#),
            vec![(UnknownEscape, 1, 3), (UnknownEscape, 1, 5)]
        );
    }

    #[test]
    fn test_unclosed_at_newline() {
        let source = "x = \"abc\ny;";
        let out = tokenize(source);
        let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Identifier, Assign, String, Identifier, Semicolon, EndOfInput]);
        assert_eq!(out.tokens[2].value, b"abc");
        assert_eq!((out.tokens[3].line(), out.tokens[3].col()), (2, 1));
        assert_eq!(errors(source), vec![(UnclosedString, 1, 5)]);
    }

    #[test]
    fn test_unclosed_at_end() {
        assert_eq!(lex_str("\"abc"), b"abc");
        assert_eq!(errors("\"abc"), vec![(UnclosedString, 1, 1)]);
        assert_eq!(kinds("\""), vec![String, EndOfInput]);
    }

    #[test]
    fn test_backslash_before_line_break() {
        assert_eq!(lex_str("\"ab\\\ncd\""), b"ab");
        assert_eq!(errors("\"ab\\\n"), vec![(UnclosedString, 1, 1)]);
        assert_eq!(errors("\"ab\\"), vec![(UnclosedString, 1, 1)]);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(lex_str("\"é\""), "é".as_bytes());
        assert!(errors("\"é\"").is_empty());
    }

    #[test]
    fn test_string_span() {
        let (tokens, _) = lex_all("  \"a\\tb\"");
        assert_eq!(tokens[0].col(), 3);
        assert_eq!(tokens[0].span.len(), 6);
    }
}
