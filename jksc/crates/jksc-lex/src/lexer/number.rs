//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals. The
//! token keeps the source spelling; converting it to a value is left to
//! later phases.

use crate::chars::{is_digit_in_base, is_whitespace, radix_from_prefix};
use crate::error::LexErrorKind;
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `0`, `1'000'000`
    /// - Hexadecimal: `0xFF`, `0XAB'CD`
    /// - Binary: `0b1010`
    /// - Octal: `0o777`
    /// - Float: `3.14`, `.5`, `1e10`, `2.5e-3`
    ///
    /// A `.` inside the exponent is always a fractional exponent, even when
    /// the mantissa already has a point.
    ///
    /// Checks run in a fixed order for each byte: decimal point, exponent,
    /// exponent sign, digit separator, then anything else. A malformed
    /// literal ends at the offending byte with one specific error.
    pub(crate) fn lex_number(&mut self) -> Token {
        let mut base = 10;

        if self.cursor.current() == b'0' {
            if let Some(radix) = radix_from_prefix(self.cursor.peek(1)) {
                base = radix;
                self.cursor.advance_n(2);
                if !is_digit_in_base(self.cursor.current(), base) {
                    self.error_at_cursor(LexErrorKind::MissingBaseDigits);
                }
            }
        }

        let mut seen_point = false;
        let mut in_exponent = false;

        loop {
            let c = self.cursor.current();
            if is_digit_in_base(c, base) {
                self.cursor.advance();
                continue;
            }

            match c {
                b'.' => {
                    let problem = if base != 10 {
                        Some(LexErrorKind::PointInNonDecimal)
                    } else if in_exponent {
                        Some(LexErrorKind::FractionalExponent)
                    } else if seen_point {
                        Some(LexErrorKind::TwoDecimalPoints)
                    } else if !self.cursor.peek(1).is_ascii_digit() {
                        Some(LexErrorKind::MissingDecimalPart)
                    } else {
                        None
                    };

                    match problem {
                        Some(kind) => {
                            self.error_at_cursor(kind);
                            break;
                        },
                        None => {
                            seen_point = true;
                            self.cursor.advance();
                        },
                    }
                },
                b'e' | b'E' if base == 10 && !in_exponent => {
                    if !self.exponent_follows() {
                        self.error_at_cursor(LexErrorKind::MissingExponent);
                        break;
                    }
                    in_exponent = true;
                    self.cursor.advance();
                },
                b'+' | b'-' if in_exponent && matches!(self.cursor.prev(), b'e' | b'E') => {
                    self.cursor.advance();
                },
                b'\'' => {
                    let between_digits = is_digit_in_base(self.cursor.prev(), base)
                        && is_digit_in_base(self.cursor.peek(1), base);
                    if !between_digits {
                        self.error_at_cursor(LexErrorKind::MisplacedSeparator);
                        self.cursor.advance();
                        break;
                    }
                    self.cursor.advance();
                },
                _ => {
                    if !self.cursor.is_at_end()
                        && !is_whitespace(c)
                        && !self.tables.is_symbol_start(c)
                    {
                        self.error_at_cursor(LexErrorKind::InvalidDigit);
                    }
                    break;
                },
            }
        }

        self.spelled_token(TokenType::Number)
    }

    /// Checks that the `e` under the cursor starts a well-formed exponent.
    fn exponent_follows(&self) -> bool {
        match self.cursor.peek(1) {
            b'+' | b'-' => self.cursor.peek(2).is_ascii_digit(),
            next => next.is_ascii_digit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_util::{errors, kinds, lex_all};
    use crate::LexErrorKind::*;
    use crate::TokenType::*;

    fn lex_num(source: &str) -> std::string::String {
        let (tokens, _) = lex_all(source);
        assert_eq!(tokens[0].kind, Number, "{}", source);
        tokens[0].text().into_owned()
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(lex_num("42"), "42");
        assert_eq!(lex_num("0"), "0");
        assert!(errors("0 007 123456").is_empty());
    }

    #[test]
    fn test_hex_integer() {
        assert_eq!(lex_num("0x1F"), "0x1F");
        assert_eq!(lex_num("0XabCD"), "0XabCD");
        assert_eq!(kinds("0x1F"), vec![Number, EndOfInput]);
        assert!(errors("0x1F").is_empty());
    }

    #[test]
    fn test_binary_and_octal() {
        assert_eq!(lex_num("0b1010"), "0b1010");
        assert_eq!(lex_num("0B11"), "0B11");
        assert_eq!(lex_num("0o777"), "0o777");
        assert!(errors("0b1010 0o777").is_empty());
    }

    #[test]
    fn test_float() {
        assert_eq!(lex_num("3.14"), "3.14");
        assert_eq!(lex_num(".5"), ".5");
        assert!(errors("3.14 .5").is_empty());
    }

    #[test]
    fn test_scientific() {
        assert_eq!(lex_num("1.5e-3"), "1.5e-3");
        assert_eq!(lex_num("1e10"), "1e10");
        assert_eq!(lex_num("2E+8"), "2E+8");
        assert!(errors("1.5e-3 1e10 2E+8").is_empty());
        assert_eq!(kinds("1.5e-3"), vec![Number, EndOfInput]);
    }

    #[test]
    fn test_missing_exponent() {
        let (tokens, errs) = lex_all("1.5e");
        assert_eq!(tokens[0].text(), "1.5");
        assert_eq!(tokens[1].kind, Identifier);
        assert_eq!(errs.len(), 1);
        assert_eq!((errs[0].kind, errs[0].col()), (MissingExponent, 4));

        assert_eq!(errors("2e+;"), vec![(MissingExponent, 1, 2)]);
        assert_eq!(lex_num("2e+;"), "2");
    }

    #[test]
    fn test_second_exponent_is_invalid_digit() {
        assert_eq!(lex_num("1e5e3"), "1e5");
        assert_eq!(errors("1e5e3"), vec![(InvalidDigit, 1, 4)]);
    }

    #[test]
    fn test_sign_outside_exponent_ends_token() {
        assert_eq!(kinds("1-2"), vec![Number, Minus, Number, EndOfInput]);
        assert_eq!(kinds("1e5+2"), vec![Number, Plus, Number, EndOfInput]);
        assert!(errors("1-2 1e5+2").is_empty());
    }

    #[test]
    fn test_hex_e_is_a_digit() {
        assert_eq!(lex_num("0x1e+5"), "0x1e");
        assert!(errors("0x1e+5").is_empty());
    }

    #[test]
    fn test_decimal_point_errors() {
        assert_eq!(lex_num("0x1.5"), "0x1");
        assert_eq!(errors("0x1.5"), vec![(PointInNonDecimal, 1, 4)]);

        assert_eq!(lex_num("1.2.3"), "1.2");
        assert_eq!(errors("1.2.3"), vec![(TwoDecimalPoints, 1, 4)]);

        assert_eq!(lex_num("1e2.5"), "1e2");
        assert_eq!(errors("1e2.5"), vec![(FractionalExponent, 1, 4)]);

        assert_eq!(lex_num("1.5e2.5"), "1.5e2");
        assert_eq!(errors("1.5e2.5"), vec![(FractionalExponent, 1, 6)]);

        assert_eq!(lex_num("1.x"), "1");
        assert_eq!(errors("1.x"), vec![(MissingDecimalPart, 1, 2)]);
    }

    #[test]
    fn test_point_then_member_access() {
        assert_eq!(kinds("1..2"), vec![Number, Dot, Number, EndOfInput]);
        assert_eq!(errors("1..2"), vec![(MissingDecimalPart, 1, 2)]);
    }

    #[test]
    fn test_digit_separator() {
        assert_eq!(lex_num("1'000'000"), "1'000'000");
        assert_eq!(lex_num("0xFF'FF"), "0xFF'FF");
        assert!(errors("1'000'000 0xFF'FF").is_empty());
    }

    #[test]
    fn test_misplaced_separator_truncates() {
        let (tokens, errs) = lex_all("1'x");
        assert_eq!(tokens[0].text(), "1'");
        assert_eq!(tokens[1].text(), "x");
        assert_eq!(errs.len(), 1);
        assert_eq!((errs[0].kind, errs[0].col()), (MisplacedSeparator, 2));

        assert_eq!(lex_num("0b1'2"), "0b1'");
        assert_eq!(errors("7' ;"), vec![(MisplacedSeparator, 1, 2)]);
    }

    #[test]
    fn test_missing_base_digits() {
        assert_eq!(lex_num("0x;"), "0x");
        assert_eq!(errors("0x;"), vec![(MissingBaseDigits, 1, 3)]);
        assert_eq!(errors("0b"), vec![(MissingBaseDigits, 1, 3)]);
    }

    #[test]
    fn test_missing_base_digits_reported_once() {
        assert_eq!(errors("0xg"), vec![(MissingBaseDigits, 1, 3)]);
        assert_eq!(errors("0b2"), vec![(MissingBaseDigits, 1, 3)]);
        assert_eq!(errors("0x'1"), vec![(MissingBaseDigits, 1, 3)]);
        assert_eq!(lex_num("0x'1"), "0x'");

        assert_eq!(errors("0x.5"), vec![(MissingBaseDigits, 1, 3)]);
        assert_eq!(kinds("0x.5"), vec![Number, Number, EndOfInput]);
        assert_eq!(lex_num("0x.5"), "0x");
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(lex_num("0b102"), "0b10");
        assert_eq!(errors("0b102"), vec![(InvalidDigit, 1, 5)]);
        assert_eq!(kinds("0b102"), vec![Number, Number, EndOfInput]);

        assert_eq!(lex_num("0o78"), "0o7");
        assert_eq!(errors("12abc"), vec![(InvalidDigit, 1, 3)]);
    }

    #[test]
    fn test_terminators_are_silent() {
        assert!(errors("1;").is_empty());
        assert!(errors("f(1)").is_empty());
        assert!(errors("1\t").is_empty());
        assert!(errors("1").is_empty());
    }

    #[test]
    fn test_number_position() {
        let (tokens, _) = lex_all("x = 0x1F;");
        assert_eq!((tokens[2].line(), tokens[2].col()), (1, 5));
        assert_eq!(tokens[2].span.len(), 4);
    }
}
