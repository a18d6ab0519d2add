//! Edge case tests for jksc-lex

#[cfg(test)]
mod tests {
    use crate::lexer::test_util::{errors, kinds, lex_all};
    use crate::LexErrorKind::*;
    use crate::TokenType::*;
    use crate::{tokenize, Lexer};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(kinds(""), vec![EndOfInput]);
        assert!(errors("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let (t, _) = lex_all("x");
        assert_eq!(t[0].kind, Identifier);
        assert_eq!(t[0].text(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (t, _) = lex_all(&format!("int {} = 1;", name));
        assert_eq!(t[1].value.len(), 10000);
        assert_eq!(t[2].col(), 10006);
    }

    #[test]
    fn test_edge_no_trailing_newline() {
        assert_eq!(kinds("x;"), vec![Identifier, Semicolon, EndOfInput]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let out = tokenize("int a;\r\nint b;\r\n");
        assert!(out.errors.is_empty());
        let b = &out.tokens[4];
        assert_eq!(b.text(), "b");
        assert_eq!((b.line(), b.col()), (2, 5));
    }

    #[test]
    fn test_edge_tabs_count_one_column() {
        let (t, _) = lex_all("\t\tx");
        assert_eq!(t[0].col(), 3);
    }

    #[test]
    fn test_edge_single_eof() {
        for source in ["", "x", "/*", "\"", "@", "0x", "a // b"] {
            let tokens = tokenize(source).tokens;
            let eofs = tokens.iter().filter(|t| t.is_eof()).count();
            assert_eq!(eofs, 1, "{:?}", source);
            assert!(tokens.last().unwrap().is_eof(), "{:?}", source);
        }
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(kinds("1st"), vec![Number, Identifier, EndOfInput]);
        assert_eq!(errors("1st"), vec![(InvalidDigit, 1, 2)]);
    }

    #[test]
    fn test_edge_dot_forms() {
        assert_eq!(kinds("a.b"), vec![Identifier, Dot, Identifier, EndOfInput]);
        assert_eq!(kinds("a.5"), vec![Identifier, Number, EndOfInput]);
        assert_eq!(kinds("5."), vec![Number, Dot, EndOfInput]);
        assert_eq!(errors("5."), vec![(MissingDecimalPart, 1, 2)]);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let (t, errs) = lex_all(r#""a""b""#);
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].col(), 4);
        assert!(errs.is_empty());
    }

    #[test]
    fn test_edge_quote_inside_comment() {
        assert_eq!(kinds("// \"\nx"), vec![Identifier, EndOfInput]);
        assert_eq!(kinds("/* \" */ x"), vec![Identifier, EndOfInput]);
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let (t, errs) = lex_all(r#""/* // */""#);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].value, b"/* // */");
        assert!(errs.is_empty());
    }

    #[test]
    fn test_edge_nul_byte_is_unknown() {
        assert_eq!(kinds("a\0b"), vec![Identifier, Unknown, Identifier, EndOfInput]);
        assert_eq!(errors("a\0b"), vec![(UnknownToken, 1, 2)]);
    }

    #[test]
    fn test_edge_nul_byte_after_number() {
        assert_eq!(errors("1\0"), vec![(InvalidDigit, 1, 2)]);
    }

    #[test]
    fn test_edge_unclosed_string_then_more_lines() {
        let out = tokenize("\"abc\nint y;");
        let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![String, Keyword, Identifier, Semicolon, EndOfInput]);
        assert_eq!(out.errors.len(), 1);
    }

    #[test]
    fn test_edge_all_operators() {
        let t = kinds("+ - * / % == != < > <= >= && || ! ~ ^");
        assert!(t.contains(&Plus));
        assert!(t.contains(&EqEq));
        assert!(t.contains(&DoublePipe));
        assert!(t.contains(&Caret));
        assert!(errors("+ - * / % == != < > <= >= && || ! ~ ^").is_empty());
    }

    #[test]
    fn test_edge_lexer_reuse_after_eof() {
        let mut lexer = Lexer::new("");
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
        assert!(lexer.errors().is_empty());
    }

    #[test]
    fn test_edge_deep_nesting() {
        let source = "(".repeat(1000) + &")".repeat(1000);
        let t = kinds(&source);
        assert_eq!(t.len(), 2001);
    }

    #[test]
    fn test_edge_many_errors() {
        let source = "$".repeat(500);
        let out = tokenize(&source);
        assert_eq!(out.errors.len(), 500);
        assert_eq!(out.tokens.len(), 501);
    }
}
