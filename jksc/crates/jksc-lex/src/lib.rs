//! jksc-lex - Lexical Analyzer for the JKS Programming Language
//!
//! This crate provides the lexer (tokenizer) for JKS, a small C-like
//! language. It transforms source code into a stream of classified tokens
//! for the parser, and collects the syntax errors it finds on the way.
//!
//! # Overview
//!
//! Scanning never stops at an error. A malformed literal, an unknown byte or
//! an unterminated construct each produce one [`SyntaxError`] and a
//! best-effort token, and scanning continues. The token stream always ends
//! with exactly one [`TokenType::EndOfInput`].
//!
//! # Example Usage
//!
//! ```
//! use jksc_lex::{tokenize, LexErrorKind, TokenType};
//!
//! let out = tokenize("int x = 0x1F;\nstring s = \"a\\nb\";");
//! assert!(out.errors.is_empty());
//! assert_eq!(out.tokens[3].kind, TokenType::Number);
//! assert_eq!(out.tokens[3].text(), "0x1F");
//! assert_eq!(out.tokens[8].value, b"a\nb");
//! assert!(out.tokens.last().unwrap().is_eof());
//!
//! let out = tokenize("x = 1.5e;");
//! assert_eq!(out.errors[0].kind, LexErrorKind::MissingExponent);
//! ```
//!
//! Errors render through `jksc_util`:
//!
//! ```
//! use jksc_lex::tokenize;
//! use jksc_util::{Emitter, Handler, SourceFile};
//!
//! let file = SourceFile::new("main.jks", "int x = 1 # 2;");
//! let handler = Handler::new();
//! tokenize(file.content()).emit_errors(&handler);
//!
//! let report = Emitter::new(&file).render_all(&handler.diagnostics());
//! assert!(report.starts_with("main.jks:1:11: error[E1001]: Unknown token\n"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`tables`] - Keyword and symbol tables
//! - [`chars`] - Byte classes
//! - [`error`] - Lexical error kinds
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `bool`, `int`, `string`, `if`, `else`, `for`, `while`, `continue`,
//! `break`, `true`, `false`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `0x1F`, `0b1010`, `0o777`, `3.14`, `.5`, `2.5e-3`,
//!   `1'000'000` (kept in source spelling)
//! - **String**: `"hello\n"`, `"\x41"`, `"\101"` (escapes decoded)
//!
//! ## Operators
//!
//! - **Arithmetic**: `+ += - -= * *= / /= % %= ** **= ++ --`
//! - **Bitwise**: `& &= | |= ^ ^= ~ << <<= >> >>=`
//! - **Logical**: `&& || !`
//! - **Comparison**: `== != < <= > >=`
//! - **Assignment**: `=`
//!
//! ## Separators
//!
//! `; . , ( ) [ ] { }`
//!
//! ## Comments
//!
//! `// line` and `/* block */` (not nested)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexErrorKind, LexResult, SyntaxError};
pub use lexer::{Lexer, Tokenized};
pub use tables::LexTables;
pub use token::{Token, TokenType};

/// Scans `source` with the default tables.
///
/// Shorthand for `Lexer::new(source).tokenize()`.
pub fn tokenize(source: &str) -> Tokenized {
    Lexer::new(source).tokenize()
}
