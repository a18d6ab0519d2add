//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the tokenize driver
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing and escape decoding
//! - `operator` - Operator and separator lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{Lexer, Tokenized};
