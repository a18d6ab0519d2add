//! Keyword and symbol tables.
//!
//! A [`LexTables`] value is the scanner's whole configuration: which
//! identifier-shaped words are reserved, and which 1 to 3 byte spellings are
//! operators or separators. Tables are immutable once built; the default set
//! is built once and shared through [`LexTables::shared`].

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::token::TokenType;

/// Reserved words of the JKS language.
pub const KEYWORDS: &[&str] = &[
    // Types
    "bool", "int", "string",
    // Control flow
    "if", "else", "for", "while", "continue", "break",
    // Literals
    "true", "false",
];

/// Operator and separator spellings with their token types.
pub const SYMBOLS: &[(&str, TokenType)] = &[
    ("=", TokenType::Assign),
    // Arithmetic
    ("+", TokenType::Plus),
    ("+=", TokenType::PlusEq),
    ("-", TokenType::Minus),
    ("-=", TokenType::MinusEq),
    ("*", TokenType::Star),
    ("*=", TokenType::StarEq),
    ("/", TokenType::Slash),
    ("/=", TokenType::SlashEq),
    ("%", TokenType::Percent),
    ("%=", TokenType::PercentEq),
    ("**", TokenType::Power),
    ("**=", TokenType::PowerEq),
    ("++", TokenType::Increment),
    ("--", TokenType::Decrement),
    // Bitwise
    ("&", TokenType::Ampersand),
    ("&=", TokenType::AmpersandEq),
    ("|", TokenType::Pipe),
    ("|=", TokenType::PipeEq),
    ("^", TokenType::Caret),
    ("^=", TokenType::CaretEq),
    ("~", TokenType::Tilde),
    ("<<", TokenType::ShiftLeft),
    ("<<=", TokenType::ShiftLeftEq),
    (">>", TokenType::ShiftRight),
    (">>=", TokenType::ShiftRightEq),
    // Logical
    ("&&", TokenType::DoubleAmpersand),
    ("||", TokenType::DoublePipe),
    ("!", TokenType::Bang),
    // Comparison
    ("==", TokenType::EqEq),
    ("!=", TokenType::NotEq),
    ("<", TokenType::Less),
    ("<=", TokenType::LessEq),
    (">", TokenType::Greater),
    (">=", TokenType::GreaterEq),
    // Separators
    (";", TokenType::Semicolon),
    (".", TokenType::Dot),
    (",", TokenType::Comma),
    ("(", TokenType::LParen),
    (")", TokenType::RParen),
    ("[", TokenType::LSquare),
    ("]", TokenType::RSquare),
    ("{", TokenType::LBrace),
    ("}", TokenType::RBrace),
];

/// Longest symbol spelling, in bytes.
pub const MAX_SYMBOL_LEN: usize = 3;

type SymbolMap = IndexMap<&'static [u8], TokenType, FxBuildHasher>;

lazy_static::lazy_static! {
    static ref SHARED_TABLES: LexTables = LexTables::default();
}

/// Immutable lookup tables consulted by the scanner.
///
/// # Example
///
/// ```
/// use jksc_lex::{LexTables, TokenType};
///
/// let tables = LexTables::shared();
/// assert!(tables.is_keyword(b"while"));
/// assert_eq!(tables.lookup_symbol(b"**="), Some(TokenType::PowerEq));
/// assert!(tables.is_symbol_start(b'&'));
/// assert!(!tables.is_symbol_start(b'@'));
/// ```
#[derive(Clone, Debug)]
pub struct LexTables {
    keywords: FxHashSet<Vec<u8>>,
    symbols: SymbolMap,
    symbol_starts: [bool; 256],
}

impl LexTables {
    /// Returns the default tables, built on first use and shared afterwards.
    pub fn shared() -> &'static LexTables {
        &SHARED_TABLES
    }

    /// Builds tables with the default symbols and a custom keyword list.
    ///
    /// # Example
    ///
    /// ```
    /// use jksc_lex::{Lexer, LexTables, TokenType};
    ///
    /// let tables = LexTables::with_keywords(["int", "return"]);
    /// let out = Lexer::with_tables("return while", &tables).tokenize();
    /// assert_eq!(out.tokens[0].kind, TokenType::Keyword);
    /// assert_eq!(out.tokens[1].kind, TokenType::Identifier);
    /// ```
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|kw| kw.as_ref().as_bytes().to_vec())
            .collect();

        let mut symbols = SymbolMap::with_capacity_and_hasher(SYMBOLS.len(), FxBuildHasher);
        let mut symbol_starts = [false; 256];
        for &(spelling, kind) in SYMBOLS {
            let bytes = spelling.as_bytes();
            debug_assert!(!bytes.is_empty() && bytes.len() <= MAX_SYMBOL_LEN);
            if let Some(&first) = bytes.first() {
                symbol_starts[first as usize] = true;
            }
            symbols.insert(bytes, kind);
        }

        Self {
            keywords,
            symbols,
            symbol_starts,
        }
    }

    /// Checks if an identifier-shaped word is reserved.
    #[inline]
    pub fn is_keyword(&self, word: &[u8]) -> bool {
        self.keywords.contains(word)
    }

    /// Looks up the token type of an exact symbol spelling.
    #[inline]
    pub fn lookup_symbol(&self, spelling: &[u8]) -> Option<TokenType> {
        self.symbols.get(spelling).copied()
    }

    /// Checks if a byte starts at least one symbol.
    #[inline]
    pub fn is_symbol_start(&self, b: u8) -> bool {
        self.symbol_starts[b as usize]
    }

    /// Iterates over the symbol spellings in table order.
    pub fn symbols(&self) -> impl Iterator<Item = (&'static [u8], TokenType)> + '_ {
        self.symbols.iter().map(|(&spelling, &kind)| (spelling, kind))
    }

    /// Number of reserved words.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

impl Default for LexTables {
    fn default() -> Self {
        Self::with_keywords(KEYWORDS)
    }
}
