//! Token definitions for the JKS language.

use std::borrow::Cow;
use std::fmt;

use jksc_util::Span;

/// The classification of a token.
///
/// Fixed-form operators and separators carry no text of their own; their
/// spelling lives in the symbol table (see [`crate::LexTables`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Literals and names
    /// Reserved word, e.g. `while`
    Keyword,
    /// Name that is not a reserved word
    Identifier,
    /// Number literal in its source spelling
    Number,
    /// String literal with escapes decoded
    String,

    /// `=`
    Assign,

    // Arithmetic
    /// `+`
    Plus,
    /// `+=`
    PlusEq,
    /// `-`
    Minus,
    /// `-=`
    MinusEq,
    /// `*`
    Star,
    /// `*=`
    StarEq,
    /// `/`
    Slash,
    /// `/=`
    SlashEq,
    /// `%`
    Percent,
    /// `%=`
    PercentEq,
    /// `**`
    Power,
    /// `**=`
    PowerEq,
    /// `++`
    Increment,
    /// `--`
    Decrement,

    // Bitwise
    /// `&`
    Ampersand,
    /// `&=`
    AmpersandEq,
    /// `|`
    Pipe,
    /// `|=`
    PipeEq,
    /// `^`
    Caret,
    /// `^=`
    CaretEq,
    /// `~`
    Tilde,
    /// `<<`
    ShiftLeft,
    /// `<<=`
    ShiftLeftEq,
    /// `>>`
    ShiftRight,
    /// `>>=`
    ShiftRightEq,

    // Logical
    /// `&&`
    DoubleAmpersand,
    /// `||`
    DoublePipe,
    /// `!`
    Bang,

    // Comparison
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,

    // Separators
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LSquare,
    /// `]`
    RSquare,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    /// Bytes that start no valid token
    Unknown,
    /// End of input marker, always the last token
    EndOfInput,
}

impl TokenType {
    /// Returns true for the types whose value is meaningful text.
    pub fn has_value(self) -> bool {
        matches!(
            self,
            TokenType::Keyword
                | TokenType::Identifier
                | TokenType::Number
                | TokenType::String
                | TokenType::Unknown
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A classified token with its position in the source.
///
/// `value` holds the identifier/keyword/number text, the decoded bytes of a
/// string literal, or the offending bytes of an unknown token. It is empty
/// for operators, separators and the end-of-input marker.
///
/// # Example
///
/// ```
/// use jksc_lex::{tokenize, TokenType};
///
/// let tokens = tokenize("int x").tokens;
/// assert_eq!(tokens[1].kind, TokenType::Identifier);
/// assert_eq!(tokens[1].text(), "x");
/// assert_eq!((tokens[1].line(), tokens[1].col()), (1, 5));
/// assert_eq!(tokens[1].to_string(), "Identifier(x):(1:5)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token classification
    pub kind: TokenType,
    /// Token text or decoded bytes
    pub value: Vec<u8>,
    /// Bytes consumed for the token; `line`/`column` are those of its first byte
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenType, value: impl Into<Vec<u8>>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// Line of the first byte of the token (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first byte of the token (1-based).
    #[inline]
    pub fn col(&self) -> u32 {
        self.span.column
    }

    /// The value as text, replacing invalid UTF-8 with `U+FFFD`.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }

    /// Checks if this is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}):({}:{})",
            self.kind,
            self.text(),
            self.line(),
            self.col()
        )
    }
}
