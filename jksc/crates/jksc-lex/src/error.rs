//! Lexical errors.
//!
//! Every error is recoverable: the scanner records it and carries on with a
//! best-effort token. Each kind maps to a stable [`DiagnosticCode`] so it can
//! be rendered through [`jksc_util::Emitter`].

use jksc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Span};
use thiserror::Error;

/// What went wrong at a given position.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A byte that starts no token
    #[error("Unknown token")]
    UnknownToken,

    /// `/*` with no matching `*/`
    #[error("Unterminated block comment")]
    UnterminatedComment,

    /// `*/` outside of a block comment
    #[error("Unmatched close of block comment")]
    UnmatchedCommentClose,

    /// String literal reaching a line break or the end of input
    #[error("Unclosed string literal")]
    UnclosedString,

    /// Backslash followed by an unsupported character
    #[error("Unknown escape sequence in string literal")]
    UnknownEscape,

    /// `\x` with no hexadecimal digit after it
    #[error("Expected hexadecimal digits after \\x")]
    MissingHexDigits,

    /// `0b`, `0o` or `0x` with no valid digit after it
    #[error("Expected digits after base prefix")]
    MissingBaseDigits,

    /// `.` in a binary, octal or hexadecimal literal
    #[error("Non-decimal number literal with a decimal point")]
    PointInNonDecimal,

    /// Second `.` in a number literal
    #[error("Number literal with two decimal points")]
    TwoDecimalPoints,

    /// `.` inside an exponent
    #[error("Non-integer scientific index")]
    FractionalExponent,

    /// `.` not followed by a digit
    #[error("Expected decimal part after decimal point")]
    MissingDecimalPart,

    /// `e`/`E` not followed by an exponent
    #[error("Expected scientific index")]
    MissingExponent,

    /// `'` not placed between two digits
    #[error("Misplaced digit separator")]
    MisplacedSeparator,

    /// A byte that is not a digit of the literal's base
    #[error("Invalid digit in number literal")]
    InvalidDigit,
}

impl LexErrorKind {
    /// The diagnostic code reported for this kind.
    pub fn code(self) -> DiagnosticCode {
        use LexErrorKind::*;
        match self {
            UnknownToken => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            UnmatchedCommentClose => DiagnosticCode::E_LEXER_UNMATCHED_COMMENT_CLOSE,
            UnclosedString => DiagnosticCode::E_LEXER_UNCLOSED_STRING,
            UnknownEscape | MissingHexDigits => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            MissingBaseDigits | PointInNonDecimal | TwoDecimalPoints | FractionalExponent
            | MissingDecimalPart | MissingExponent | MisplacedSeparator | InvalidDigit => {
                DiagnosticCode::E_LEXER_INVALID_NUMBER
            },
        }
    }

    fn help(self) -> Option<&'static str> {
        use LexErrorKind::*;
        match self {
            UnterminatedComment => Some("add `*/` to close the comment"),
            UnclosedString => Some("strings cannot span lines; add a closing `\"`"),
            UnknownEscape => Some("valid escapes are \\' \\\" \\\\ \\a \\b \\f \\n \\r \\t \\v \\xHH and \\NNN"),
            MissingExponent => Some("an exponent needs digits, e.g. `1e10` or `2.5e-3`"),
            MisplacedSeparator => Some("`'` may only appear between two digits"),
            _ => None,
        }
    }

    fn note(self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedComment => Some("block comments do not nest"),
            _ => None,
        }
    }
}

/// A recoverable error found while scanning.
///
/// # Example
///
/// ```
/// use jksc_lex::{tokenize, LexErrorKind};
///
/// let errors = tokenize("int x = 1.5e;").errors;
/// assert_eq!(errors[0].kind, LexErrorKind::MissingExponent);
/// assert_eq!((errors[0].line(), errors[0].col()), (1, 12));
/// assert_eq!(errors[0].to_string(), "1:12: Expected scientific index");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{}:{}: {}", .span.line, .span.column, .kind)]
pub struct SyntaxError {
    /// What went wrong
    pub kind: LexErrorKind,
    /// Where it went wrong
    pub span: Span,
}

impl SyntaxError {
    /// Creates a new syntax error.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Human-readable message, without position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Line of the offending position (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the offending position (1-based).
    pub fn col(&self) -> u32 {
        self.span.column
    }

    /// Converts the error into a diagnostic with its code, help and notes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut builder = DiagnosticBuilder::error(self.message())
            .code(self.kind.code())
            .span(self.span);
        if let Some(note) = self.kind.note() {
            builder = builder.note(note);
        }
        if let Some(help) = self.kind.help() {
            builder = builder.help(help);
        }
        builder.build()
    }

    /// Hands the error to a diagnostic handler.
    pub fn emit(&self, handler: &Handler) {
        handler.emit_diagnostic(self.to_diagnostic());
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(err: &SyntaxError) -> Self {
        err.to_diagnostic()
    }
}

/// Result type for callers that treat any lexical error as failure.
pub type LexResult<T> = std::result::Result<T, Vec<SyntaxError>>;
