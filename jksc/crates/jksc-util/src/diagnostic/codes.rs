//! Diagnostic codes for categorizing compiler errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so a rendered error can be looked up independently of
//! its exact wording.
//!
//! # Examples
//!
//! ```
//! use jksc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNKNOWN_TOKEN;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// Codes are grouped by phase: `E1xxx` for the lexer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use jksc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// A byte that starts no token
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::new("E", 1001);
    /// `/*` without a closing `*/`
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1002);
    /// `*/` without an opening `/*`
    pub const E_LEXER_UNMATCHED_COMMENT_CLOSE: Self = Self::new("E", 1003);
    /// String literal not closed on its line
    pub const E_LEXER_UNCLOSED_STRING: Self = Self::new("E", 1004);
    /// Malformed escape sequence inside a string literal
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1005);
    /// Malformed number literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1006);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
