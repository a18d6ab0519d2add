//! jksc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared building blocks for the jksc toolchain. Nothing in here knows about
//! the token vocabulary of the JKS language; the lexer (and later the parser)
//! feed their findings into these types.
//!
//! - [`span`] - Source locations ([`Span`]) and named source texts ([`SourceFile`])
//! - [`diagnostic`] - Diagnostics, codes, the collecting [`Handler`] and the
//!   plain-text [`Emitter`]
//! - [`error`] - Error types for the fallible operations of this crate
//!
//! # Example
//!
//! ```
//! use jksc_util::{DiagnosticBuilder, Emitter, Handler, SourceFile, Span};
//!
//! let file = SourceFile::new("main.jks", "int x = 1 # 2;");
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unknown token")
//!     .span(Span::new(10, 11, 1, 11))
//!     .emit(&handler);
//!
//! let report = Emitter::new(&file).render_all(&handler.diagnostics());
//! assert!(report.starts_with("main.jks:1:11: error: Unknown token"));
//! assert!(report.ends_with("1 error generated.\n"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Emitter, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
