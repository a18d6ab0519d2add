//! Plain-text rendering of diagnostics against a source file.
//!
//! The output has the shape
//!
//! ```text
//! main.jks:2:9: error[E1004]: Unclosed string literal
//! 2|string s = "abc;
//!            ^
//! help: add a closing `"` before the end of the line
//! 1 error generated.
//! ```
//!
//! Colouring is left to the caller; nothing here writes escape sequences.

use std::io;

use super::{Diagnostic, Level, SourceSnippet};
use crate::span::SourceFile;

/// Renders diagnostics that refer to one [`SourceFile`]
pub struct Emitter<'a> {
    file: &'a SourceFile,
}

impl<'a> Emitter<'a> {
    /// Create an emitter for diagnostics located in `file`
    pub fn new(file: &'a SourceFile) -> Self {
        Self { file }
    }

    /// Render a single diagnostic, without a trailing newline
    ///
    /// The snippet is omitted when the diagnostic's line is not part of the
    /// file (e.g. [`Span::DUMMY`](crate::Span::DUMMY)).
    pub fn render(&self, diag: &Diagnostic) -> String {
        let span = diag.span;
        let mut out = format!("{}:{}:{}: {}", self.file.name(), span.line, span.column, diag.level);
        if let Some(code) = diag.code {
            out.push_str(&format!("[{}]", code));
        }
        out.push_str(": ");
        out.push_str(&diag.message);

        if let Ok(text) = self.file.line_at(span.line as usize) {
            let column = span.column as usize;
            let remaining = text.len().saturating_sub(column.saturating_sub(1));
            let width = span.len().min(remaining).max(1);
            let snippet = SourceSnippet::new(
                text,
                span.line as usize,
                column,
                column + width,
                None::<String>,
            );
            out.push('\n');
            out.push_str(&snippet.format());
        }

        for note in &diag.notes {
            out.push_str(&format!("\n{}: {}", Level::Note, note));
        }
        for help in &diag.helps {
            out.push_str(&format!("\n{}: {}", Level::Help, help));
        }
        out
    }

    /// Render every diagnostic followed by a summary line
    ///
    /// The summary (`N errors generated.`) is only written when at least one
    /// error is present.
    pub fn render_all(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diag in diagnostics {
            out.push_str(&self.render(diag));
            out.push('\n');
        }

        let errors = diagnostics.iter().filter(|d| d.level == Level::Error).count();
        match errors {
            0 => {},
            1 => out.push_str("1 error generated.\n"),
            n => out.push_str(&format!("{} errors generated.\n", n)),
        }
        out
    }

    /// Write the output of [`Emitter::render_all`] to `writer`
    pub fn emit<W: io::Write>(&self, diagnostics: &[Diagnostic], writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render_all(diagnostics).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    use crate::span::Span;

    fn file() -> SourceFile {
        SourceFile::new("main.jks", "int x = 1;\nstring s = \"abc;\n")
    }

    #[test]
    fn test_render_with_code_and_help() {
        let file = file();
        let diag = DiagnosticBuilder::error("Unclosed string literal")
            .code(DiagnosticCode::E_LEXER_UNCLOSED_STRING)
            .span(Span::new(22, 27, 2, 12))
            .help("add a closing `\"` before the end of the line")
            .build();

        let rendered = Emitter::new(&file).render(&diag);
        let expected = format!(
            "main.jks:2:12: error[E1004]: Unclosed string literal\n\
             2|string s = \"abc;\n\
             {}^^^^^\n\
             help: add a closing `\"` before the end of the line",
            " ".repeat(13)
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_point_without_code() {
        let file = file();
        let diag = Diagnostic::error("Unknown token", Span::point(1, 5));
        let rendered = Emitter::new(&file).render(&diag);
        assert_eq!(rendered, "main.jks:1:5: error: Unknown token\n1|int x = 1;\n      ^");
    }

    #[test]
    fn test_render_dummy_span_skips_snippet() {
        let file = file();
        let diag = Diagnostic::warning("general warning", Span::DUMMY);
        assert_eq!(
            Emitter::new(&file).render(&diag),
            "main.jks:0:0: warning: general warning"
        );
    }

    #[test]
    fn test_render_all_summary() {
        let file = file();
        let emitter = Emitter::new(&file);
        let one = vec![Diagnostic::error("a", Span::point(1, 1))];
        assert!(emitter.render_all(&one).ends_with("\n1 error generated.\n"));

        let two = vec![
            Diagnostic::error("a", Span::point(1, 1)),
            Diagnostic::error("b", Span::point(2, 1)),
        ];
        assert!(emitter.render_all(&two).ends_with("\n2 errors generated.\n"));

        let none = vec![Diagnostic::warning("w", Span::point(1, 1))];
        assert!(!emitter.render_all(&none).contains("generated"));
        assert!(emitter.render_all(&[]).is_empty());
    }

    #[test]
    fn test_emit_to_writer() {
        let file = file();
        let mut buffer = Vec::new();
        Emitter::new(&file)
            .emit(&[Diagnostic::error("a", Span::point(1, 1))], &mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("main.jks:1:1: error: a\n1|int x = 1;\n  ^\n"));
    }
}
