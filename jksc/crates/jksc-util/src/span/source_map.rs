//! Named source texts and line lookup.
//!
//! This module provides the [`SourceFile`] type used to turn the line/column
//! of a diagnostic back into the text of the offending line.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// The file is only a view over text that was already read by the caller;
/// it never touches the filesystem.
///
/// # Examples
///
/// ```
/// use jksc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.jks", "int x = 1;");
/// assert_eq!(file.name(), "main.jks");
/// assert_eq!(file.content(), "int x = 1;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path, used as the prefix of rendered diagnostics
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens one more (empty) line, matching how the
    /// lexer counts lines for the end-of-input position.
    ///
    /// # Examples
    ///
    /// ```
    /// use jksc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.jks", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Column is measured in bytes from the start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use jksc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.jks", "int main;");
    /// assert_eq!(file.offset_to_line_col(4), (1, 5));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // line_starts[0] == 0, so insert_point is at least 1 here
                let line = insert_point.saturating_sub(1);
                let line_start = self.line_starts.get(line).copied().unwrap_or(0);
                (line + 1, offset.saturating_sub(line_start) + 1)
            },
        }
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Errors
    ///
    /// Returns [`SourceMapError::InvalidLineNumber`] for line 0 or a line
    /// past the end of the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use jksc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.jks", "line1\r\nline2");
    /// assert_eq!(file.line_at(1).unwrap(), "line1");
    /// assert_eq!(file.line_at(2).unwrap(), "line2");
    /// assert!(file.line_at(3).is_err());
    /// ```
    pub fn line_at(&self, line: usize) -> SourceMapResult<&str> {
        let invalid = || SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        };
        let index = line.checked_sub(1).ok_or_else(invalid)?;
        let start = self.line_starts.get(index).copied().ok_or_else(invalid)?;
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.content.len());

        let text = self.extract_range(start, end)?;
        Ok(text.trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Errors
    ///
    /// * [`SourceMapError::InvalidSpan`] - `start > end`
    /// * [`SourceMapError::SpanOutOfBounds`] - the range leaves the file or
    ///   splits a multi-byte character
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
