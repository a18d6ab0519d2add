//! Core error types for jksc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start offset
        start: usize,
        /// End offset
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Start offset of the span
        span_start: usize,
        /// End offset of the span
        span_end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for source file lookups
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
