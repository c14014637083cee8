//! Error types for svgsplit operations.
//!
//! This module provides the main error type [`SvgSplitError`] for failures
//! that stop a whole run. Failures that only affect a single component are
//! [`emit::Error`](crate::emit::Error)s and are recorded in the
//! [`ExtractionReport`](crate::ExtractionReport) instead.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for svgsplit operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the XML error so that
/// the failing row and column can be shown with a source snippet.
#[derive(Debug, Error)]
pub enum SvgSplitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Error parsing SVG file: {err}")]
    Parse { err: roxmltree::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SvgSplitError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: roxmltree::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Returns the byte offset of a parse error inside its source text.
    ///
    /// Returns `None` for every other variant.
    pub fn parse_offset(&self) -> Option<usize> {
        match self {
            Self::Parse { err, src } => {
                let pos = err.pos();
                Some(text_pos_to_offset(src, pos.row, pos.col))
            }
            _ => None,
        }
    }
}

/// Converts a 1-based row/column pair (columns counted in characters) into a
/// byte offset, clamped to the end of `src`.
fn text_pos_to_offset(src: &str, row: u32, col: u32) -> usize {
    let mut offset = 0;
    for line in src.split_inclusive('\n').take(row.saturating_sub(1) as usize) {
        offset += line.len();
    }

    let rest = &src[offset..];
    let column = rest
        .char_indices()
        .nth(col.saturating_sub(1) as usize)
        .map_or(rest.len(), |(idx, _)| idx);

    offset + column
}
