//! Error adapter for converting SvgSplitError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Parse errors are
//! rendered with a snippet of the offending input.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use svgsplit::SvgSplitError;

/// Adapter for a [`SvgSplitError`].
pub struct ErrorAdapter<'a>(pub &'a SvgSplitError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            // The XML error text is already part of the message.
            SvgSplitError::Parse { .. } => None,
            other => std::error::Error::source(other),
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SvgSplitError::Io(_) => "svgsplit::io",
            SvgSplitError::NotFound(_) => "svgsplit::not_found",
            SvgSplitError::Parse { .. } => "svgsplit::parse",
            SvgSplitError::Config(_) => "svgsplit::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            SvgSplitError::NotFound(_) => "check the input path",
            SvgSplitError::Parse { .. } => "the input must be well-formed XML",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            SvgSplitError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = self.0.parse_offset()?;
        let span = SourceSpan::new(offset.into(), 0);
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Convert a [`SvgSplitError`] into a reportable error.
pub fn to_reportable(err: &SvgSplitError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
