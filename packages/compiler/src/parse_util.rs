//! Parse Utilities
//!
//! Source locations attached to template nodes by the upstream parser.
//! The compiler never computes these itself; it only carries them through
//! so that diagnostics can point back at the template source.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ParseLocation {
    pub line: usize,
    pub column: usize,
}

impl ParseLocation {
    pub fn new(line: usize, column: usize) -> Self {
        ParseLocation { line, column }
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
    /// Name of the template module, when the parser knows it.
    pub source: Option<String>,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan {
            start,
            end,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Merge two spans into one covering both, keeping this span's source.
    pub fn to(&self, other: &ParseSourceSpan) -> ParseSourceSpan {
        ParseSourceSpan {
            start: self.start,
            end: other.end,
            source: self.source.clone(),
        }
    }
}

impl fmt::Display for ParseSourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}@{}-{}", source, self.start, self.end),
            None => write!(f, "{}-{}", self.start, self.end),
        }
    }
}

/// Render an optional span as a diagnostic suffix (`" (at ...)"` or nothing).
pub fn span_suffix(span: &Option<ParseSourceSpan>) -> String {
    span.as_ref()
        .map(|s| format!(" (at {})", s))
        .unwrap_or_default()
}
