//! Serialisable diagnostic records.

use bracket_spacing_core::{Diagnostic, DiagnosticKind};
use serde::Serialize;

/// A diagnostic tied to the input it was found in, with one-based positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    /// Label of the checked input (a path or `<stdin>`).
    pub path: String,
    /// One-based start line.
    pub line: u32,
    /// One-based start column, in characters.
    pub column: u32,
    /// One-based end line.
    pub end_line: u32,
    /// One-based end column, in characters.
    pub end_column: u32,
    /// Stable diagnostic kind.
    pub kind: DiagnosticKind,
    /// Human-readable message.
    pub message: String,
}

impl DiagnosticRecord {
    /// Builds a record for `diagnostic` found in the input labelled `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, diagnostic: &Diagnostic) -> Self {
        let (line, column) = diagnostic.span().start().one_based();
        let (end_line, end_column) = diagnostic.span().end().one_based();
        Self {
            path: path.into(),
            line,
            column,
            end_line,
            end_column,
            kind: diagnostic.kind(),
            message: diagnostic.message().to_owned(),
        }
    }
}
