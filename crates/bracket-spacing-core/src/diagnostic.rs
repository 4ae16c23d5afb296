//! Diagnostic types for reporting spacing violations.
//!
//! Every violation maps to exactly one [`DiagnosticKind`]. The message text is
//! stable and matches the wording other tooling expects, so it is rendered by
//! the kind itself rather than by callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::{LineCol, Span};
use crate::token::Token;

/// Stable identifiers for the six spacing violations.
///
/// # Example
///
/// ```
/// use bracket_spacing_core::DiagnosticKind;
///
/// let kind = DiagnosticKind::UnexpectedSpaceAfter;
/// assert_eq!(format!("{kind}"), "unexpected-space-after");
/// assert_eq!(kind.message("["), "There should be no space after '['");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Whitespace follows the opening bracket in `never` mode.
    UnexpectedSpaceAfter,
    /// Whitespace precedes the closing bracket in `never` mode.
    UnexpectedSpaceBefore,
    /// No whitespace follows the opening bracket in `always` mode.
    MissingSpaceAfter,
    /// No whitespace precedes the closing bracket in `always` mode.
    MissingSpaceBefore,
    /// The brackets sit on different lines in `even` mode.
    BracketsOnDifferentLines,
    /// Spacing is asymmetric or wider than one space in `even` mode.
    UnevenSpacing,
}

impl DiagnosticKind {
    /// Renders the message for this kind.
    ///
    /// `subject` is the text of the offending bracket token; the two `even`
    /// mode messages do not mention it.
    #[must_use]
    pub fn message(self, subject: &str) -> String {
        match self {
            Self::UnexpectedSpaceAfter => format!("There should be no space after '{subject}'"),
            Self::UnexpectedSpaceBefore => format!("There should be no space before '{subject}'"),
            Self::MissingSpaceAfter => format!("A space is required after '{subject}'"),
            Self::MissingSpaceBefore => format!("A space is required before '{subject}'"),
            Self::BracketsOnDifferentLines => {
                String::from("Expected \"[\" and \"]\" to be on the same line")
            }
            Self::UnevenSpacing => String::from("Expected 1 or 0 spaces around \"[\" and \"]\""),
        }
    }

    /// Returns the kebab-case identifier of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedSpaceAfter => "unexpected-space-after",
            Self::UnexpectedSpaceBefore => "unexpected-space-before",
            Self::MissingSpaceAfter => "missing-space-after",
            Self::MissingSpaceBefore => "missing-space-before",
            Self::BracketsOnDifferentLines => "brackets-on-different-lines",
            Self::UnevenSpacing => "uneven-spacing",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single spacing violation.
///
/// The span is that of the offending token; the reported position is its
/// start.
///
/// # Example
///
/// ```
/// use bracket_spacing_core::{Diagnostic, DiagnosticKind, LineCol, Span};
///
/// let span = Span::new(3, 4, LineCol::new(0, 3), LineCol::new(0, 4));
/// let diag = Diagnostic::new(DiagnosticKind::MissingSpaceAfter, "[", span);
/// assert_eq!(diag.message(), "A space is required after '['");
/// assert_eq!(diag.position(), &LineCol::new(0, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    span: Span,
}

impl Diagnostic {
    /// Creates a diagnostic of `kind` about the token `subject` covering `span`.
    #[must_use]
    pub fn new(kind: DiagnosticKind, subject: &str, span: Span) -> Self {
        Self {
            kind,
            message: kind.message(subject),
            span,
        }
    }

    /// Creates a diagnostic reported at `token`.
    #[must_use]
    pub fn at_token(kind: DiagnosticKind, token: &Token<'_>) -> Self {
        Self::new(kind, token.text(), *token.span())
    }

    /// Returns the diagnostic kind.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span of the offending token.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Returns the reported position.
    #[must_use]
    pub const fn position(&self) -> &LineCol {
        &self.span.start
    }
}

/// Receiver for diagnostics produced by the evaluator.
///
/// The evaluator emits each violation as soon as it is found; sinks decide
/// whether to collect, count or forward them.
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
