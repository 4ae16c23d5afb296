//! Boundary tokens handed to the spacing evaluator.

use crate::span::{LineCol, Span};

/// A lexical token borrowed from the source being checked.
///
/// Tokens are produced by the traversal driver; the evaluator only reads their
/// text and positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> Token<'src> {
    /// Creates a token from its source text and span.
    #[must_use]
    pub const fn new(text: &'src str, span: Span) -> Self {
        Self { text, span }
    }

    /// Returns the source text of the token.
    #[must_use]
    pub const fn text(&self) -> &'src str {
        self.text
    }

    /// Returns the span covered by the token.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Returns the position of the first character of the token.
    #[must_use]
    pub const fn start(&self) -> &LineCol {
        &self.span.start
    }

    /// Returns the position just past the last character of the token.
    #[must_use]
    pub const fn end(&self) -> &LineCol {
        &self.span.end
    }

    /// Returns `true` when this token ends on the line `next` starts on.
    #[must_use]
    pub const fn is_on_same_line_as(&self, next: &Self) -> bool {
        self.span.end.line == next.span.start.line
    }

    /// Returns `true` when any characters separate this token from `next`.
    ///
    /// The size of the gap is irrelevant; one character is enough.
    #[must_use]
    pub const fn is_spaced_from(&self, next: &Self) -> bool {
        self.span.end_byte < next.span.start_byte
    }
}

/// The four tokens surrounding one computed bracketed region.
///
/// `before` is the opening bracket, `first` and `last` are the outermost
/// tokens of the inner expression and `after` is the closing bracket. They
/// appear in that order in the source; for a single-token expression `first`
/// and `last` are the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryTokens<'src> {
    /// Token opening the region (`[`).
    pub before: Token<'src>,
    /// First token inside the brackets.
    pub first: Token<'src>,
    /// Last token inside the brackets.
    pub last: Token<'src>,
    /// Token closing the region (`]`).
    pub after: Token<'src>,
}

impl<'src> BoundaryTokens<'src> {
    /// Groups four boundary tokens.
    #[must_use]
    pub const fn new(
        before: Token<'src>,
        first: Token<'src>,
        last: Token<'src>,
        after: Token<'src>,
    ) -> Self {
        Self {
            before,
            first,
            last,
            after,
        }
    }
}
