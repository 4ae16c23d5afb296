//! Spacing checks for one bracketed region.
//!
//! `never` and `always` check the leading and trailing boundary
//! independently, each only when its two tokens share a line. `even` first
//! requires both brackets on one line and then compares the column gaps on
//! both sides.

use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::mode::SpacingMode;
use crate::token::{BoundaryTokens, Token};

/// Widest gap `even` mode tolerates on either side.
const MAX_EVEN_SPACE: i64 = 1;

/// Checks one computed region against `mode`, reporting into `sink`.
///
/// For `never` and `always` the leading boundary is reported before the
/// trailing one. `even` reports at most one diagnostic.
pub fn evaluate<S>(region: &BoundaryTokens<'_>, mode: SpacingMode, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    match mode {
        SpacingMode::Never | SpacingMode::Always => {
            check_boundary(&region.before, &region.first, Side::Leading, mode, sink);
            check_boundary(&region.last, &region.after, Side::Trailing, mode, sink);
        }
        SpacingMode::Even => check_even(region, sink),
    }
}

/// Checks one computed region and collects the diagnostics.
#[must_use]
pub fn evaluate_region(region: &BoundaryTokens<'_>, mode: SpacingMode) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    evaluate(region, mode, &mut diagnostics);
    diagnostics
}

#[derive(Clone, Copy)]
enum Side {
    Leading,
    Trailing,
}

fn check_boundary<S>(left: &Token<'_>, right: &Token<'_>, side: Side, mode: SpacingMode, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    if !left.is_on_same_line_as(right) {
        return;
    }

    let spaced = left.is_spaced_from(right);
    let kind = match (side, mode.requires_space(), spaced) {
        (Side::Leading, false, true) => DiagnosticKind::UnexpectedSpaceAfter,
        (Side::Leading, true, false) => DiagnosticKind::MissingSpaceAfter,
        (Side::Trailing, false, true) => DiagnosticKind::UnexpectedSpaceBefore,
        (Side::Trailing, true, false) => DiagnosticKind::MissingSpaceBefore,
        _ => return,
    };

    // Leading problems point at the opening bracket, trailing ones at the
    // closing bracket.
    let bracket = match side {
        Side::Leading => left,
        Side::Trailing => right,
    };
    sink.report(Diagnostic::at_token(kind, bracket));
}

fn check_even<S>(region: &BoundaryTokens<'_>, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    let BoundaryTokens {
        before,
        first,
        last,
        after,
    } = region;

    if !before.is_on_same_line_as(after) {
        sink.report(Diagnostic::at_token(
            DiagnosticKind::BracketsOnDifferentLines,
            before,
        ));
        return;
    }

    let start_space = column_gap(before, first);
    let end_space = column_gap(last, after);
    if start_space != end_space || start_space.max(end_space) > MAX_EVEN_SPACE {
        sink.report(Diagnostic::at_token(DiagnosticKind::UnevenSpacing, before));
    }
}

/// Columns between the end of `left` and the start of `right`.
///
/// Signed so a token pair spanning lines cannot underflow.
fn column_gap(left: &Token<'_>, right: &Token<'_>) -> i64 {
    i64::from(right.start().column()) - i64::from(left.end().column())
}
