//! Tests for diagnostic kinds, messages and sinks.

use rstest::rstest;

use crate::{Diagnostic, DiagnosticKind, DiagnosticSink, LineCol, Span};

#[rstest]
#[case::no_space_after(
    DiagnosticKind::UnexpectedSpaceAfter,
    "[",
    "There should be no space after '['"
)]
#[case::no_space_before(
    DiagnosticKind::UnexpectedSpaceBefore,
    "]",
    "There should be no space before ']'"
)]
#[case::required_after(
    DiagnosticKind::MissingSpaceAfter,
    "[",
    "A space is required after '['"
)]
#[case::required_before(
    DiagnosticKind::MissingSpaceBefore,
    "]",
    "A space is required before ']'"
)]
#[case::same_line(
    DiagnosticKind::BracketsOnDifferentLines,
    "[",
    "Expected \"[\" and \"]\" to be on the same line"
)]
#[case::uneven(
    DiagnosticKind::UnevenSpacing,
    "[",
    "Expected 1 or 0 spaces around \"[\" and \"]\""
)]
fn messages_are_verbatim(
    #[case] kind: DiagnosticKind,
    #[case] subject: &str,
    #[case] expected: &str,
) {
    assert_eq!(kind.message(subject), expected);
}

#[test]
fn kind_display_matches_serde_name() {
    let kind = DiagnosticKind::BracketsOnDifferentLines;
    let json = serde_json::to_string(&kind).expect("serialize");
    assert_eq!(json, format!("\"{kind}\""));
}

#[test]
fn diagnostic_reports_at_span_start() {
    let span = Span::new(12, 13, LineCol::new(2, 7), LineCol::new(2, 8));
    let diag = Diagnostic::new(DiagnosticKind::UnexpectedSpaceBefore, "]", span);
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedSpaceBefore);
    assert_eq!(diag.position(), &LineCol::new(2, 7));
    assert_eq!(diag.span(), &span);
    assert_eq!(diag.position().one_based(), (3, 8));
}

#[test]
fn diagnostic_json_contains_kind_and_message() {
    let span = Span::new(0, 1, LineCol::new(0, 0), LineCol::new(0, 1));
    let diag = Diagnostic::new(DiagnosticKind::MissingSpaceAfter, "[", span);
    let json = serde_json::to_string(&diag).expect("serialize");
    assert!(json.contains("\"kind\":\"missing-space-after\""));
    assert!(json.contains("A space is required after '['"));
}

#[derive(Default)]
struct CountingSink {
    count: usize,
}

impl DiagnosticSink for CountingSink {
    fn report(&mut self, _diagnostic: Diagnostic) {
        self.count += 1;
    }
}

#[test]
fn custom_sinks_receive_each_diagnostic() {
    let mut sink = CountingSink::default();
    let span = Span::new(0, 1, LineCol::new(0, 0), LineCol::new(0, 1));
    sink.report(Diagnostic::new(DiagnosticKind::UnevenSpacing, "[", span));
    sink.report(Diagnostic::new(DiagnosticKind::UnevenSpacing, "[", span));
    assert_eq!(sink.count, 2);
}
