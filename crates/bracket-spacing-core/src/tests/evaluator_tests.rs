//! Tests for [`evaluate`] and [`evaluate_region`] across all modes.

use rstest::rstest;

use super::support::region;
use crate::{Diagnostic, DiagnosticKind, LineCol, SpacingMode, evaluate, evaluate_region};

fn kinds(diagnostics: &[Diagnostic]) -> Vec<DiagnosticKind> {
    diagnostics.iter().map(Diagnostic::kind).collect()
}

fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(Diagnostic::message).collect()
}

// =============================================================================
// never
// =============================================================================

#[test]
fn never_reports_both_sides_of_spaced_brackets() {
    let diagnostics = evaluate_region(&region("obj[ key ]"), SpacingMode::Never);
    assert_eq!(
        messages(&diagnostics),
        vec![
            "There should be no space after '['",
            "There should be no space before ']'",
        ]
    );
    let positions: Vec<LineCol> = diagnostics.iter().map(|d| *d.position()).collect();
    assert_eq!(positions, vec![LineCol::new(0, 3), LineCol::new(0, 9)]);
}

#[rstest]
#[case::tight("obj[key]", vec![])]
#[case::leading("obj[ key]", vec![DiagnosticKind::UnexpectedSpaceAfter])]
#[case::trailing("obj[key ]", vec![DiagnosticKind::UnexpectedSpaceBefore])]
#[case::wide("obj[    key    ]", vec![
    DiagnosticKind::UnexpectedSpaceAfter,
    DiagnosticKind::UnexpectedSpaceBefore,
])]
#[case::expression("obj[a + b]", vec![])]
fn never_mode_cases(#[case] source: &str, #[case] expected: Vec<DiagnosticKind>) {
    assert_eq!(kinds(&evaluate_region(&region(source), SpacingMode::Never)), expected);
}

#[rstest]
#[case::opening_on_own_line("obj[\n  key ]", vec![DiagnosticKind::UnexpectedSpaceBefore])]
#[case::closing_on_own_line("obj[ key\n]", vec![DiagnosticKind::UnexpectedSpaceAfter])]
#[case::both_on_own_lines("obj[\n  key\n]", vec![])]
fn never_mode_skips_boundaries_across_lines(
    #[case] source: &str,
    #[case] expected: Vec<DiagnosticKind>,
) {
    assert_eq!(kinds(&evaluate_region(&region(source), SpacingMode::Never)), expected);
}

// =============================================================================
// always
// =============================================================================

#[test]
fn always_reports_both_sides_of_tight_brackets() {
    let diagnostics = evaluate_region(&region("obj[key]"), SpacingMode::Always);
    assert_eq!(
        messages(&diagnostics),
        vec![
            "A space is required after '['",
            "A space is required before ']'",
        ]
    );
    let positions: Vec<LineCol> = diagnostics.iter().map(|d| *d.position()).collect();
    assert_eq!(positions, vec![LineCol::new(0, 3), LineCol::new(0, 7)]);
}

#[rstest]
#[case::spaced("obj[ key ]", vec![])]
#[case::leading_missing("obj[key ]", vec![DiagnosticKind::MissingSpaceAfter])]
#[case::trailing_missing("obj[ key]", vec![DiagnosticKind::MissingSpaceBefore])]
#[case::across_lines("obj[\nkey\n]", vec![])]
#[case::tight_first_line("obj[key\n]", vec![DiagnosticKind::MissingSpaceAfter])]
fn always_mode_cases(#[case] source: &str, #[case] expected: Vec<DiagnosticKind>) {
    assert_eq!(kinds(&evaluate_region(&region(source), SpacingMode::Always)), expected);
}

// =============================================================================
// even
// =============================================================================

#[rstest]
#[case::tight("obj[key]")]
#[case::single_spaces("obj[ key ]")]
#[case::expression("obj[ a + b ]")]
fn even_accepts_symmetric_narrow_spacing(#[case] source: &str) {
    assert!(evaluate_region(&region(source), SpacingMode::Even).is_empty());
}

#[rstest]
#[case::wider_start("obj[  key ]")]
#[case::wider_end("obj[ key  ]")]
#[case::one_sided("obj[key ]")]
#[case::symmetric_but_wide("obj[  key  ]")]
fn even_rejects_asymmetric_or_wide_spacing(#[case] source: &str) {
    let diagnostics = evaluate_region(&region(source), SpacingMode::Even);
    assert_eq!(
        messages(&diagnostics),
        vec!["Expected 1 or 0 spaces around \"[\" and \"]\""]
    );
    assert_eq!(diagnostics.first().map(|d| *d.position()), Some(LineCol::new(0, 3)));
}

#[rstest]
#[case::closing_on_next_line("obj[ key\n]")]
#[case::everything_split("obj[\n    key\n]")]
fn even_requires_brackets_on_one_line(#[case] source: &str) {
    let diagnostics = evaluate_region(&region(source), SpacingMode::Even);
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::BracketsOnDifferentLines]);
    assert_eq!(
        messages(&diagnostics),
        vec!["Expected \"[\" and \"]\" to be on the same line"]
    );
    assert_eq!(diagnostics.first().map(|d| *d.position()), Some(LineCol::new(0, 3)));
}

#[test]
fn even_uses_columns_on_later_lines() {
    let diagnostics = evaluate_region(&region("let a = 1;\n  obj[ key  ]"), SpacingMode::Even);
    assert_eq!(kinds(&diagnostics), vec![DiagnosticKind::UnevenSpacing]);
    assert_eq!(diagnostics.first().map(|d| *d.position()), Some(LineCol::new(1, 5)));
}

// =============================================================================
// Shared properties
// =============================================================================

#[rstest]
fn evaluation_is_idempotent(
    #[values("obj[key]", "obj[ key ]", "obj[  key ]", "obj[\nkey ]")] source: &str,
    #[values(SpacingMode::Never, SpacingMode::Always, SpacingMode::Even)] mode: SpacingMode,
) {
    let tokens = region(source);
    assert_eq!(evaluate_region(&tokens, mode), evaluate_region(&tokens, mode));
}

#[rstest]
fn never_and_always_emit_at_most_two(
    #[values("obj[key]", "obj[ key ]", "obj[ key]", "obj[key ]")] source: &str,
    #[values(SpacingMode::Never, SpacingMode::Always)] mode: SpacingMode,
) {
    assert!(evaluate_region(&region(source), mode).len() <= 2);
}

#[test]
fn evaluate_appends_to_existing_sink_contents() {
    let mut sink = evaluate_region(&region("a[ b ]"), SpacingMode::Never);
    evaluate(&region("c[d]"), SpacingMode::Always, &mut sink);
    assert_eq!(
        kinds(&sink),
        vec![
            DiagnosticKind::UnexpectedSpaceAfter,
            DiagnosticKind::UnexpectedSpaceBefore,
            DiagnosticKind::MissingSpaceAfter,
            DiagnosticKind::MissingSpaceBefore,
        ]
    );
}
