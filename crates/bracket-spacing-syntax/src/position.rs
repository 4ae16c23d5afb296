//! Conversions from Tree-sitter positions to core span types.
//!
//! Tree-sitter reports byte columns. Spans carry character columns instead,
//! so a multi-byte character (an accented letter, a CJK ideograph, a
//! non-breaking space) advances the column by one. Byte offsets are kept
//! unchanged for adjacency checks.

use bracket_spacing_core::{LineCol, Span};

/// Converts the position of `byte` in `source` to a zero-based [`LineCol`]
/// with a character column.
///
/// `pos` is the Tree-sitter point for `byte`; its byte column locates the
/// start of the line.
#[must_use]
pub(crate) fn point_to_line_col(source: &str, byte: usize, pos: tree_sitter::Point) -> LineCol {
    let line_start = byte.saturating_sub(pos.column);
    let column = source
        .get(line_start..byte)
        .map_or(pos.column, |prefix| prefix.chars().count());
    LineCol::new(saturating_u32(pos.row), saturating_u32(column))
}

/// Converts a position to one-based display coordinates.
#[must_use]
pub(crate) fn point_to_one_based(source: &str, byte: usize, pos: tree_sitter::Point) -> (u32, u32) {
    point_to_line_col(source, byte, pos).one_based()
}

/// Returns the span covered by a syntax node.
#[must_use]
pub(crate) fn node_span(node: tree_sitter::Node<'_>, source: &str) -> Span {
    Span::new(
        saturating_u32(node.start_byte()),
        saturating_u32(node.end_byte()),
        point_to_line_col(source, node.start_byte(), node.start_position()),
        point_to_line_col(source, node.end_byte(), node.end_position()),
    )
}

// Offsets will realistically never exceed u32::MAX.
fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
