//! Builds boundary tokens from short source snippets.
//!
//! The snippet must contain one bracketed region. The first and last inner
//! tokens are the first and last whitespace-separated words between the
//! outermost brackets, which is enough for spacing checks.

use crate::{BoundaryTokens, LineCol, Span, Token};

pub(super) fn region(source: &str) -> BoundaryTokens<'_> {
    let open = source.find('[').expect("snippet has an opening bracket");
    let close = source.rfind(']').expect("snippet has a closing bracket");
    let inner = source.get(open + 1..close).expect("inner text");

    let first_start = open
        + 1
        + inner
            .find(|c: char| !c.is_whitespace())
            .expect("snippet has an inner token");
    let first_end = source
        .get(first_start..close)
        .and_then(|rest| rest.find(char::is_whitespace))
        .map_or(close, |len| first_start + len);

    let last_end = open + 1 + inner.trim_end().len();
    let last_start = source
        .get(..last_end)
        .and_then(|head| head.rfind(char::is_whitespace))
        .map_or(first_start, |index| index + 1)
        .max(first_start);

    BoundaryTokens::new(
        token(source, open, open + 1),
        token(source, first_start, first_end),
        token(source, last_start, last_end),
        token(source, close, close + 1),
    )
}

pub(super) fn token(source: &str, start: usize, end: usize) -> Token<'_> {
    Token::new(
        source.get(start..end).expect("token text"),
        Span::new(
            offset(start),
            offset(end),
            position(source, start),
            position(source, end),
        ),
    )
}

fn position(source: &str, at: usize) -> LineCol {
    let head = source.get(..at).expect("position within snippet");
    let line = head.matches('\n').count();
    let column = at - head.rfind('\n').map_or(0, |index| index + 1);
    LineCol::new(offset(line), offset(column))
}

fn offset(value: usize) -> u32 {
    u32::try_from(value).expect("snippet offsets fit in u32")
}
