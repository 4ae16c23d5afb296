//! Spacing rules for bracketed computed-access expressions.
//!
//! This crate owns the token-adjacency checks that decide whether the inside
//! of a bracketed region (`obj[key]`, `{ [key]: value }`) is spaced according
//! to the configured policy. It knows nothing about parsing: callers hand it
//! the four boundary tokens of each computed region and receive
//! [`Diagnostic`] values through a [`DiagnosticSink`].
//!
//! # Core types
//!
//! - [`SpacingMode`]: the resolved `never` / `always` / `even` policy
//! - [`Token`] and [`BoundaryTokens`]: the tokens around one region
//! - [`Span`] and [`LineCol`]: byte and line/column source positions
//! - [`Diagnostic`] and [`DiagnosticKind`]: style violations
//! - [`LintOptions`]: rule options shared by the traversal driver
//!
//! # Example
//!
//! ```
//! use bracket_spacing_core::{
//!     BoundaryTokens, LineCol, Span, SpacingMode, Token, evaluate_region,
//! };
//!
//! // obj[ key ]
//! let token = |text, start: u32, end: u32| {
//!     Token::new(text, Span::new(start, end, LineCol::new(0, start), LineCol::new(0, end)))
//! };
//! let region = BoundaryTokens::new(
//!     token("[", 3, 4),
//!     token("key", 5, 8),
//!     token("key", 5, 8),
//!     token("]", 9, 10),
//! );
//!
//! let diagnostics = evaluate_region(&region, SpacingMode::resolve(None));
//! assert_eq!(diagnostics.len(), 2);
//! assert_eq!(diagnostics[0].message(), "There should be no space after '['");
//! ```

mod diagnostic;
mod evaluator;
mod mode;
mod options;
mod span;
mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use evaluator::{evaluate, evaluate_region};
pub use mode::{SpacingMode, SpacingModeParseError};
pub use options::LintOptions;
pub use span::{LineCol, Span};
pub use token::{BoundaryTokens, Token};

#[cfg(test)]
mod tests;
