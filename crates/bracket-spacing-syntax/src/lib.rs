//! Tree-sitter driver for the computed bracket spacing checks.
//!
//! This crate parses JavaScript and TypeScript with Tree-sitter, finds every
//! computed bracketed region (member access and computed property keys),
//! extracts its four boundary tokens and hands them to
//! [`bracket_spacing_core::evaluate`].
//!
//! # Supported Languages
//!
//! - JavaScript (`.js`, `.jsx`, `.mjs`, `.cjs`)
//! - TypeScript (`.ts`, `.mts`, `.cts`)
//! - TSX (`.tsx`)
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use bracket_spacing_core::LintOptions;
//! use bracket_spacing_syntax::Linter;
//!
//! let linter = Linter::new(LintOptions::default());
//! let report = linter.check_file(Path::new("main.ts"), "const v = obj[ key ];")?;
//! assert_eq!(report.diagnostics().len(), 2);
//! # Ok::<(), bracket_spacing_syntax::SyntaxError>(())
//! ```

mod error;
mod language;
mod linter;
mod parser;
mod position;
mod regions;

pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use linter::{LintReport, Linter, language_for_path};
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};
pub use regions::{ComputedRegion, RegionKind, computed_regions};

#[cfg(test)]
mod tests;
