//! Entry points that parse a source file and check its computed brackets.

use std::path::Path;

use bracket_spacing_core::{Diagnostic, LintOptions, evaluate};
use tracing::{debug, debug_span, warn};

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::parser::{ParseResult, Parser, SyntaxErrorInfo};
use crate::regions::computed_regions;

/// Diagnostics and statistics from checking one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    diagnostics: Vec<Diagnostic>,
    regions_checked: usize,
    syntax_errors: Vec<SyntaxErrorInfo>,
}

impl LintReport {
    /// Returns the diagnostics ordered by source position.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the report, returning its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Returns how many computed regions were evaluated.
    #[must_use]
    pub const fn regions_checked(&self) -> usize {
        self.regions_checked
    }

    /// Returns syntax errors Tree-sitter recovered from while parsing.
    #[must_use]
    pub fn syntax_errors(&self) -> &[SyntaxErrorInfo] {
        &self.syntax_errors
    }

    /// Returns `true` when no spacing violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Checks computed bracket spacing in JavaScript and TypeScript sources.
///
/// # Example
///
/// ```
/// use bracket_spacing_core::{LintOptions, SpacingMode};
/// use bracket_spacing_syntax::{Linter, SupportedLanguage};
///
/// let linter = Linter::new(LintOptions::default().with_mode(SpacingMode::Always));
/// let report = linter.check_source(SupportedLanguage::JavaScript, "obj[key];")?;
/// assert_eq!(report.diagnostics().len(), 2);
/// # Ok::<(), bracket_spacing_syntax::SyntaxError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Linter {
    options: LintOptions,
}

impl Linter {
    /// Creates a linter applying `options` to every file.
    #[must_use]
    pub const fn new(options: LintOptions) -> Self {
        Self { options }
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> LintOptions {
        self.options
    }

    /// Parses and checks `source` as `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be created or produces no tree.
    /// Syntax errors inside the source are not errors; they are recorded in
    /// the report and the parsable remainder is still checked.
    pub fn check_source(
        &self,
        language: SupportedLanguage,
        source: &str,
    ) -> Result<LintReport, SyntaxError> {
        let mut parser = Parser::new(language)?;
        let parsed = parser.parse(source)?;
        Ok(self.check_parsed(&parsed))
    }

    /// Checks `source`, detecting its language from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no recognised extension, or for the
    /// reasons listed on [`Linter::check_source`].
    pub fn check_file(&self, path: &Path, source: &str) -> Result<LintReport, SyntaxError> {
        let language = language_for_path(path)?;
        let span = debug_span!("check_file", path = %path.display(), %language);
        let _entered = span.enter();
        self.check_source(language, source)
    }

    /// Checks an already parsed source.
    #[must_use]
    pub fn check_parsed(&self, parsed: &ParseResult) -> LintReport {
        let syntax_errors = parsed.errors();
        for error in &syntax_errors {
            warn!(
                line = error.line,
                column = error.column,
                reason = %error.message,
                "syntax error; checking the remainder of the file"
            );
        }

        let regions = computed_regions(
            parsed.root_node(),
            parsed.source(),
            self.options.enforce_for_class_members(),
        );

        let mut diagnostics = Vec::new();
        for region in &regions {
            evaluate(region.tokens(), self.options.mode(), &mut diagnostics);
        }
        diagnostics.sort_by_key(|diagnostic| diagnostic.span().start_byte());

        debug!(
            mode = %self.options.mode(),
            regions = regions.len(),
            diagnostics = diagnostics.len(),
            "checked computed brackets"
        );

        LintReport {
            diagnostics,
            regions_checked: regions.len(),
            syntax_errors,
        }
    }
}

/// Maps a path to its language, distinguishing missing from unknown
/// extensions.
///
/// # Errors
///
/// Returns [`SyntaxError::UnknownLanguage`] when the path has no extension and
/// [`SyntaxError::UnsupportedExtension`] when the extension is not recognised.
pub fn language_for_path(path: &Path) -> Result<SupportedLanguage, SyntaxError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| SyntaxError::unknown_language(path.to_path_buf()))?;
    SupportedLanguage::from_extension(extension)
        .ok_or_else(|| SyntaxError::unsupported_extension(extension))
}
