//! CLI argument definitions for the checker.

use std::path::PathBuf;

use bracket_spacing_syntax::SupportedLanguage;
use clap::Parser;

use crate::output::OutputFormat;

/// Path argument that selects standard input.
pub(crate) const STDIN_PATH: &str = "-";

/// Checks whitespace inside computed brackets (`obj[key]`, `{ [key]: value }`).
///
/// Configuration flags (`--config-path`, `--mode`, `--enforce-for-class-members`,
/// `--log-filter`, `--log-format`) must precede the options below.
#[derive(Parser, Debug)]
#[command(name = "bracket-spacing", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Controls how diagnostics are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
    /// Language used for standard input and for paths without a known
    /// extension.
    #[arg(long, value_name = "LANGUAGE")]
    pub(crate) language: Option<SupportedLanguage>,
    /// Files to check. `-` or no paths reads standard input.
    #[arg(value_name = "PATH")]
    pub(crate) paths: Vec<PathBuf>,
}

/// One source to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    /// Read from standard input.
    Stdin,
    /// Read from a file.
    File(PathBuf),
}

impl Input {
    /// Returns the label used when reporting on this input.
    pub(crate) fn label(&self) -> String {
        match self {
            Self::Stdin => String::from("<stdin>"),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl Cli {
    /// Returns the inputs named on the command line, defaulting to stdin.
    pub(crate) fn inputs(&self) -> Vec<Input> {
        if self.paths.is_empty() {
            return vec![Input::Stdin];
        }
        self.paths
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_PATH {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }
}
