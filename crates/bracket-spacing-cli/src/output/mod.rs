//! Diagnostic rendering for the checker.
//!
//! Human output prints one `path:line:column: message [kind]` line per
//! diagnostic. JSON output prints one object per diagnostic per line so that
//! editors and CI tooling can consume the stream incrementally.

mod models;
mod render;

use clap::ValueEnum;

pub use models::DiagnosticRecord;
pub use render::{render_diagnostics, render_human_line, render_summary};

/// Output format selection for diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    Auto,
    /// Always render human-readable lines.
    Human,
    /// Always emit JSON lines.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// Human-readable lines.
    Human,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}
