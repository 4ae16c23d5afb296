//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use bracket_spacing_syntax::SyntaxError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {label}: {source}")]
    ReadInput { label: String, source: io::Error },
    #[error("failed to check {label}: {source}")]
    Lint { label: String, source: SyntaxError },
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}

impl AppError {
    /// Returns `true` for failures confined to one input; the run continues
    /// with the remaining inputs.
    pub(crate) const fn is_per_input(&self) -> bool {
        matches!(self, Self::ReadInput { .. } | Self::Lint { .. })
    }
}
