//! Command-line runtime for the computed bracket spacing checker.
//!
//! The runtime owns argument parsing, configuration bootstrapping, logging
//! set-up, input reading and diagnostic rendering. It is exercised both from
//! the binary entrypoint and from tests, where the configuration loader and
//! the IO streams can be substituted.

use std::ffi::OsString;
use std::fs;
use std::io::{Read, Write};
use std::process::ExitCode;

use bracket_spacing_config::Config;
use bracket_spacing_syntax::{LintReport, Linter, SupportedLanguage, language_for_path};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, warn};

mod cli;
mod config;
mod errors;
pub mod output;
mod telemetry;

use cli::{Cli, Input};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use config::{prepare_cli_arguments, split_config_arguments};
pub(crate) use errors::AppError;
pub use output::{DiagnosticRecord, OutputFormat, ResolvedOutputFormat};
use output::{render_diagnostics, render_summary};

/// Exit status for runs that found spacing problems.
const EXIT_PROBLEMS: u8 = 1;
/// Exit status for usage, configuration, IO and parse failures.
const EXIT_ERROR: u8 = 2;

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, R: Read, W: Write, E: Write> {
    pub(crate) stdin: &'a mut R,
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
    stdout_is_terminal: bool,
}

impl<'a, R: Read, W: Write, E: Write> IoStreams<'a, R, W, E> {
    pub(crate) const fn new(
        stdin: &'a mut R,
        stdout: &'a mut W,
        stderr: &'a mut E,
        stdout_is_terminal: bool,
    ) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
            stdout_is_terminal,
        }
    }

    pub(crate) const fn stdout_is_terminal(&self) -> bool {
        self.stdout_is_terminal
    }
}

/// Totals gathered while checking inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RunSummary {
    problems: usize,
    files_with_problems: usize,
    failed_inputs: usize,
}

impl RunSummary {
    fn exit_code(self) -> ExitCode {
        if self.failed_inputs > 0 {
            ExitCode::from(EXIT_ERROR)
        } else if self.problems > 0 {
            ExitCode::from(EXIT_PROBLEMS)
        } else {
            ExitCode::SUCCESS
        }
    }
}

struct CliRunner<'a, R: Read, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'a, R, W, E>,
    loader: &'a L,
}

impl<'a, R, W, E, L> CliRunner<'a, R, W, E, L>
where
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: &'a mut IoStreams<'a, R, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli_arguments = prepare_cli_arguments(&args, &split);

        let cli = match Cli::try_parse_from(cli_arguments) {
            Ok(cli) => cli,
            Err(error) => return self.report_clap_error(&error),
        };

        let result = self
            .loader
            .load(&split.config_arguments)
            .and_then(|config| {
                telemetry::initialise(&config)?;
                Ok(config)
            })
            .and_then(|config| self.check_inputs(&cli, &config));

        match result {
            Ok(summary) => summary.exit_code(),
            Err(error) => {
                let _ = writeln!(self.io.stderr, "{error}");
                ExitCode::from(EXIT_ERROR)
            }
        }
    }

    /// Help and version requests are successes printed to stdout; every
    /// other parse failure is a usage error.
    fn report_clap_error(&mut self, error: &clap::Error) -> ExitCode {
        match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = write!(self.io.stdout, "{}", error.render());
                ExitCode::SUCCESS
            }
            _ => {
                let _ = write!(self.io.stderr, "{}", error.render());
                ExitCode::from(EXIT_ERROR)
            }
        }
    }

    fn check_inputs(&mut self, cli: &Cli, config: &Config) -> Result<RunSummary, AppError> {
        if config.has_unrecognised_mode() {
            warn!(
                mode = config.mode_name().unwrap_or_default(),
                fallback = %config.mode(),
                "unrecognised spacing mode"
            );
        }

        let linter = Linter::new(config.lint_options());
        let format = cli.output.resolve(self.io.stdout_is_terminal());
        let mut summary = RunSummary::default();

        for input in cli.inputs() {
            let label = input.label();
            let report = match self.check_input(&linter, &input, cli.language) {
                Ok(report) => report,
                Err(error) if error.is_per_input() => {
                    let _ = writeln!(self.io.stderr, "{error}");
                    summary.failed_inputs += 1;
                    continue;
                }
                Err(error) => return Err(error),
            };

            debug!(
                input = %label,
                regions = report.regions_checked(),
                problems = report.diagnostics().len(),
                "checked input"
            );
            if report.is_clean() {
                continue;
            }

            let records: Vec<DiagnosticRecord> = report
                .diagnostics()
                .iter()
                .map(|diagnostic| DiagnosticRecord::new(label.as_str(), diagnostic))
                .collect();
            render_diagnostics(&mut *self.io.stdout, &records, format).map_err(AppError::WriteOutput)?;
            summary.problems += records.len();
            summary.files_with_problems += 1;
        }

        let summary_line = match format {
            ResolvedOutputFormat::Human => {
                render_summary(summary.problems, summary.files_with_problems)
            }
            ResolvedOutputFormat::Json => None,
        };
        if let Some(line) = summary_line {
            let _ = writeln!(self.io.stderr, "{line}");
        }

        Ok(summary)
    }

    fn check_input(
        &mut self,
        linter: &Linter,
        input: &Input,
        fallback_language: Option<SupportedLanguage>,
    ) -> Result<LintReport, AppError> {
        let label = input.label();
        let (source, language) = match input {
            Input::Stdin => {
                let mut source = String::new();
                self.io
                    .stdin
                    .read_to_string(&mut source)
                    .map_err(|error| AppError::ReadInput {
                        label: label.clone(),
                        source: error,
                    })?;
                (source, fallback_language.unwrap_or_default())
            }
            Input::File(path) => {
                let detected = language_for_path(path)
                    .or_else(|error| fallback_language.ok_or(error))
                    .map_err(|error| AppError::Lint {
                        label: label.clone(),
                        source: error,
                    })?;
                let source = fs::read_to_string(path).map_err(|error| AppError::ReadInput {
                    label: label.clone(),
                    source: error,
                })?;
                (source, detected)
            }
        };

        linter
            .check_source(language, &source)
            .map_err(|error| AppError::Lint {
                label,
                source: error,
            })
    }
}

/// Runs the checker with the provided arguments and IO handles.
///
/// `stdout_is_terminal` selects the rendering used by `--output auto`.
#[must_use]
pub fn run<I, R, W, E>(
    args: I,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
    stdout_is_terminal: bool,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdin, stdout, stderr, stdout_is_terminal);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the checker with a custom configuration loader.
#[must_use]
pub(crate) fn run_with_loader<'a, I, R, W, E, L>(
    args: I,
    io: &'a mut IoStreams<'a, R, W, E>,
    loader: &'a L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}
