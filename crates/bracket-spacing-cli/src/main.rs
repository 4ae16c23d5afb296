//! CLI entrypoint for the computed bracket spacing checker.
//!
//! The binary delegates to [`bracket_spacing_cli::run`], which loads
//! configuration, parses arguments, checks every input and renders the
//! diagnostics.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout_is_terminal = io::stdout().is_terminal();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    bracket_spacing_cli::run(
        std::env::args_os(),
        &mut stdin,
        &mut stdout,
        &mut stderr,
        stdout_is_terminal,
    )
}
