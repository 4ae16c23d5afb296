//! Writers for human and JSON diagnostic output.

use std::io::{self, Write};

use super::ResolvedOutputFormat;
use super::models::DiagnosticRecord;

/// Formats one diagnostic as `path:line:column: message [kind]`.
#[must_use]
pub fn render_human_line(record: &DiagnosticRecord) -> String {
    format!(
        "{}:{}:{}: {} [{}]",
        record.path, record.line, record.column, record.message, record.kind
    )
}

/// Writes `records` to `writer` in the requested format, one per line.
///
/// # Errors
///
/// Returns an error if serialisation or writing fails.
pub fn render_diagnostics<W: Write>(
    writer: &mut W,
    records: &[DiagnosticRecord],
    format: ResolvedOutputFormat,
) -> io::Result<()> {
    for record in records {
        match format {
            ResolvedOutputFormat::Human => writeln!(writer, "{}", render_human_line(record))?,
            ResolvedOutputFormat::Json => {
                serde_json::to_writer(&mut *writer, record)?;
                writer.write_all(b"\n")?;
            }
        }
    }
    writer.flush()
}

/// Formats the closing summary, for example `3 problems in 2 files`.
///
/// Returns `None` when there is nothing to report.
#[must_use]
pub fn render_summary(problems: usize, files: usize) -> Option<String> {
    if problems == 0 {
        return None;
    }
    Some(format!(
        "{problems} {} in {files} {}",
        plural(problems, "problem", "problems"),
        plural(files, "file", "files"),
    ))
}

const fn plural<'a>(count: usize, singular: &'a str, many: &'a str) -> &'a str {
    if count == 1 { singular } else { many }
}
