//! Parse every input file and report the results in input order.

use std::io::Write;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use sable_diagnostic::emitter::{count_by_severity, DiagnosticEmitter, JsonEmitter, TextEmitter};
use sable_diagnostic::Diagnostic;
use sable_ir::LineIndex;
use sable_parse::parse_syntax_tree;

use crate::{DriverError, Invocation, OutputFormat};

/// Totals over one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// One parsed file, already rendered.
struct FileReport {
    dump: Vec<u8>,
    output: Vec<u8>,
    errors: usize,
    warnings: usize,
}

/// Parse the invocation's files in parallel and write the reports to `out`.
///
/// A file that cannot be read aborts the run; syntax errors never do. In
/// JSON mode every diagnostic of the run lands in a single array, after any
/// tree dumps.
pub fn run(invocation: &Invocation, out: &mut dyn Write) -> Result<Summary, DriverError> {
    info!(files = invocation.paths.len(), "parsing");
    let mut summary = Summary::default();
    let mut sections = Vec::with_capacity(invocation.paths.len() + 1);

    let option_errors = invocation.options.errors();
    if !option_errors.is_empty() {
        let index = LineIndex::new("");
        let mut output = Vec::new();
        emit(invocation.format, &mut output, "<options>", &index, option_errors);
        sections.push(output);
        let (errors, warnings) = count_by_severity(option_errors);
        summary.errors += errors;
        summary.warnings += warnings;
    }

    let reports = invocation
        .paths
        .par_iter()
        .map(|path| parse_file(path, invocation))
        .collect::<Result<Vec<_>, _>>()?;

    for report in &reports {
        summary.files += 1;
        summary.errors += report.errors;
        summary.warnings += report.warnings;
    }

    match invocation.format {
        OutputFormat::Text => {
            for section in &sections {
                out.write_all(section).map_err(DriverError::Output)?;
            }
            for report in &reports {
                out.write_all(&report.dump).map_err(DriverError::Output)?;
                out.write_all(&report.output).map_err(DriverError::Output)?;
            }
            writeln!(
                out,
                "{} file(s): {} error(s), {} warning(s)",
                summary.files, summary.errors, summary.warnings
            )
            .map_err(DriverError::Output)?;
        }
        OutputFormat::Json => {
            for report in &reports {
                out.write_all(&report.dump).map_err(DriverError::Output)?;
            }
            sections.extend(reports.into_iter().map(|report| report.output));
            write_json_array(out, &sections).map_err(DriverError::Output)?;
        }
    }

    out.flush().map_err(DriverError::Output)?;
    Ok(summary)
}

/// Join rendered entry lists into one array; empty lists add nothing.
fn write_json_array(out: &mut dyn Write, sections: &[Vec<u8>]) -> std::io::Result<()> {
    out.write_all(b"[")?;
    let mut first = true;
    for section in sections.iter().filter(|s| !s.is_empty()) {
        if !first {
            out.write_all(b",")?;
        }
        first = false;
        out.write_all(section)?;
    }
    out.write_all(b"]\n")
}

fn parse_file(path: &Path, invocation: &Invocation) -> Result<FileReport, DriverError> {
    let text = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if u32::try_from(text.len()).is_err() {
        return Err(DriverError::TooLarge {
            path: path.to_path_buf(),
        });
    }

    let tree = parse_syntax_tree(&text, &invocation.options);
    let diagnostics = tree.diagnostics();
    debug!(
        path = %path.display(),
        diagnostics = diagnostics.len(),
        "parsed"
    );

    let display = path.display().to_string();
    let mut dump = Vec::new();
    if invocation.dump {
        render_dump(&mut dump, &display, &tree.root().debug_tree());
    }
    let mut output = Vec::new();
    emit(
        invocation.format,
        &mut output,
        &display,
        tree.line_index(),
        &diagnostics,
    );
    let (errors, warnings) = count_by_severity(&diagnostics);
    Ok(FileReport {
        dump,
        output,
        errors,
        warnings,
    })
}

fn render_dump(output: &mut Vec<u8>, path: &str, dump: &str) {
    let _ = writeln!(output, "{path}:");
    let _ = output.write_all(dump.as_bytes());
}

fn emit(
    format: OutputFormat,
    output: &mut Vec<u8>,
    path: &str,
    index: &LineIndex,
    diagnostics: &[Diagnostic],
) {
    match format {
        OutputFormat::Text => {
            let mut emitter = TextEmitter::new(output, path, index);
            emitter.emit_all(diagnostics);
            emitter.flush();
        }
        OutputFormat::Json => {
            // Bare entries; `write_json_array` supplies the brackets.
            let mut emitter = JsonEmitter::new(output, path, index);
            emitter.emit_all(diagnostics);
            emitter.flush();
        }
    }
}
