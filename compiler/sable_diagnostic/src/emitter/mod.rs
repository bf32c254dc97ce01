//! Diagnostic emitters.
//!
//! - [`TextEmitter`]: `path(line,col): error CS1002: ; expected`, one per line
//! - [`JsonEmitter`]: a JSON array for tooling
//!
//! Both resolve spans through a [`LineIndex`] for the file being reported.

use std::fmt::Write as _;
use std::io::Write;

use sable_ir::LineIndex;

use crate::{Diagnostic, Severity};

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Count errors and warnings in a slice.
pub fn count_by_severity(diagnostics: &[Diagnostic]) -> (usize, usize) {
    diagnostics.iter().fold((0, 0), |(e, w), d| match d.severity {
        Severity::Error => (e + 1, w),
        Severity::Warning => (e, w + 1),
        Severity::Info | Severity::Hidden => (e, w),
    })
}

/// Compiler-style plain text output.
pub struct TextEmitter<'a, W: Write> {
    writer: W,
    path: &'a str,
    index: &'a LineIndex,
}

impl<'a, W: Write> TextEmitter<'a, W> {
    pub fn new(writer: W, path: &'a str, index: &'a LineIndex) -> Self {
        TextEmitter {
            writer,
            path,
            index,
        }
    }
}

impl<W: Write> DiagnosticEmitter for TextEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let (start, _) = diagnostic.location(self.index);
        let _ = writeln!(self.writer, "{}{start}: {diagnostic}", self.path);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let _ = writeln!(
            self.writer,
            "{}: {error_count} error(s), {warning_count} warning(s)",
            self.path
        );
    }
}

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<'a, W: Write> {
    writer: W,
    path: &'a str,
    index: &'a LineIndex,
    first: bool,
}

impl<'a, W: Write> JsonEmitter<'a, W> {
    pub fn new(writer: W, path: &'a str, index: &'a LineIndex) -> Self {
        JsonEmitter {
            writer,
            path,
            index,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "]");
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        self.first = false;
        let (start, end) = diagnostic.location(self.index);
        let _ = write!(
            self.writer,
            "{{\"code\":\"{}\",\"severity\":\"{}\",\"message\":\"{}\",\"path\":\"{}\",\
             \"start\":{{\"offset\":{},\"line\":{},\"column\":{}}},\
             \"end\":{{\"offset\":{},\"line\":{},\"column\":{}}}}}",
            diagnostic.code,
            diagnostic.severity,
            escape_json(&diagnostic.message()),
            escape_json(self.path),
            diagnostic.span.start,
            start.line,
            start.col,
            diagnostic.span.end,
            end.line,
            end.col,
        );
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests;
