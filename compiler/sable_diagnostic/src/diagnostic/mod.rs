//! Core diagnostic type.

use std::fmt;

use sable_ir::{LineCol, LineIndex, Span};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Hidden,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Hidden => write!(f, "hidden"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single reported problem.
///
/// The message is not stored; it is rendered from the code's template and
/// `args` on demand so diagnostics stay cheap to clone while speculating.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub args: Vec<String>,
    /// Absolute byte range in the parsed text. Options diagnostics use
    /// [`Span::DUMMY`].
    pub span: Span,
}

impl Diagnostic {
    /// Create a diagnostic at the code's default severity.
    pub fn new(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            code,
            severity: code.default_severity(),
            args: Vec::new(),
            span,
        }
    }

    /// Append a message argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Move the diagnostic to another span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Shift the span by `delta` bytes.
    #[must_use]
    pub fn offset_by(mut self, delta: u32) -> Self {
        self.span = Span::new(self.span.start + delta, self.span.end + delta);
        self
    }

    /// Render the message by substituting `{N}` placeholders.
    pub fn message(&self) -> String {
        render_template(self.code.template(), &self.args)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Start and end positions of the span, 1-based.
    pub fn location(&self, index: &LineIndex) -> (LineCol, LineCol) {
        (index.line_col(self.span.start), index.line_col(self.span.end))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message())
    }
}

/// Substitute `{N}` placeholders. Unknown indices render as empty text;
/// braces not forming a placeholder are kept verbatim.
fn render_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after.as_bytes().get(digits) == Some(&b'}') {
            if let Some(arg) = after[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
            {
                out.push_str(arg);
            }
            rest = &after[digits + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
