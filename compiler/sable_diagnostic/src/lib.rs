//! Diagnostic system for the Sable parser.
//!
//! Every problem the front-end finds is data, never a Rust error:
//! - [`ErrorCode`] is the stable `CSxxxx` identifier with a message template
//! - [`Diagnostic`] pairs a code with message arguments and a source span
//! - [`DiagnosticBag`] buffers diagnostics during parsing and supports
//!   fork/commit so speculative parses can be thrown away cleanly
//! - [`emitter`] renders diagnostics for humans and tools

mod bag;
mod diagnostic;
pub mod emitter;
mod error_code;

pub use bag::{sort_diagnostics, BagMark, DiagnosticBag};
pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
