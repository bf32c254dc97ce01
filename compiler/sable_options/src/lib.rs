//! Parse options and language-version feature gating.
//!
//! [`ParseOptions`] is an immutable, shareable configuration handle. Every
//! `with_*` method returns either the very same handle (when nothing
//! changes) or a new one that differs in exactly one field, re-validated.
//!
//! Raw inputs keep unknown values ([`LanguageVersion::Other`] and friends)
//! so invalid configurations round-trip and are reported through
//! [`ParseOptions::errors`] instead of being rejected.

mod feature;
mod kinds;
mod options;
mod version;

pub use feature::Feature;
pub use kinds::{DocumentationMode, SourceCodeKind};
pub use options::{IntoSymbolName, ParseOptions};
pub use version::{LanguageVersion, UnknownLanguageVersion};
