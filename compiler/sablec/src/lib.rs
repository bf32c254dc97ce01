//! Sable command-line driver.
//!
//! Parses source files in parallel and reports their diagnostics:
//!
//! ```text
//! sablec --langversion=10 --define=DEBUG src/*.cs
//! sablec --dump Program.cs
//! ```
//!
//! [`parse_args`] turns the command line into a [`Command`]; [`run`] does the
//! work and writes everything to the given writer so the binary and the
//! tests share one code path.

use std::io;
use std::path::PathBuf;
use std::sync::Once;

use sable_options::UnknownLanguageVersion;

mod args;
mod driver;

pub use args::{parse_args, Command, Invocation, OutputFormat, USAGE};
pub use driver::{run, Summary};

/// Everything that stops the driver before or while parsing.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),

    #[error("no input files")]
    NoInputs,

    #[error(transparent)]
    LanguageVersion(#[from] UnknownLanguageVersion),

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is larger than 4 GiB", path.display())]
    TooLarge { path: PathBuf },

    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. `RUST_LOG=sable_parse=debug` shows the
/// parser's speculation decisions, `trace` shows every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
