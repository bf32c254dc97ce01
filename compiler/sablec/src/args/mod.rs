//! Command-line parsing.
//!
//! Flags map one-to-one onto [`ParseOptions`] builders. Values are
//! attached with `=` (`--langversion=9`); repeated `--define` and
//! `--feature` flags accumulate.

use std::path::PathBuf;

use sable_options::{DocumentationMode, LanguageVersion, ParseOptions, SourceCodeKind};

use crate::DriverError;

pub const USAGE: &str = "\
Usage: sablec [options] <file>...

Options:
  --langversion=<v>     Language version: 1-13, 7.1, latest, preview, default
  --kind=<kind>         Source kind: regular (default), script
  --define=<A;B>        Preprocessor symbols (repeatable)
  --doc=<mode>          Documentation comments: none, parse (default), diagnose
  --feature=<n[=v]>     Enable a feature flag (repeatable)
  --dump                Print each syntax tree
  --json                Report diagnostics as JSON
  -h, --help            Show this help message
  --version             Show version information
";

/// What the driver was asked to do.
#[derive(Debug)]
pub enum Command {
    Help,
    Version,
    Parse(Invocation),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A parse run: the files and how to parse and report them.
#[derive(Debug)]
pub struct Invocation {
    pub paths: Vec<PathBuf>,
    pub options: ParseOptions,
    pub format: OutputFormat,
    pub dump: bool,
}

/// Interpret the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, DriverError> {
    let mut options = ParseOptions::default();
    let mut symbols: Vec<String> = Vec::new();
    let mut features: Vec<(String, String)> = Vec::new();
    let mut paths = Vec::new();
    let mut format = OutputFormat::Text;
    let mut dump = false;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "--version" {
            return Ok(Command::Version);
        } else if arg == "--dump" {
            dump = true;
        } else if arg == "--json" {
            format = OutputFormat::Json;
        } else if let Some(value) = arg.strip_prefix("--langversion=") {
            let version: LanguageVersion = value.parse()?;
            options = options.with_language_version(version);
        } else if let Some(value) = arg.strip_prefix("--kind=") {
            options = options.with_kind(parse_kind(value)?);
        } else if let Some(value) = arg.strip_prefix("--doc=") {
            options = options.with_documentation_mode(parse_doc_mode(value)?);
        } else if let Some(value) = arg.strip_prefix("--define=") {
            symbols.extend(
                value
                    .split([';', ','])
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned),
            );
        } else if let Some(value) = arg.strip_prefix("--feature=") {
            features.push(parse_feature(value)?);
        } else if arg.starts_with('-') {
            return Err(DriverError::Usage(format!("unknown option '{arg}'")));
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    if paths.is_empty() {
        return Err(DriverError::NoInputs);
    }
    if !symbols.is_empty() {
        options = options.with_preprocessor_symbols(symbols);
    }
    if !features.is_empty() {
        options = options.with_features(features);
    }
    Ok(Command::Parse(Invocation {
        paths,
        options,
        format,
        dump,
    }))
}

fn parse_kind(value: &str) -> Result<SourceCodeKind, DriverError> {
    match value.to_ascii_lowercase().as_str() {
        "regular" => Ok(SourceCodeKind::Regular),
        "script" => Ok(SourceCodeKind::Script),
        // Kept so the options report it as unsupported.
        "interactive" => Ok(SourceCodeKind::Interactive),
        _ => Err(DriverError::Usage(format!("unknown source kind '{value}'"))),
    }
}

fn parse_doc_mode(value: &str) -> Result<DocumentationMode, DriverError> {
    match value.to_ascii_lowercase().as_str() {
        "none" => Ok(DocumentationMode::None),
        "parse" => Ok(DocumentationMode::Parse),
        "diagnose" => Ok(DocumentationMode::Diagnose),
        _ => Err(DriverError::Usage(format!(
            "unknown documentation mode '{value}'"
        ))),
    }
}

/// `name` or `name=value`; a bare name means `true`.
fn parse_feature(value: &str) -> Result<(String, String), DriverError> {
    let (name, setting) = value.split_once('=').unwrap_or((value, "true"));
    if name.is_empty() {
        return Err(DriverError::Usage("empty feature name".to_owned()));
    }
    Ok((name.to_owned(), setting.to_owned()))
}

#[cfg(test)]
mod tests;
