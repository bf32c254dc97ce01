#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn invocation(list: &[&str]) -> Invocation {
    match parse_args(&args(list)).unwrap() {
        Command::Parse(invocation) => invocation,
        other => panic!("expected a parse command, got {other:?}"),
    }
}

#[test]
fn plain_files_use_default_options() {
    let inv = invocation(&["a.cs", "b.cs"]);
    assert_eq!(inv.paths, [PathBuf::from("a.cs"), PathBuf::from("b.cs")]);
    assert!(inv.options.ptr_eq(&ParseOptions::default()));
    assert_eq!(inv.format, OutputFormat::Text);
    assert!(!inv.dump);
}

#[test]
fn flags_map_onto_options() {
    let inv = invocation(&[
        "--langversion=9",
        "--kind=Script",
        "--doc=diagnose",
        "--define=DEBUG;TRACE",
        "--define=X",
        "--feature=relaxed-partial-ordering",
        "--feature=other=off",
        "--dump",
        "--json",
        "main.cs",
    ]);
    let options = &inv.options;
    assert_eq!(options.language_version(), LanguageVersion::CSharp9);
    assert_eq!(options.kind(), SourceCodeKind::Script);
    assert_eq!(options.documentation_mode(), DocumentationMode::Diagnose);
    assert!(options.is_symbol_defined("DEBUG"));
    assert!(options.is_symbol_defined("TRACE"));
    assert!(options.is_symbol_defined("X"));
    assert_eq!(
        options.features().get("relaxed-partial-ordering").map(String::as_str),
        Some("true")
    );
    assert_eq!(options.features().get("other").map(String::as_str), Some("off"));
    assert!(inv.dump);
    assert_eq!(inv.format, OutputFormat::Json);
}

#[test]
fn help_and_version_win() {
    assert!(matches!(
        parse_args(&args(&["a.cs", "--help"])).unwrap(),
        Command::Help
    ));
    assert!(matches!(
        parse_args(&args(&["--version"])).unwrap(),
        Command::Version
    ));
}

#[test]
fn bad_arguments_are_usage_errors() {
    assert!(matches!(parse_args(&args(&[])), Err(DriverError::NoInputs)));
    assert!(matches!(
        parse_args(&args(&["--bogus", "a.cs"])),
        Err(DriverError::Usage(_))
    ));
    assert!(matches!(
        parse_args(&args(&["--kind=library", "a.cs"])),
        Err(DriverError::Usage(_))
    ));
    assert!(matches!(
        parse_args(&args(&["--feature=", "a.cs"])),
        Err(DriverError::Usage(_))
    ));
    assert!(matches!(
        parse_args(&args(&["--langversion=99", "a.cs"])),
        Err(DriverError::LanguageVersion(_))
    ));
}

#[test]
fn interactive_kind_is_passed_through() {
    let inv = invocation(&["--kind=interactive", "a.csx"]);
    assert_eq!(inv.options.specified_kind(), SourceCodeKind::Interactive);
    assert_eq!(inv.options.errors().len(), 1);
}
