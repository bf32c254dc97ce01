// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the driver: the library entry points against real
//! files, and the binary's exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as Process;

use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

use sablec::{parse_args, run, Command, DriverError, Invocation, Summary};

fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn invocation(flags: &[&str], paths: &[&Path]) -> Invocation {
    let mut args: Vec<String> = flags.iter().map(|s| (*s).to_owned()).collect();
    args.extend(paths.iter().map(|p| p.display().to_string()));
    match parse_args(&args).unwrap() {
        Command::Parse(invocation) => invocation,
        other => panic!("expected a parse command, got {other:?}"),
    }
}

fn run_to_string(invocation: &Invocation) -> (Summary, String) {
    let mut out = Vec::new();
    let summary = run(invocation, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn clean_files_report_only_the_summary() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.cs", "class A { void M() { } }\n");
    let b = write(&dir, "b.cs", "namespace N;\nrecord R(int X);\n");

    let (summary, out) = run_to_string(&invocation(&[], &[&a, &b]));
    assert_eq!(
        summary,
        Summary {
            files: 2,
            errors: 0,
            warnings: 0
        }
    );
    assert_eq!(out, "2 file(s): 0 error(s), 0 warning(s)\n");
}

#[test]
fn diagnostics_are_reported_with_line_and_column() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "broken.cs", "class C {\n    int x = 1\n}\n");

    let (summary, out) = run_to_string(&invocation(&[], &[&path]));
    assert!(summary.has_errors());
    assert_eq!(summary.errors, 1);
    let first = out.lines().next().unwrap();
    assert_eq!(
        first,
        format!("{}(2,14): error CS1002: ; expected", path.display())
    );
}

#[test]
fn reports_follow_input_order() {
    let dir = tempdir().unwrap();
    let paths: Vec<PathBuf> = (0..8)
        .map(|i| write(&dir, &format!("f{i}.cs"), "class C { int x }\n"))
        .collect();
    let refs: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();

    let (summary, out) = run_to_string(&invocation(&[], &refs));
    assert_eq!(summary.files, 8);
    let reported: Vec<&str> = out
        .lines()
        .filter(|line| line.contains("error"))
        .filter_map(|line| line.split('(').next())
        .filter(|p| p.ends_with(".cs"))
        .collect();
    let expected: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    assert_eq!(reported, expected);
}

#[test]
fn language_version_gates_features() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "scoped.cs", "namespace N;\nclass C { }\n");

    let (summary, _) = run_to_string(&invocation(&[], &[&path]));
    assert_eq!(summary.errors, 0);

    let (summary, out) = run_to_string(&invocation(&["--langversion=9"], &[&path]));
    assert_eq!(summary.errors, 1);
    assert!(out.contains("CS8773"), "{out}");
}

#[test]
fn defines_select_conditional_code() {
    let dir = tempdir().unwrap();
    let path = write(
        &dir,
        "cond.cs",
        "#if DEBUG\nclass C { }\n#else\nclass C {\n#endif\n",
    );

    let (summary, _) = run_to_string(&invocation(&["--define=DEBUG"], &[&path]));
    assert_eq!(summary.errors, 0);

    let (summary, _) = run_to_string(&invocation(&[], &[&path]));
    assert!(summary.has_errors());
}

#[test]
fn dump_prints_the_tree() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "tiny.cs", "class C { }");

    let (_, out) = run_to_string(&invocation(&["--dump"], &[&path]));
    let mut lines = out.lines();
    assert_eq!(lines.next().unwrap(), format!("{}:", path.display()));
    assert_eq!(lines.next().unwrap(), "CompilationUnit");
    assert_eq!(lines.next().unwrap(), "  ClassDeclaration");
}

#[test]
fn json_output_is_one_array_per_run() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.cs", "class C { int x }");
    let clean = write(&dir, "clean.cs", "class D { }");
    let b = write(&dir, "b.cs", "class E { int y }");

    let (summary, out) = run_to_string(&invocation(
        &["--json", "--kind=interactive"],
        &[&a, &clean, &b],
    ));
    assert_eq!(summary.errors, 3);
    assert!(out.starts_with("[{\"code\":\"CS8190\""), "{out}");
    assert!(out.ends_with("}]\n"), "{out}");
    assert_eq!(out.matches('[').count(), 1, "{out}");
    assert_eq!(out.matches(']').count(), 1, "{out}");
    assert_eq!(out.matches("},{").count(), 2, "{out}");
    assert!(!out.contains(",,"));
    assert!(!out.contains("file(s)"));
}

#[test]
fn json_output_without_diagnostics_is_an_empty_array() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.cs", "class C { }");
    let b = write(&dir, "b.cs", "class D { }");

    let (_, out) = run_to_string(&invocation(&["--json"], &[&a, &b]));
    assert_eq!(out, "[]\n");
}

#[test]
fn options_errors_are_reported_once() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "s.csx", "System.Console.WriteLine();\n");

    let (summary, out) = run_to_string(&invocation(&["--kind=interactive"], &[&path]));
    assert_eq!(summary.errors, 1);
    assert_eq!(out.matches("CS8190").count(), 1);
    assert!(out.starts_with("<options>"));
}

#[test]
fn missing_file_is_a_driver_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.cs");
    let mut out = Vec::new();
    let err = run(&invocation(&[], &[&missing]), &mut out).unwrap_err();
    assert!(matches!(err, DriverError::Read { .. }));
    assert!(err.to_string().contains("nope.cs"));
}

#[test]
fn binary_exit_codes() {
    let dir = tempdir().unwrap();
    let good = write(&dir, "good.cs", "class C { }\n");
    let bad = write(&dir, "bad.cs", "class C {\n");
    let exe = env!("CARGO_BIN_EXE_sablec");

    let status = Process::new(exe).arg(&good).status().unwrap();
    assert_eq!(status.code(), Some(0));

    let status = Process::new(exe).arg(&bad).output().unwrap().status;
    assert_eq!(status.code(), Some(1));

    let output = Process::new(exe).arg("--bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown option"));

    let output = Process::new(exe).arg("--version").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("sablec "));
}
