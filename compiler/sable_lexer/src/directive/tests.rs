use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;
use sable_diagnostic::{ErrorCode, Severity};
use sable_ir::SyntaxKind;
use sable_options::ParseOptions;
use sable_syntax::Token;

use super::evaluate;
use crate::lex;

fn symbols(names: &[&str]) -> FxHashSet<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn lex_with(text: &str, defined: &[&str]) -> Vec<Token> {
    let options = ParseOptions::default().with_preprocessor_symbols(defined.iter().copied());
    lex(text, &options)
}

fn kinds(tokens: &[Token]) -> Vec<SyntaxKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn codes(text: &str) -> Vec<ErrorCode> {
    lex_with(text, &[])
        .iter()
        .flat_map(|t| t.diagnostics.iter().map(|d| d.code))
        .collect()
}

#[test]
fn test_evaluate_expressions() {
    let defined = symbols(&["A", "DEBUG"]);
    assert_eq!(evaluate("A", &defined), Some(true));
    assert_eq!(evaluate("B", &defined), Some(false));
    assert_eq!(evaluate("A && !B", &defined), Some(true));
    assert_eq!(evaluate("(A || B) == false", &defined), Some(false));
    assert_eq!(evaluate("B != DEBUG", &defined), Some(true));
    assert_eq!(evaluate("true && !false", &defined), Some(true));
}

#[test]
fn test_evaluate_malformed() {
    let defined = symbols(&[]);
    assert_eq!(evaluate("", &defined), None);
    assert_eq!(evaluate("A &&", &defined), None);
    assert_eq!(evaluate("(A", &defined), None);
    assert_eq!(evaluate("A B", &defined), None);
    assert_eq!(evaluate("A + B", &defined), None);
}

#[test]
fn test_active_branch_selected_by_symbol() {
    let text = "#if DEBUG\nint x;\n#else\nlong y;\n#endif\n";

    let debug = lex_with(text, &["DEBUG"]);
    assert_eq!(
        kinds(&debug),
        vec![
            SyntaxKind::IntKeyword,
            SyntaxKind::IdentifierToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
    let eof = &debug[3];
    let disabled: Vec<_> = eof
        .leading
        .iter()
        .filter(|t| t.kind == SyntaxKind::DisabledTextTrivia)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(disabled, vec!["long y;\n"]);

    let release = lex_with(text, &[]);
    assert_eq!(release[0].kind, SyntaxKind::LongKeyword);
    assert_eq!(
        release[0].leading[0].kind,
        SyntaxKind::IfDirectiveTrivia
    );
}

#[test]
fn test_elif_chain_takes_first_true_branch() {
    let text = "#if A\na\n#elif B\nb\n#elif true\nc\n#else\nd\n#endif\n";
    let tokens = lex_with(text, &["B"]);
    assert_eq!(tokens[0].text, "b");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_nested_groups_in_disabled_text() {
    let text = "#if false\n#if true\nx\n#endif\n#endif\ny";
    let tokens = lex_with(text, &[]);
    assert_eq!(kinds(&tokens), vec![SyntaxKind::IdentifierToken, SyntaxKind::EndOfFileToken]);
    assert_eq!(tokens[0].text, "y");
    assert!(tokens.iter().all(|t| t.diagnostics.is_empty()));
}

#[test]
fn test_define_affects_later_conditions() {
    let text = "#define X\n#if X\nyes\n#endif";
    let tokens = lex_with(text, &[]);
    assert_eq!(tokens[0].text, "yes");

    let undefined = lex_with("#undef X\n#if X\nyes\n#endif", &["X"]);
    assert_eq!(kinds(&undefined), vec![SyntaxKind::EndOfFileToken]);
}

#[test]
fn test_directive_errors() {
    assert_eq!(codes("#if A\nx"), vec![ErrorCode::CS1027]);
    assert_eq!(codes("#endif"), vec![ErrorCode::CS1028]);
    assert_eq!(codes("#region\nx"), vec![ErrorCode::CS1038]);
    assert_eq!(codes("#endregion"), vec![ErrorCode::CS1028]);
    assert_eq!(codes("x;\n#define Y"), vec![ErrorCode::CS1032]);
    assert_eq!(codes("#define 1x"), vec![ErrorCode::CS1001]);
    assert_eq!(codes("#frobnicate"), vec![ErrorCode::CS1024]);
    assert_eq!(codes("#if (A\n#endif"), vec![ErrorCode::CS1517]);
    assert_eq!(codes("#if A\n#else junk\n#endif"), vec![ErrorCode::CS1025]);
    assert_eq!(codes("a #if"), vec![ErrorCode::CS1040]);
}

#[test]
fn test_directive_not_at_line_start_is_bad_trivia() {
    let tokens = lex_with("a #region\nb", &[]);
    assert_eq!(tokens[1].leading[0].kind, SyntaxKind::BadDirectiveTrivia);
    // The region is never opened, so no missing #endregion is reported.
    assert_eq!(codes("a #region\nb"), vec![ErrorCode::CS1040]);
}

#[test]
fn test_error_and_warning_directives() {
    let tokens = lex_with("#error oops // note\n#warning careful\nx", &[]);
    let diagnostics = &tokens[0].diagnostics;
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message(), "#error: 'oops'");
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[1].message(), "#warning: 'careful'");
    assert_eq!(diagnostics[1].severity, Severity::Warning);
}

#[test]
fn test_accepted_directives_are_silent() {
    assert!(codes("#pragma warning disable 1\n#nullable enable\n#line 10\nx").is_empty());
}
