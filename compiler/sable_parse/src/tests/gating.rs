use pretty_assertions::assert_eq;

use sable_ir::SyntaxKind as K;
use sable_options::{LanguageVersion, ParseOptions, SourceCodeKind};

use super::{codes, expr, expr_with, top_level, tree, tree_with};

fn version(version: LanguageVersion) -> ParseOptions {
    ParseOptions::default().with_language_version(version)
}

#[test]
fn gated_syntax_keeps_its_shape() {
    let parsed = expr_with("new()", &version(LanguageVersion::CSharp8));
    assert_eq!(parsed.node().debug_tree(), expr("new()").node().debug_tree());

    let diagnostics = parsed.diagnostics();
    assert_eq!(codes(&diagnostics), ["CS8773"]);
    assert_eq!(
        diagnostics[0].args,
        ["target-typed object creation", "8.0", "9.0"]
    );
    assert_eq!(diagnostics[0].span.start, 0);
}

#[test]
fn null_propagation_needs_csharp6() {
    let parsed = expr_with("a?.b", &version(LanguageVersion::CSharp5));
    assert_eq!(parsed.node().kind(), K::ConditionalAccessExpression);
    assert_eq!(codes(&parsed.diagnostics()), ["CS8773"]);

    let parsed = expr_with("a?.b", &version(LanguageVersion::CSharp6));
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn file_scoped_namespace_needs_csharp10() {
    let text = "namespace App;\nclass C { }\n";
    let tree = tree_with(text, &version(LanguageVersion::CSharp9));
    assert_eq!(top_level(&tree), [K::FileScopedNamespaceDeclaration]);
    assert_eq!(codes(&tree.diagnostics()), ["CS8773"]);
}

#[test]
fn top_level_statements_are_reported_once() {
    let tree = tree_with("x();\ny();\n", &version(LanguageVersion::CSharp8));
    assert_eq!(top_level(&tree), [K::GlobalStatement, K::GlobalStatement]);
    assert_eq!(codes(&tree.diagnostics()), ["CS8773"]);
}

#[test]
fn scripts_allow_statements_without_gating() {
    let options = version(LanguageVersion::CSharp8).with_kind(SourceCodeKind::Script);
    let tree = tree_with("x();\nclass C { }\ny();\n", &options);
    assert_eq!(
        top_level(&tree),
        [K::GlobalStatement, K::ClassDeclaration, K::GlobalStatement]
    );
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn interactive_kind_is_an_options_error() {
    let options = ParseOptions::default().with_kind(SourceCodeKind::Interactive);
    assert_eq!(options.kind(), SourceCodeKind::Script);
    assert_eq!(codes(options.errors()), ["CS8190"]);

    let tree = tree_with("x();\n", &options);
    assert_eq!(top_level(&tree), [K::GlobalStatement]);
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn preview_features_follow_flags_and_version() {
    let text = "partial public class C { }";
    assert_eq!(codes(&tree(text).diagnostics()), ["CS8652"]);

    let flagged = ParseOptions::default().with_features([("relaxed-partial-ordering", "true")]);
    assert!(tree_with(text, &flagged).diagnostics().is_empty());

    let disabled = ParseOptions::default().with_features([("relaxed-partial-ordering", "false")]);
    assert_eq!(codes(&tree_with(text, &disabled).diagnostics()), ["CS8652"]);

    let preview = version(LanguageVersion::Preview);
    assert!(tree_with(text, &preview).diagnostics().is_empty());
}

#[test]
fn each_gated_use_is_reported() {
    let parsed = expr_with("a ??= b ??= c", &version(LanguageVersion::CSharp7_3));
    assert_eq!(codes(&parsed.diagnostics()), ["CS8773", "CS8773"]);
}
