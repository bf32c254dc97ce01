#![allow(clippy::unwrap_used, clippy::expect_used)]

mod decl;
mod expr;
mod gating;
mod pattern;
mod properties;
mod recovery;

use pretty_assertions::assert_eq;

use sable_diagnostic::Diagnostic;
use sable_ir::SyntaxKind;
use sable_options::ParseOptions;
use sable_syntax::SyntaxNode;

use crate::{
    parse_expression, parse_member_declaration, parse_statement, parse_syntax_tree, ParsedNode,
    SyntaxTree,
};

/// Parse a compilation unit with default options and check the round trip.
fn tree(text: &str) -> SyntaxTree {
    tree_with(text, &ParseOptions::default())
}

fn tree_with(text: &str, options: &ParseOptions) -> SyntaxTree {
    let tree = parse_syntax_tree(text, options);
    assert_eq!(tree.root().full_text(), text, "round trip");
    tree
}

fn checked(parsed: ParsedNode, text: &str) -> ParsedNode {
    assert_eq!(parsed.node().full_text(), text, "round trip");
    parsed
}

fn expr(text: &str) -> ParsedNode {
    checked(parse_expression(text, 0, &ParseOptions::default(), true), text)
}

fn expr_with(text: &str, options: &ParseOptions) -> ParsedNode {
    checked(parse_expression(text, 0, options, true), text)
}

fn stmt(text: &str) -> ParsedNode {
    checked(parse_statement(text, 0, &ParseOptions::default(), true), text)
}

fn member(text: &str) -> ParsedNode {
    checked(
        parse_member_declaration(text, 0, &ParseOptions::default(), true),
        text,
    )
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<&'static str> {
    diagnostics.iter().map(|d| d.code.as_str()).collect()
}

fn has(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.descendants().any(|n| n.kind() == kind)
}

fn count(node: &SyntaxNode, kind: SyntaxKind) -> usize {
    node.descendants().filter(|n| n.kind() == kind).count()
}

fn first(node: &SyntaxNode, kind: SyntaxKind) -> &SyntaxNode {
    node.descendants()
        .find(|n| n.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in\n{}", node.debug_tree()))
}

/// Kinds of the direct child nodes.
fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.child_nodes().map(SyntaxNode::kind).collect()
}

/// Kinds of the members of the compilation unit.
fn top_level(tree: &SyntaxTree) -> Vec<SyntaxKind> {
    child_kinds(tree.root())
}

#[test]
fn empty_text_is_an_empty_unit() {
    let tree = tree("");
    assert_eq!(tree.root().kind(), SyntaxKind::CompilationUnit);
    assert!(tree.diagnostics().is_empty());
    assert!(!tree.has_errors());
}

#[test]
fn trivia_only_text_round_trips() {
    let tree = tree("  // nothing here\n/* or here */\n");
    assert!(top_level(&tree).is_empty());
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn fragment_offset_starts_mid_text() {
    let text = "ignored; a + b";
    let parsed = parse_expression(text, 9, &ParseOptions::default(), true);
    assert_eq!(parsed.node().kind(), SyntaxKind::AddExpression);
    assert_eq!(parsed.node().full_text(), "a + b");
    assert_eq!(parsed.end() as usize, text.len());
}

#[test]
fn fragment_leftovers_are_skipped_when_consuming() {
    let parsed = expr("a b c  ");
    let node = parsed.node();
    assert_eq!(node.kind(), SyntaxKind::IdentifierName);
    assert!(has(node, SyntaxKind::SkippedTokens));
    assert_eq!(codes(&parsed.diagnostics()), ["CS1073"]);
}

#[test]
fn fragment_without_consuming_stops_at_the_node() {
    let parsed = parse_expression("a; b", 0, &ParseOptions::default(), false);
    assert_eq!(parsed.node().full_text(), "a");
    assert_eq!(parsed.end(), 1);
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn diagnostics_are_ordered_by_position() {
    let tree = tree("class C { void M() { int x = ; foo( } }");
    let diagnostics = tree.diagnostics();
    assert!(!diagnostics.is_empty());
    let starts: Vec<u32> = diagnostics.iter().map(|d| d.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}
