use pretty_assertions::assert_eq;

use sable_ir::SyntaxKind as K;

use super::{child_kinds, codes, count, expr, first, has, tree};

#[test]
fn negated_constant() {
    let parsed = expr("x is not null");
    let node = parsed.node();
    assert_eq!(node.kind(), K::IsPatternExpression);
    let not = first(node, K::NotPattern);
    assert_eq!(child_kinds(not), [K::ConstantPattern]);
}

#[test]
fn relational_conjunction() {
    let parsed = expr("x is > 0 and < 10");
    let and = first(parsed.node(), K::AndPattern);
    assert_eq!(
        child_kinds(and),
        [K::RelationalPattern, K::RelationalPattern]
    );
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn type_disjunction() {
    let parsed = expr("x is int or string");
    let or = first(parsed.node(), K::OrPattern);
    assert_eq!(child_kinds(or), [K::TypePattern, K::TypePattern]);
}

#[test]
fn declaration_and_var_patterns() {
    let parsed = expr("o is string s");
    let declaration = first(parsed.node(), K::DeclarationPattern);
    assert_eq!(
        child_kinds(declaration),
        [K::PredefinedType, K::SingleVariableDesignation]
    );

    let parsed = expr("t is var (a, b)");
    let var = first(parsed.node(), K::VarPattern);
    assert_eq!(child_kinds(var), [K::ParenthesizedVariableDesignation]);
}

#[test]
fn property_pattern() {
    let parsed = expr("p is { X: 1, Y: > 2 }");
    let node = parsed.node();
    let recursive = first(node, K::RecursivePattern);
    assert!(recursive.child_node(K::PropertyPatternClause).is_some());
    assert_eq!(count(node, K::Subpattern), 2);
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn positional_pattern_with_type() {
    let parsed = expr("p is Point(var x, _)");
    let node = parsed.node();
    let recursive = first(node, K::RecursivePattern);
    assert_eq!(
        child_kinds(recursive),
        [K::IdentifierName, K::PositionalPatternClause]
    );
    assert!(has(node, K::VarPattern));
    assert!(has(node, K::DiscardPattern));
}

#[test]
fn parenthesized_pattern() {
    let parsed = expr("x is (1 or 2)");
    let paren = first(parsed.node(), K::ParenthesizedPattern);
    assert_eq!(child_kinds(paren), [K::OrPattern]);
    assert_eq!(paren.full_text(), "(1 or 2)");
}

#[test]
fn parenthesized_case_pattern_keeps_its_contents() {
    let text = "class C { int M(int x) { switch (x) { case (> 1 and < 5): return 1; default: return 0; } } }";
    let tree = tree(text);
    assert!(tree.diagnostics().is_empty());
    let label = first(tree.root(), K::CasePatternSwitchLabel);
    let paren = first(label, K::ParenthesizedPattern);
    assert_eq!(paren.full_text(), "(> 1 and < 5)");
    assert_eq!(child_kinds(paren), [K::AndPattern]);
    assert_eq!(count(paren, K::RelationalPattern), 2);
}

#[test]
fn list_pattern_with_slice() {
    let parsed = expr("xs is [1, .., var last]");
    let list = first(parsed.node(), K::ListPattern);
    assert_eq!(
        child_kinds(list),
        [K::ConstantPattern, K::SlicePattern, K::VarPattern]
    );
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn four_dots_nest_slices() {
    let parsed = expr("c is ....");
    let node = parsed.node();
    assert_eq!(count(node, K::SlicePattern), 2);
    let outer = first(node, K::SlicePattern);
    assert_eq!(child_kinds(outer), [K::SlicePattern]);
    assert_eq!(codes(&parsed.diagnostics()), ["CS8635"]);
}
