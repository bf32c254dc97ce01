use pretty_assertions::assert_eq;

use sable_ir::SyntaxKind as K;

use super::{codes, count, expr, first, has, stmt, top_level, tree};

#[test]
fn missing_semicolon_is_synthesised() {
    let parsed = stmt("x = 1");
    let node = parsed.node();
    assert_eq!(node.kind(), K::ExpressionStatement);
    let last = node.last_token().unwrap();
    assert_eq!(last.kind, K::SemicolonToken);
    assert!(last.is_missing());
    assert_eq!(codes(&parsed.diagnostics()), ["CS1002"]);
}

#[test]
fn missing_semicolon_inside_a_method() {
    let tree = tree("class C { void M() { int x = 1 } }");
    assert_eq!(codes(&tree.diagnostics()), ["CS1002"]);
    assert!(has(tree.root(), K::LocalDeclarationStatement));
}

#[test]
fn missing_close_paren_in_call() {
    let parsed = stmt("Foo(1;");
    assert_eq!(codes(&parsed.diagnostics()), ["CS1026"]);
    assert!(has(parsed.node(), K::InvocationExpression));
}

#[test]
fn unterminated_bodies_report_once() {
    let tree = tree("class C { void M() { ");
    assert_eq!(codes(&tree.diagnostics()), ["CS1513"]);
    assert!(has(tree.root(), K::MethodDeclaration));
}

#[test]
fn stray_token_in_block_is_skipped() {
    let tree = tree("class C { void M() { ) x(); } }");
    assert_eq!(codes(&tree.diagnostics()), ["CS1073"]);
    let block = first(tree.root(), K::Block);
    let skipped = first(block, K::SkippedTokens);
    assert_eq!(skipped.full_text(), ") ");
    assert!(has(block, K::ExpressionStatement));
}

#[test]
fn garbage_in_class_body_is_skipped() {
    let tree = tree("class C { 123 void M() { } }");
    assert_eq!(codes(&tree.diagnostics()), ["CS1519"]);
    let class = first(tree.root(), K::ClassDeclaration);
    assert!(class.child_node(K::SkippedTokens).is_some());
    assert!(class.child_node(K::MethodDeclaration).is_some());
}

#[test]
fn modifiers_without_a_member() {
    let tree = tree("class C { public }");
    assert_eq!(codes(&tree.diagnostics()), ["CS1519"]);
    let incomplete = first(tree.root(), K::IncompleteMember);
    assert_eq!(incomplete.full_text(), "public ");
}

#[test]
fn stray_close_brace_at_top_level() {
    let tree = tree("} class C { }");
    assert_eq!(codes(&tree.diagnostics()), ["CS1022"]);
    assert_eq!(top_level(&tree), [K::SkippedTokens, K::ClassDeclaration]);
}

#[test]
fn diagnostics_settle_on_the_narrowest_node() {
    let tree = tree("class C { void M() { int x = 1 } }");
    let statement = first(tree.root(), K::LocalDeclarationStatement);
    assert_eq!(codes(statement.diagnostics()), ["CS1002"]);
    assert!(tree.root().diagnostics().is_empty());
}

const DEEP: usize = 10_000;

#[test]
fn deep_parentheses_do_not_overflow() {
    let nested = format!("{}a{}", "(".repeat(DEEP), ")".repeat(DEEP));
    let parsed = expr(&nested);
    assert_eq!(parsed.node().kind(), K::ParenthesizedExpression);
    assert!(parsed.diagnostics().is_empty());

    let tree = tree(&format!("class C {{ int f = {nested}; }}"));
    assert!(tree.diagnostics().is_empty());
    assert_eq!(count(tree.root(), K::ParenthesizedExpression), DEEP);
}

#[test]
fn deep_member_chains_do_not_overflow() {
    let chain = format!("a{}", ".b".repeat(DEEP));
    let parsed = expr(&chain);
    assert_eq!(parsed.node().kind(), K::SimpleMemberAccessExpression);
    assert!(parsed.diagnostics().is_empty());

    let parsed = stmt(&format!("x = {chain};"));
    assert_eq!(count(parsed.node(), K::SimpleMemberAccessExpression), DEEP);

    let tree = tree(&format!("class C {{ int f = {chain}; }}"));
    assert!(tree.diagnostics().is_empty());
    assert_eq!(count(tree.root(), K::SimpleMemberAccessExpression), DEEP);
}

#[test]
fn deep_conditional_access_chains_do_not_overflow() {
    let chain = format!("a{}", "?.b".repeat(DEEP));
    let parsed = expr(&chain);
    assert_eq!(parsed.node().kind(), K::ConditionalAccessExpression);
    assert!(parsed.diagnostics().is_empty());
    assert_eq!(count(parsed.node(), K::ConditionalAccessExpression), DEEP);
}

#[test]
fn deep_binary_chains_do_not_overflow() {
    let chain = format!("a{}", " + b".repeat(DEEP));
    let parsed = expr(&chain);
    assert_eq!(parsed.node().kind(), K::AddExpression);
    assert!(parsed.diagnostics().is_empty());

    let tree = tree(&format!("class C {{ void M() {{ x = {chain}; }} }}"));
    assert!(tree.diagnostics().is_empty());
    assert_eq!(count(tree.root(), K::AddExpression), DEEP);
}

#[test]
fn deep_prefix_operators_keep_trailing_trivia() {
    // The second newline is end-of-file trivia, appended down the operand
    // spine.
    let text = format!("{}a\n\n", "!".repeat(DEEP));
    let parsed = expr(&text);
    assert_eq!(parsed.node().kind(), K::LogicalNotExpression);
    assert!(parsed.node().full_text().ends_with("a\n\n"));
}

#[test]
fn lexical_diagnostics_come_first_at_a_shared_position() {
    let text = "class C { void M() { x = @; } }";
    let at = u32::try_from(text.find('@').unwrap()).unwrap();
    let diagnostics = tree(text).diagnostics();
    assert!(diagnostics.windows(2).all(|w| w[0].span.start <= w[1].span.start));
    let tied: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.span.start == at)
        .map(|d| d.code.as_str())
        .collect();
    assert!(tied.len() > 1, "{tied:?}");
    assert_eq!(tied[0], "CS1056");

    let parsed = stmt("x = @;");
    let tied: Vec<_> = parsed
        .diagnostics()
        .iter()
        .filter(|d| d.span.start == 4)
        .map(|d| d.code.as_str())
        .collect();
    assert_eq!(tied.first(), Some(&"CS1056"));
}

#[test]
fn unclosed_nesting_round_trips() {
    let text = format!("class C {{ void M() {{ {} }} }}", "if (a) { ".repeat(40));
    let tree = tree(&text);
    assert!(tree.has_errors());
}
