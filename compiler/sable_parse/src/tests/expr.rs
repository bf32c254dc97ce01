use pretty_assertions::assert_eq;

use sable_ir::SyntaxKind as K;

use super::{child_kinds, codes, count, expr, first, has};

#[test]
fn multiplication_binds_tighter_than_addition() {
    let parsed = expr("a + b * c");
    let node = parsed.node();
    assert_eq!(node.kind(), K::AddExpression);
    assert_eq!(
        child_kinds(node),
        [K::IdentifierName, K::MultiplyExpression]
    );
}

#[test]
fn subtraction_is_left_associative() {
    let parsed = expr("a - b - c");
    let node = parsed.node();
    assert_eq!(node.kind(), K::SubtractExpression);
    assert_eq!(child_kinds(node), [K::SubtractExpression, K::IdentifierName]);
}

#[test]
fn assignment_and_coalescing_are_right_associative() {
    let parsed = expr("a = b = c");
    assert_eq!(
        child_kinds(parsed.node()),
        [K::IdentifierName, K::SimpleAssignmentExpression]
    );

    let parsed = expr("a ?? b ?? c");
    assert_eq!(parsed.node().kind(), K::CoalesceExpression);
    assert_eq!(
        child_kinds(parsed.node()),
        [K::IdentifierName, K::CoalesceExpression]
    );
}

#[test]
fn logical_operators_follow_precedence() {
    let parsed = expr("a || b && c");
    assert_eq!(parsed.node().kind(), K::LogicalOrExpression);
    assert_eq!(
        child_kinds(parsed.node()),
        [K::IdentifierName, K::LogicalAndExpression]
    );

    let parsed = expr("a == b | c");
    assert_eq!(parsed.node().kind(), K::BitwiseOrExpression);
    assert_eq!(
        child_kinds(parsed.node()),
        [K::EqualsExpression, K::IdentifierName]
    );
}

#[test]
fn conditional_expression() {
    let parsed = expr("x > 0 ? a : b");
    let node = parsed.node();
    assert_eq!(node.kind(), K::ConditionalExpression);
    assert_eq!(
        child_kinds(node),
        [K::GreaterThanExpression, K::IdentifierName, K::IdentifierName]
    );
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn shift_operators_join_adjacent_greater_than() {
    assert_eq!(expr("a >> b").node().kind(), K::RightShiftExpression);
    assert_eq!(expr("a >>> b").node().kind(), K::UnsignedRightShiftExpression);
    assert_eq!(expr("a >>= 1").node().kind(), K::RightShiftAssignmentExpression);
    assert_eq!(expr("a << 2").node().kind(), K::LeftShiftExpression);
}

#[test]
fn prefix_and_postfix_operators() {
    let parsed = expr("-a.b");
    assert_eq!(parsed.node().kind(), K::UnaryMinusExpression);
    assert_eq!(child_kinds(parsed.node()), [K::SimpleMemberAccessExpression]);

    assert_eq!(expr("i++").node().kind(), K::PostIncrementExpression);
    assert_eq!(expr("--i").node().kind(), K::PreDecrementExpression);
    assert_eq!(expr("x!").node().kind(), K::SuppressNullableWarningExpression);
    assert_eq!(expr("!x").node().kind(), K::LogicalNotExpression);
}

#[test]
fn postfix_chain() {
    let parsed = expr("f(a)[0]?.b");
    let node = parsed.node();
    assert_eq!(node.kind(), K::ConditionalAccessExpression);
    assert_eq!(
        child_kinds(node),
        [K::ElementAccessExpression, K::MemberBindingExpression]
    );
    assert!(has(node, K::InvocationExpression));
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn conditional_over_collections_is_not_element_binding() {
    let parsed = expr("c ? [1] : [2]");
    let node = parsed.node();
    assert_eq!(node.kind(), K::ConditionalExpression);
    assert_eq!(count(node, K::CollectionExpression), 2);
    assert!(!has(node, K::ElementBindingExpression));
}

#[test]
fn generic_invocation_versus_comparison() {
    let parsed = expr("f<int>(x)");
    assert_eq!(parsed.node().kind(), K::InvocationExpression);
    assert!(has(parsed.node(), K::GenericName));

    let parsed = expr("a < b");
    assert_eq!(parsed.node().kind(), K::LessThanExpression);
}

#[test]
fn lambdas() {
    let parsed = expr("x => x + 1");
    assert_eq!(parsed.node().kind(), K::SimpleLambdaExpression);
    assert_eq!(child_kinds(parsed.node()), [K::Parameter, K::AddExpression]);

    let parsed = expr("(a, b) => a");
    assert_eq!(parsed.node().kind(), K::ParenthesizedLambdaExpression);
    assert_eq!(count(parsed.node(), K::Parameter), 2);

    let parsed = expr("() => { }");
    assert_eq!(parsed.node().kind(), K::ParenthesizedLambdaExpression);
    assert!(has(parsed.node(), K::Block));
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn await_only_inside_async_functions() {
    let parsed = expr("async () => await x");
    assert!(has(parsed.node(), K::AwaitExpression));

    let parsed = expr("() => await x");
    assert!(!has(parsed.node(), K::AwaitExpression));
}

#[test]
fn parenthesized_forms() {
    let parsed = expr("(int)x");
    assert_eq!(parsed.node().kind(), K::CastExpression);
    assert_eq!(child_kinds(parsed.node()), [K::PredefinedType, K::IdentifierName]);

    assert_eq!(expr("(a + b)").node().kind(), K::ParenthesizedExpression);
    assert_eq!(expr("(x)-1").node().kind(), K::SubtractExpression);

    let parsed = expr("(a, b)");
    assert_eq!(parsed.node().kind(), K::TupleExpression);
    assert_eq!(child_kinds(parsed.node()), [K::Argument, K::Argument]);
}

#[test]
fn object_creation_forms() {
    let parsed = expr("new Foo(1) { A = 2 }");
    assert_eq!(parsed.node().kind(), K::ObjectCreationExpression);
    assert!(has(parsed.node(), K::ObjectInitializerExpression));

    let parsed = expr("new List<int> { 1, 2 }");
    assert!(has(parsed.node(), K::CollectionInitializerExpression));

    assert_eq!(expr("new { A = 1 }").node().kind(), K::AnonymousObjectCreationExpression);
    assert_eq!(expr("new()").node().kind(), K::ImplicitObjectCreationExpression);
    assert!(expr("new Foo()").diagnostics().is_empty());
}

#[test]
fn array_creation_forms() {
    let parsed = expr("new int[3]");
    assert_eq!(parsed.node().kind(), K::ArrayCreationExpression);
    assert!(parsed.diagnostics().is_empty());

    let parsed = expr("new[] { 1, 2 }");
    assert_eq!(parsed.node().kind(), K::ImplicitArrayCreationExpression);
    assert!(has(parsed.node(), K::ArrayInitializerExpression));

    let parsed = expr("new int[]");
    assert_eq!(codes(&parsed.diagnostics()), ["CS1586"]);
}

#[test]
fn bare_new_synthesises_name_and_arguments() {
    let parsed = expr("new");
    assert_eq!(codes(&parsed.diagnostics()), ["CS1526"]);
    assert_eq!(
        parsed.node().debug_tree(),
        "ObjectCreationExpression\n\
         \x20 NewKeyword\n\
         \x20 IdentifierName\n\
         \x20   IdentifierToken <missing>\n\
         \x20 ArgumentList\n\
         \x20   OpenParenToken <missing>\n\
         \x20   CloseParenToken <missing>\n"
    );
}

#[test]
fn type_tests() {
    assert_eq!(expr("a is int").node().kind(), K::IsExpression);
    assert_eq!(expr("a as string").node().kind(), K::AsExpression);

    let parsed = expr("a is int x");
    assert_eq!(parsed.node().kind(), K::IsPatternExpression);
    assert!(has(parsed.node(), K::DeclarationPattern));
}

#[test]
fn switch_expression() {
    let parsed = expr(r#"x switch { 1 => "one", _ => "many" }"#);
    let node = parsed.node();
    assert_eq!(node.kind(), K::SwitchExpression);
    assert_eq!(count(node, K::SwitchExpressionArm), 2);
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn ranges_and_indices() {
    let parsed = expr("1..^1");
    assert_eq!(parsed.node().kind(), K::RangeExpression);
    assert_eq!(
        child_kinds(parsed.node()),
        [K::NumericLiteralExpression, K::IndexExpression]
    );

    let parsed = expr("..");
    assert_eq!(parsed.node().kind(), K::RangeExpression);
    assert!(child_kinds(parsed.node()).is_empty());
}

#[test]
fn throw_expression_on_the_right_of_coalesce() {
    let parsed = expr("a ?? throw e");
    assert_eq!(
        child_kinds(parsed.node()),
        [K::IdentifierName, K::ThrowExpression]
    );
}

#[test]
fn with_expression() {
    let parsed = expr("p with { X = 1 }");
    assert_eq!(parsed.node().kind(), K::WithExpression);
    assert!(has(parsed.node(), K::WithInitializerExpression));
}

#[test]
fn literals_and_keywords() {
    assert_eq!(expr("42").node().kind(), K::NumericLiteralExpression);
    assert_eq!(expr("\"s\"").node().kind(), K::StringLiteralExpression);
    assert_eq!(expr("'c'").node().kind(), K::CharacterLiteralExpression);
    assert_eq!(expr("null").node().kind(), K::NullLiteralExpression);
    assert_eq!(expr("default").node().kind(), K::DefaultLiteralExpression);
    assert_eq!(expr("typeof(List<int>)").node().kind(), K::TypeOfExpression);
    assert_eq!(expr("$\"x{y}\"").node().kind(), K::InterpolatedStringExpression);
}

#[test]
fn collection_expression_with_spread() {
    let parsed = expr("[1, ..xs]");
    let node = parsed.node();
    assert_eq!(node.kind(), K::CollectionExpression);
    assert_eq!(child_kinds(node), [K::ExpressionElement, K::SpreadElement]);
}

#[test]
fn query_expression() {
    let parsed = expr("from x in xs where x > 0 orderby x select x * 2");
    let node = parsed.node();
    assert_eq!(node.kind(), K::QueryExpression);
    assert!(has(node, K::FromClause));
    assert!(has(node, K::WhereClause));
    assert!(has(node, K::OrderByClause));
    assert!(has(node, K::SelectClause));
    assert!(parsed.diagnostics().is_empty());
}

#[test]
fn missing_operand_at_end_of_input() {
    let parsed = expr("a +");
    let node = parsed.node();
    assert_eq!(node.kind(), K::AddExpression);
    assert_eq!(first(node, K::IdentifierName).full_text(), "a ");
    assert_eq!(codes(&parsed.diagnostics()), ["CS1733"]);
}
