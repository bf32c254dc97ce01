use pretty_assertions::assert_eq;
use sable_diagnostic::ErrorCode;

use super::*;

fn token(kind: SyntaxKind, text: &str, at: u32) -> Token {
    Token::new(kind, text, at)
}

/// `a + b;` with a space after `a` and `+`.
fn sample() -> SyntaxNode {
    let mut a = token(SyntaxKind::IdentifierToken, "a", 0);
    a.trailing.push(Trivia::new(SyntaxKind::WhitespaceTrivia, " "));
    let mut plus = token(SyntaxKind::PlusToken, "+", 2);
    plus.trailing.push(Trivia::new(SyntaxKind::WhitespaceTrivia, " "));
    let b = token(SyntaxKind::IdentifierToken, "b", 4);
    let semi = token(SyntaxKind::SemicolonToken, ";", 5);

    let left = SyntaxNode::new(SyntaxKind::IdentifierName, vec![a.into()], 0);
    let right = SyntaxNode::new(SyntaxKind::IdentifierName, vec![b.into()], 4);
    let add = SyntaxNode::new(
        SyntaxKind::AddExpression,
        vec![left.into(), plus.into(), right.into()],
        0,
    );
    SyntaxNode::new(
        SyntaxKind::ExpressionStatement,
        vec![add.into(), semi.into()],
        0,
    )
}

#[test]
fn test_full_text_and_widths() {
    let node = sample();
    assert_eq!(node.full_text(), "a + b;");
    assert_eq!(node.full_span(), Span::new(0, 6));
    assert_eq!(node.span(), Span::new(0, 6));
}

#[test]
fn test_tokens_in_source_order() {
    let node = sample();
    let texts: Vec<_> = node.tokens().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "+", "b", ";"]);
    assert_eq!(node.first_token().map(|t| t.kind), Some(SyntaxKind::IdentifierToken));
    assert_eq!(node.last_token().map(|t| t.kind), Some(SyntaxKind::SemicolonToken));
}

#[test]
fn test_descendants_pre_order() {
    let node = sample();
    let kinds: Vec<_> = node.descendants().map(SyntaxNode::kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ExpressionStatement,
            SyntaxKind::AddExpression,
            SyntaxKind::IdentifierName,
            SyntaxKind::IdentifierName,
        ]
    );
}

#[test]
fn test_empty_node_uses_position() {
    let node = SyntaxNode::new(SyntaxKind::ArgumentList, Vec::new(), 9);
    assert_eq!(node.full_span(), Span::point(9));
    assert!(node.is_missing());
    assert!(node.first_token().is_none());
}

#[test]
fn test_missing_children_make_missing_node() {
    let name = SyntaxNode::new(
        SyntaxKind::IdentifierName,
        vec![Token::missing(SyntaxKind::IdentifierToken, 3).into()],
        3,
    );
    assert!(name.is_missing());
    assert_eq!(name.full_text(), "");
    assert!(!sample().is_missing());
}

#[test]
fn test_with_trailing_trivia_rebuilds_right_spine() {
    let extended = sample().with_trailing_trivia([Trivia::new(SyntaxKind::EndOfLineTrivia, "\n")]);
    assert_eq!(extended.full_text(), "a + b;\n");
    assert_eq!(extended.full_width(), 7);
    let add = extended.child_node(SyntaxKind::AddExpression).map(SyntaxNode::full_width);
    assert_eq!(add, Some(5));
    assert_eq!(extended.last_token().map(Token::full_width), Some(2));
}

#[test]
fn test_trailing_trivia_skips_empty_trailing_nodes() {
    let mut children: Vec<SyntaxElement> = sample().into_children();
    children.push(SyntaxNode::new(SyntaxKind::ArgumentList, Vec::new(), 6).into());
    let node = SyntaxNode::new(SyntaxKind::Block, children, 0)
        .with_trailing_trivia([Trivia::new(SyntaxKind::WhitespaceTrivia, "  ")]);
    assert_eq!(node.full_text(), "a + b;  ");
    assert_eq!(node.full_width(), 8);
    assert_eq!(node.last_token().map(|t| t.kind), Some(SyntaxKind::SemicolonToken));
}

#[test]
fn test_with_appended_child() {
    let node = sample();
    let extra = SyntaxNode::new(
        SyntaxKind::SkippedTokens,
        vec![token(SyntaxKind::CloseParenToken, ")", 6).into()],
        6,
    );
    let appended = node.with_appended_child(extra);
    assert_eq!(appended.full_text(), "a + b;)");
    assert_eq!(appended.children().len(), 3);
}

#[test]
fn test_all_diagnostics_collects_tokens_and_nodes() {
    let mut bad = token(SyntaxKind::BadToken, "`", 0);
    bad.diagnostics
        .push(Diagnostic::new(ErrorCode::CS1056, Span::new(0, 1)).with_arg("`"));
    let node = SyntaxNode::new(SyntaxKind::SkippedTokens, vec![bad.into()], 0)
        .with_diagnostics(vec![Diagnostic::new(ErrorCode::CS1073, Span::new(0, 1))]);
    let codes: Vec<_> = node.all_diagnostics().iter().map(|d| d.code).collect();
    // Lexical diagnostics come first: the token was scanned before the
    // parser reported anything at its position.
    assert_eq!(codes, vec![ErrorCode::CS1056, ErrorCode::CS1073]);
    assert!(node.contains_diagnostics());
    assert!(!sample().contains_diagnostics());
}

#[test]
fn test_debug_tree() {
    let mut node = sample();
    node = node.with_appended_child(Token::missing(SyntaxKind::CloseBraceToken, 6));
    assert_eq!(
        node.debug_tree(),
        "\
ExpressionStatement
  AddExpression
    IdentifierName
      IdentifierToken \"a\"
    PlusToken
    IdentifierName
      IdentifierToken \"b\"
  SemicolonToken
  CloseBraceToken <missing>
"
    );
}

/// A left-deep chain `a.b.b...` the way the parser builds member access.
fn member_chain(depth: u32) -> SyntaxNode {
    let name = |at: u32| {
        SyntaxNode::new(
            SyntaxKind::IdentifierName,
            vec![token(SyntaxKind::IdentifierToken, if at == 0 { "a" } else { "b" }, at).into()],
            at,
        )
    };
    let mut node = name(0);
    for i in 0..depth {
        let dot = 1 + 2 * i;
        node = SyntaxNode::new(
            SyntaxKind::SimpleMemberAccessExpression,
            vec![
                node.into(),
                token(SyntaxKind::DotToken, ".", dot).into(),
                name(dot + 1).into(),
            ],
            0,
        );
    }
    node
}

#[test]
fn test_deep_trees_clone_compare_and_drop() {
    let depth = 50_000;
    let node = member_chain(depth);
    assert_eq!(node.full_width(), 1 + 2 * depth);
    assert_eq!(node.full_text().len(), (1 + 2 * depth) as usize);
    assert_eq!(node.descendants().count(), 1 + 2 * depth as usize);
    assert!(!node.contains_diagnostics());

    let copy = node.clone();
    assert!(copy == node);
    drop(copy);

    let extended = node.with_trailing_trivia([Trivia::new(SyntaxKind::EndOfLineTrivia, "\n")]);
    assert!(extended.full_text().ends_with("b\n"));
    assert_eq!(extended.full_width(), 2 + 2 * depth);
}

#[test]
fn test_deep_right_spine_gets_trailing_trivia() {
    // `!!!...!x`: every operand is the last child.
    let depth = 50_000;
    let mut node = SyntaxNode::new(
        SyntaxKind::IdentifierName,
        vec![token(SyntaxKind::IdentifierToken, "x", depth).into()],
        depth,
    );
    for i in (0..depth).rev() {
        node = SyntaxNode::new(
            SyntaxKind::LogicalNotExpression,
            vec![token(SyntaxKind::ExclamationToken, "!", i).into(), node.into()],
            i,
        );
    }
    let node = node.with_trailing_trivia([Trivia::new(SyntaxKind::WhitespaceTrivia, " ")]);
    assert_eq!(node.full_width(), depth + 2);
    assert_eq!(node.last_token().map(|t| t.text.as_str()), Some("x"));
    assert!(node.full_text().ends_with("!x "));
}
