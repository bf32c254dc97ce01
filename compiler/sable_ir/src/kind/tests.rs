use super::facts::{contextual_keywords, reserved_keywords};
use super::SyntaxKind;

#[test]
fn test_every_reserved_keyword_round_trips_through_lookup() {
    for &kind in reserved_keywords() {
        assert!(kind.is_reserved_keyword(), "{kind:?}");
        assert_eq!(SyntaxKind::keyword(kind.fixed_text()), Some(kind));
        assert_eq!(SyntaxKind::contextual_keyword(kind.fixed_text()), None);
    }
}

#[test]
fn test_every_contextual_keyword_round_trips_through_lookup() {
    for &kind in contextual_keywords() {
        assert!(kind.is_contextual_keyword() || kind == SyntaxKind::UnderscoreToken);
        assert_eq!(SyntaxKind::contextual_keyword(kind.fixed_text()), Some(kind));
        assert_eq!(SyntaxKind::keyword(kind.fixed_text()), None);
    }
}

#[test]
fn test_keyword_tables_cover_their_ranges() {
    let reserved = (SyntaxKind::ImplicitKeyword as usize) - (SyntaxKind::BoolKeyword as usize) + 1;
    assert_eq!(reserved_keywords().len(), reserved);
    let contextual =
        (SyntaxKind::UnderscoreToken as usize) - (SyntaxKind::YieldKeyword as usize) + 1;
    assert_eq!(contextual_keywords().len(), contextual);
}

#[test]
fn test_category_ranges_are_disjoint() {
    assert!(SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken.is_token());
    assert!(SyntaxKind::EndOfFileToken.is_token());
    assert!(!SyntaxKind::EndOfFileToken.is_trivia());
    assert!(SyntaxKind::WhitespaceTrivia.is_trivia());
    assert!(!SyntaxKind::WhitespaceTrivia.is_node());
    assert!(SyntaxKind::IdentifierName.is_node());
    assert!(SyntaxKind::SkippedTokens.is_node());
    assert!(!SyntaxKind::None.is_token());
}

#[test]
fn test_predefined_types() {
    assert!(SyntaxKind::IntKeyword.is_predefined_type());
    assert!(SyntaxKind::ObjectKeyword.is_predefined_type());
    assert!(SyntaxKind::VoidKeyword.is_predefined_type());
    assert!(!SyntaxKind::TypeOfKeyword.is_predefined_type());
    assert!(!SyntaxKind::VarKeyword.is_predefined_type());
}

#[test]
fn test_fixed_text_of_punctuation() {
    assert_eq!(SyntaxKind::DotDotToken.fixed_text(), "..");
    assert_eq!(SyntaxKind::QuestionQuestionEqualsToken.fixed_text(), "??=");
    assert_eq!(
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken.fixed_text(),
        ">>>="
    );
    assert_eq!(SyntaxKind::IdentifierToken.fixed_text(), "");
}

#[test]
fn test_directive_and_comment_classification() {
    assert!(SyntaxKind::IfDirectiveTrivia.is_directive());
    assert!(SyntaxKind::BadDirectiveTrivia.is_directive());
    assert!(!SyntaxKind::DisabledTextTrivia.is_directive());
    assert!(SyntaxKind::SingleLineDocumentationCommentTrivia.is_comment());
    assert!(!SyntaxKind::EndOfLineTrivia.is_comment());
}
