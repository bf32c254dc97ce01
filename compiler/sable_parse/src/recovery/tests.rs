use super::*;

#[test]
fn test_token_set_empty() {
    let set = TokenSet::new();
    assert!(!set.contains(SyntaxKind::SemicolonToken));
    assert!(!set.contains(SyntaxKind::EndOfFileToken));
}

#[test]
fn test_token_set_with() {
    let set = TokenSet::new()
        .with(SyntaxKind::SemicolonToken)
        .with(SyntaxKind::CloseBraceToken)
        .with(SyntaxKind::EndOfFileToken);

    assert!(set.contains(SyntaxKind::SemicolonToken));
    assert!(set.contains(SyntaxKind::CloseBraceToken));
    assert!(set.contains(SyntaxKind::EndOfFileToken));
    assert!(!set.contains(SyntaxKind::CloseParenToken));
}

#[test]
fn test_token_set_spans_words() {
    // Kinds spread across the words of the bitset.
    let kinds = [
        SyntaxKind::TildeToken,
        SyntaxKind::ObjectKeyword,
        SyntaxKind::ImplicitKeyword,
        SyntaxKind::EndOfFileToken,
    ];
    let set = TokenSet::of(&kinds);
    for kind in kinds {
        assert!(set.contains(kind), "{kind:?} missing");
    }
    assert!(!set.contains(SyntaxKind::ExclamationToken));
}

#[test]
fn test_token_set_union() {
    let a = TokenSet::of(&[SyntaxKind::CommaToken, SyntaxKind::ColonToken]);
    let b = TokenSet::of(&[SyntaxKind::ColonToken, SyntaxKind::DotToken]);
    let union = a.union(b);
    assert!(union.contains(SyntaxKind::CommaToken));
    assert!(union.contains(SyntaxKind::ColonToken));
    assert!(union.contains(SyntaxKind::DotToken));
    assert!(!union.contains(SyntaxKind::SemicolonToken));
}

#[test]
fn test_token_set_ignores_node_kinds() {
    let set = TokenSet::new().with(SyntaxKind::Block);
    assert_eq!(set, TokenSet::new());
    assert!(!set.contains(SyntaxKind::Block));
}

#[test]
fn test_predefined_sets() {
    assert!(PREDEFINED_TYPES.contains(SyntaxKind::IntKeyword));
    assert!(!PREDEFINED_TYPES.contains(SyntaxKind::VarKeyword));
    assert!(EXPRESSION_START.contains(SyntaxKind::StringLiteralToken));
    assert!(EXPRESSION_START.contains(SyntaxKind::IntKeyword));
    assert!(STATEMENT_START.contains(SyntaxKind::IfKeyword));
    assert!(STATEMENT_START.contains(SyntaxKind::IdentifierToken));
    assert!(!STATEMENT_START.contains(SyntaxKind::ElseKeyword));
    assert!(MEMBER_START.contains(SyntaxKind::PublicKeyword));
    assert!(MEMBER_START.contains(SyntaxKind::ClassKeyword));
    assert!(!MEMBER_START.contains(SyntaxKind::ReturnKeyword));
}

#[test]
fn test_recovery_action_bails_on_terminators() {
    let resumes = TokenSet::of(&[SyntaxKind::IdentifierToken]);
    let terminators = TokenSet::of(&[SyntaxKind::CloseParenToken]);
    assert_eq!(
        recovery_action(SyntaxKind::CloseParenToken, resumes, terminators),
        RecoveryAction::Bail
    );
    assert_eq!(
        recovery_action(SyntaxKind::EndOfFileToken, resumes, terminators),
        RecoveryAction::Bail
    );
}

#[test]
fn test_recovery_action_synthesizes_before_resuming_token() {
    let resumes = TokenSet::of(&[SyntaxKind::IdentifierToken]);
    let terminators = TokenSet::of(&[SyntaxKind::CloseParenToken]);
    assert_eq!(
        recovery_action(SyntaxKind::IdentifierToken, resumes, terminators),
        RecoveryAction::Synthesize
    );
}

#[test]
fn test_recovery_action_skips_noise() {
    let resumes = TokenSet::of(&[SyntaxKind::IdentifierToken]);
    let terminators = TokenSet::of(&[SyntaxKind::CloseParenToken]);
    assert_eq!(
        recovery_action(SyntaxKind::HashToken, resumes, terminators),
        RecoveryAction::Skip
    );
}

#[test]
fn test_recovery_state() {
    assert_eq!(RecoveryState::default(), RecoveryState::Matching);
    assert!(!RecoveryState::Matching.is_recovering());
    assert!(!RecoveryState::Skipping.is_recovering());
    assert!(RecoveryState::Synthesizing.is_recovering());
    assert!(RecoveryState::Recovered.is_recovering());
}
