use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sable_diagnostic::ErrorCode;
use sable_ir::SyntaxKind;
use sable_options::{DocumentationMode, ParseOptions};
use sable_syntax::{Token, TokenFlags};

use super::*;

fn lex_default(text: &str) -> Vec<Token> {
    lex(text, &ParseOptions::default())
}

fn kinds(text: &str) -> Vec<SyntaxKind> {
    lex_default(text).iter().map(|t| t.kind).collect()
}

fn codes(text: &str) -> Vec<ErrorCode> {
    lex_default(text)
        .iter()
        .flat_map(|t| t.diagnostics.iter().map(|d| d.code))
        .collect()
}

fn trivia_kinds(list: &[sable_syntax::Trivia]) -> Vec<SyntaxKind> {
    list.iter().map(|t| t.kind).collect()
}

fn rebuild(tokens: &[Token]) -> String {
    tokens.iter().map(Token::full_text).collect()
}

#[test]
fn test_empty_input_is_single_eof() {
    let tokens = lex_default("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, SyntaxKind::EndOfFileToken);
    assert_eq!(tokens[0].full_start, 0);
}

#[test]
fn test_trailing_trivia_ends_at_line_break() {
    let tokens = lex_default("  a // c\n b");
    assert_eq!(trivia_kinds(&tokens[0].leading), vec![SyntaxKind::WhitespaceTrivia]);
    assert_eq!(
        trivia_kinds(&tokens[0].trailing),
        vec![
            SyntaxKind::WhitespaceTrivia,
            SyntaxKind::SingleLineCommentTrivia,
            SyntaxKind::EndOfLineTrivia,
        ]
    );
    assert_eq!(trivia_kinds(&tokens[1].leading), vec![SyntaxKind::WhitespaceTrivia]);
    assert!(tokens[1].trailing.is_empty());
    assert_eq!(tokens[1].full_start, 9);
}

#[test]
fn test_keywords_and_identifiers() {
    let tokens = lex_default("class var @class _");
    let found: Vec<_> = tokens.iter().map(|t| (t.kind, t.contextual_kind)).collect();
    assert_eq!(
        found,
        vec![
            (SyntaxKind::ClassKeyword, SyntaxKind::None),
            (SyntaxKind::IdentifierToken, SyntaxKind::VarKeyword),
            (SyntaxKind::IdentifierToken, SyntaxKind::None),
            (SyntaxKind::IdentifierToken, SyntaxKind::UnderscoreToken),
            (SyntaxKind::EndOfFileToken, SyntaxKind::None),
        ]
    );
    assert!(tokens[2].flags.contains(TokenFlags::VERBATIM));
    assert_eq!(tokens[2].value.as_deref(), Some("class"));
}

#[test]
fn test_greater_than_is_never_combined() {
    assert_eq!(
        kinds("x >>= 1"),
        vec![
            SyntaxKind::IdentifierToken,
            SyntaxKind::GreaterThanToken,
            SyntaxKind::GreaterThanEqualsToken,
            SyntaxKind::NumericLiteralToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
    assert_eq!(
        kinds("a ??= b?.c"),
        vec![
            SyntaxKind::IdentifierToken,
            SyntaxKind::QuestionQuestionEqualsToken,
            SyntaxKind::IdentifierToken,
            SyntaxKind::QuestionToken,
            SyntaxKind::DotToken,
            SyntaxKind::IdentifierToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("1..2"),
        vec![
            SyntaxKind::NumericLiteralToken,
            SyntaxKind::DotDotToken,
            SyntaxKind::NumericLiteralToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
    let all_numbers = lex_default("0x1F 0b1010 1_000 1.5e3f 10UL .5m");
    assert!(all_numbers[..6]
        .iter()
        .all(|t| t.kind == SyntaxKind::NumericLiteralToken && t.diagnostics.is_empty()));
    assert_eq!(codes("0x"), vec![ErrorCode::CS1013]);
}

#[test]
fn test_triple_dot_reports_once() {
    assert_eq!(
        kinds("...."),
        vec![
            SyntaxKind::DotDotToken,
            SyntaxKind::DotDotToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
    assert_eq!(codes("...."), vec![ErrorCode::CS8635]);
    assert_eq!(
        kinds("..."),
        vec![
            SyntaxKind::DotDotToken,
            SyntaxKind::DotToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
}

#[test]
fn test_string_literals() {
    let tokens = lex_default(r#""a\tb" @"x""y" "z"u8"#);
    assert_eq!(tokens[0].kind, SyntaxKind::StringLiteralToken);
    assert_eq!(tokens[0].value.as_deref(), Some("a\tb"));
    assert_eq!(tokens[1].value.as_deref(), Some("x\"y"));
    assert_eq!(tokens[2].kind, SyntaxKind::Utf8StringLiteralToken);
    assert_eq!(codes("\"abc\nx"), vec![ErrorCode::CS1010]);
    assert_eq!(codes(r#""\q""#), vec![ErrorCode::CS1009]);
}

#[test]
fn test_interpolated_string_is_one_token() {
    assert_eq!(
        kinds(r#"$"a{b}c{"}"}" + 1"#),
        vec![
            SyntaxKind::InterpolatedStringToken,
            SyntaxKind::PlusToken,
            SyntaxKind::NumericLiteralToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
    assert_eq!(
        kinds("$@\"{{a}}\n{x}\""),
        vec![SyntaxKind::InterpolatedStringToken, SyntaxKind::EndOfFileToken]
    );
}

#[test]
fn test_character_literals() {
    let tokens = lex_default(r"'a' '\n'");
    assert_eq!(tokens[0].value.as_deref(), Some("a"));
    assert_eq!(tokens[1].value.as_deref(), Some("\n"));
    assert_eq!(codes("''"), vec![ErrorCode::CS1011]);
    assert_eq!(codes("'ab'"), vec![ErrorCode::CS1012]);
}

#[test]
fn test_unexpected_character() {
    let tokens = lex_default("a ` b");
    assert_eq!(tokens[1].kind, SyntaxKind::BadToken);
    let message = tokens[1].diagnostics[0].message();
    assert_eq!(message, "Unexpected character '`'");
}

#[test]
fn test_unterminated_comment() {
    let tokens = lex_default("/* abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(
        trivia_kinds(&tokens[0].leading),
        vec![SyntaxKind::MultiLineCommentTrivia]
    );
    assert_eq!(codes("/* abc"), vec![ErrorCode::CS1035]);
}

#[test]
fn test_documentation_comments_follow_mode() {
    let text = "/// <summary/>\nclass";
    let parsed = lex_default(text);
    assert_eq!(
        parsed[0].leading[0].kind,
        SyntaxKind::SingleLineDocumentationCommentTrivia
    );
    let off = ParseOptions::default().with_documentation_mode(DocumentationMode::None);
    let plain = lex(text, &off);
    assert_eq!(plain[0].leading[0].kind, SyntaxKind::SingleLineCommentTrivia);
    assert_eq!(
        lex_default("//// four")[0].leading[0].kind,
        SyntaxKind::SingleLineCommentTrivia
    );
}

#[test]
fn test_lex_from_keeps_absolute_positions() {
    let tokens = lex_from("abc def", 4, &ParseOptions::default());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "def");
    assert_eq!(tokens[0].full_start, 4);
    assert_eq!(tokens[1].full_start, 7);
}

#[test]
fn test_line_endings() {
    let tokens = lex_default("a\r\nb\rc\n");
    assert_eq!(tokens[0].trailing[0].text, "\r\n");
    assert_eq!(tokens[1].trailing[0].text, "\r");
    assert_eq!(tokens[2].trailing[0].text, "\n");
}

proptest! {
    #[test]
    fn prop_round_trip_arbitrary_text(text in "\\PC{0,64}") {
        let tokens = lex_default(&text);
        prop_assert_eq!(rebuild(&tokens), text);
    }

    #[test]
    fn prop_round_trip_code_like_text(
        text in "[a-z0-9 \"'@$#{}()\\[\\];.,/*\\n\\r\\t<>=!&|?:+-]{0,80}"
    ) {
        let tokens = lex_default(&text);
        prop_assert_eq!(rebuild(&tokens), text.clone());
        let mut expected = 0u32;
        for token in &tokens {
            prop_assert_eq!(token.full_start, expected);
            expected += token.full_width();
        }
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == SyntaxKind::EndOfFileToken).count(), 1);
    }
}
