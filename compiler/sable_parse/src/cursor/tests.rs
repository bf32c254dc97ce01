#![allow(clippy::unwrap_used, clippy::expect_used)]

use sable_options::ParseOptions;

use super::*;

fn lex(text: &str) -> Vec<Token> {
    sable_lexer::lex(text, &ParseOptions::default())
}

#[test]
fn test_peek_past_end_returns_eof() {
    let tokens = lex("a b");
    let cursor = Cursor::new(&tokens);
    assert_eq!(cursor.peek_kind(0), SyntaxKind::IdentifierToken);
    assert_eq!(cursor.peek_kind(2), SyntaxKind::EndOfFileToken);
    assert_eq!(cursor.peek_kind(50), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_advance_stops_at_eof() {
    let tokens = lex("x");
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.advance().text, "x");
    assert!(cursor.is_at_end());
    let pos = cursor.position();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position(), pos);
}

#[test]
fn test_empty_stream_reads_eof() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert!(cursor.previous().is_none());
}

#[test]
fn test_eat() {
    let tokens = lex("( )");
    let mut cursor = Cursor::new(&tokens);
    assert!(!cursor.eat(SyntaxKind::CloseParenToken));
    assert!(cursor.eat(SyntaxKind::OpenParenToken));
    assert!(cursor.eat(SyntaxKind::CloseParenToken));
    assert!(cursor.is_at_end());
}

#[test]
fn test_copy_is_a_checkpoint() {
    let tokens = lex("a . b");
    let mut cursor = Cursor::new(&tokens);
    let saved = cursor;
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current().text, "b");
    assert_eq!(saved.current().text, "a");
    cursor.set_position(saved.position());
    assert_eq!(cursor.current().text, "a");
}

#[test]
fn test_is_adjacent() {
    let tokens = lex(">> > >");
    let cursor = Cursor::new(&tokens);
    assert!(cursor.is_adjacent(0));
    assert!(!cursor.is_adjacent(1));
    assert!(!cursor.is_adjacent(2));
}

#[test]
fn test_expected_span_follows_previous_text() {
    let tokens = lex("x  y");
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.expected_span(), Span::point(0));
    cursor.advance();
    assert_eq!(cursor.expected_span(), Span::point(1));
}
