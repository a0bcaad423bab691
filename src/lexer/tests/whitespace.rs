//! Tests for whitespace handling.

use super::*;

#[test]
fn test_whitespace_only_input() {
    let kinds = tokenize_kinds(" \t\r\n");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_between_tokens() {
    let kinds = tokenize_kinds("  print\t\t5 \n ;  ");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Print,
            TokenKind::IntLiteral(5),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_no_whitespace_needed_around_punctuation() {
    let kinds = tokenize_kinds("f(1,2);");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("f".to_string()),
            TokenKind::LeftParen,
            TokenKind::IntLiteral(1),
            TokenKind::Comma,
            TokenKind::IntLiteral(2),
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}
