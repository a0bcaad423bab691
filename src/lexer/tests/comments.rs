//! Tests for comment handling.

use super::*;

#[test]
fn test_comment_single_line() {
    let kinds = tokenize_kinds("! comment\n");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_comment_at_eof() {
    let kinds = tokenize_kinds("! comment without newline");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_comment_after_code() {
    let kinds = tokenize_kinds("print 5; ! trailing comment");
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
fn test_comment_ends_at_newline() {
    let kinds = tokenize_kinds("! first line\nprint 1;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Print,
            TokenKind::IntLiteral(1),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_multiple_comments() {
    let kinds = tokenize_kinds("! first\n! second\nfoo");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("foo".to_string()), TokenKind::Eof]
    );
}
