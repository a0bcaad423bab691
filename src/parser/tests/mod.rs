//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - `stmt`: Statement parsing (declarations, conditionals, loops, def)
//! - `expr`: Expression parsing (precedence, associativity, calls)
//! - `errors`: Error detection and message quality

use super::*;
use crate::ast::{BinaryOperator, Expr, ExprKind, StmtKind};
use crate::lexer::Lexer;


/// Helper function to parse input and return the Program.
pub(super) fn parse(input: &str) -> Result<Program, ParseError> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {}", input, e));
    let mut parser = Parser::new(tokens);
    parser.parse()
}

/// Helper function to parse a single expression statement and return the
/// expression.
pub(super) fn parse_expr(input: &str) -> Expr {
    let source = format!("{};", input);
    let program =
        parse(&source).unwrap_or_else(|e| panic!("Failed to parse input {:?}: {}", source, e));

    let first_stmt = program
        .statements
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("Input {:?} produced no statements", input));

    match first_stmt.kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

/// Helper function to parse input and return the error.
pub(super) fn parse_error(input: &str) -> ParseError {
    match parse(input) {
        Ok(program) => panic!(
            "Expected parsing to fail for input {:?}, but it succeeded with {} statements",
            input,
            program.statements.len()
        ),
        Err(e) => e,
    }
}
