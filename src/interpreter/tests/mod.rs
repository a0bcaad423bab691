//! Unit tests for the evaluator.
//!
//! Tests are organized by language area:
//! - `exprs`: operators, truthiness, printable forms
//! - `scope`: declarations, assignment, block scoping
//! - `control_flow`: conditionals, loops, signals
//! - `functions`: function values, closures, application
//! - `errors`: the runtime error message contract

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;

mod errors;
mod exprs;

/// Helper function to run a source text on a fresh interpreter and
/// return its printed output.
pub(super) fn run(source: &str) -> Vec<String> {
    match try_run(source) {
        Ok(output) => output,
        Err(e) => panic!("Evaluation failed for input {:?}: {}", source, e),
    }
}

/// Helper function to run a source text and return the result.
///
/// Lex and parse failures panic: these tests exercise the evaluator,
/// so their inputs must be syntactically valid.
pub(super) fn try_run(source: &str) -> Result<Vec<String>, RuntimeError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on evaluator test input {:?}: {}", source, e));
    let mut parser = Parser::new(tokens);
    let program = parser
        .parse()
        .unwrap_or_else(|e| panic!("Parser failed on evaluator test input {:?}: {}", source, e));

    let mut interpreter = Interpreter::new();
    interpreter.eval_program(&program)?;
    Ok(interpreter.output().to_vec())
}

/// Helper function to run a source text that must fail and return the
/// error message.
pub(super) fn run_error(source: &str) -> String {
    match try_run(source) {
        Ok(output) => panic!(
            "Expected evaluation to fail for input {:?}, but it printed {:?}",
            source, output
        ),
        Err(e) => e.message().to_string(),
    }
}
