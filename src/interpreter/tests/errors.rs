//! Runtime error tests.
//!
//! The messages are a contract and are asserted verbatim.

use super::*;

#[test]
fn test_not_defined_on_reference() {
    assert_eq!(run_error("print a;"), "`a` not defined.");
}

#[test]
fn test_not_defined_on_set() {
    assert_eq!(run_error("set a = 1;"), "`a` not defined.");
}

#[test]
fn test_already_defined() {
    assert_eq!(run_error("var a = 1; var a = 1;"), "`a` already defined.");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run_error("print 5 / 0;"), "Division by zero.");
    assert_eq!(run_error("var a = 0; print 1 / a;"), "Division by zero.");
}

#[test]
fn test_unary_operand_must_be_integer() {
    assert_eq!(run_error("print -true;"), "Operand must be integer.");
    assert_eq!(run_error("print -null;"), "Operand must be integer.");
}

#[test]
fn test_binary_operands_must_be_integers() {
    assert_eq!(run_error("print 1 + true;"), "Operands must be integers.");
    assert_eq!(run_error("print null * 2;"), "Operands must be integers.");
    assert_eq!(run_error("print true < false;"), "Operands must be integers.");
}

#[test]
fn test_builtin_operands_must_be_integers() {
    assert_eq!(run_error("less(1, true);"), "Operands must be integers.");
}

#[test]
fn test_builtin_arity_mismatch() {
    assert_eq!(run_error("less(1);"), "Parameter's count doesn't match.");
    assert_eq!(
        run_error("less(1, 2, 3);"),
        "Parameter's count doesn't match."
    );
}

#[test]
fn test_user_function_arity_mismatch() {
    assert_eq!(
        run_error("def f(a, b) { return a; } f(1);"),
        "Parameter's count doesn't match."
    );
}

#[test]
fn test_calling_a_non_function() {
    assert_eq!(run_error("5(1);"), "`5` is not a function.");
    assert_eq!(run_error("null();"), "`null` is not a function.");
}

#[test]
fn test_return_at_top_level() {
    assert_eq!(run_error("return;"), "Return from top level.");
    assert_eq!(run_error("return 5;"), "Return from top level.");
}

#[test]
fn test_break_at_top_level() {
    assert_eq!(run_error("break;"), "Break at top level.");
    // A block is not a loop; the signal keeps going.
    assert_eq!(run_error("{ break; }"), "Break at top level.");
}

#[test]
fn test_continue_at_top_level() {
    assert_eq!(run_error("continue;"), "Continue at top level.");
}

#[test]
fn test_break_inside_if_needs_a_loop() {
    assert_eq!(run_error("if true { break; }"), "Break at top level.");
}

#[test]
fn test_integer_overflow_is_reported() {
    assert_eq!(
        run_error("print 9223372036854775807 + 1;"),
        "Integer overflow."
    );
    assert_eq!(run_error("print 2 ^ 64;"), "Integer overflow.");
    assert_eq!(
        run_error("print -9223372036854775807 - 2;"),
        "Integer overflow."
    );
}

#[test]
fn test_error_carries_span_of_offending_node() {
    let source = "var a = 1;\nprint b;";
    let result = try_run(source);
    let err = match result {
        Err(err) => err,
        Ok(output) => panic!("Expected failure, got {:?}", output),
    };
    let span = err.span().expect("runtime error should carry a span");
    assert_eq!(span.line, 2);
    assert_eq!(span.column, 7);
}

#[test]
fn test_failed_run_keeps_earlier_output() {
    // Output produced before the failure stays in the buffer.
    let mut lexer = Lexer::new("print 1; print 2 / 0;");
    let tokens = lexer.tokenize().unwrap();
    let mut parser = Parser::new(tokens);
    let program = parser.parse().unwrap();

    let mut interpreter = Interpreter::new();
    assert!(interpreter.eval_program(&program).is_err());
    assert_eq!(interpreter.output().to_vec(), ["1"]);
}
