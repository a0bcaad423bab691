//! End-to-end scenarios covering the language contract.
//!
//! Each test feeds a complete source text through the driver and checks
//! the exact output sequence or the exact one-line diagnostic.

mod common;

use common::{run_error, run_ok};

#[test]
fn test_power_is_right_associative() {
    assert_eq!(run_ok("print 2 ^ 2 ^ 3;"), ["256"]);
}

#[test]
fn test_while_loop_counts() {
    assert_eq!(
        run_ok("var i = 0; while i # 3 { print i; set i = i + 1; }"),
        ["0", "1", "2"]
    );
}

#[test]
fn test_def_and_repeated_calls() {
    assert_eq!(
        run_ok("def sum(a,b){ return a+b; } print sum(2,3); print sum(4,5);"),
        ["5", "9"]
    );
}

#[test]
fn test_closure_chain() {
    assert_eq!(
        run_ok("var make_adder = func(a){ return func(b){ return a+b; }; }; print make_adder(2)(3);"),
        ["5"]
    );
}

#[test]
fn test_for_loop_with_continue() {
    assert_eq!(
        run_ok("for i = 0; i # 5; i = i + 1 { if i = 2 { continue; } print i; }"),
        ["0", "1", "3", "4"]
    );
}

#[test]
fn test_while_then_clause() {
    assert_eq!(run_ok("while false {} then { print 2; }"), ["2"]);
    assert_eq!(
        run_ok("while true { break; } then { print 2; }"),
        Vec::<String>::new()
    );
}

#[test]
fn test_ternary_skips_unselected_branch() {
    assert_eq!(run_ok("print 1 = 1 ? 1 + 2 : 1 / 0;"), ["3"]);
}

#[test]
fn test_builtin_arity_check() {
    assert_eq!(run_error("less(1);"), "Parameter's count doesn't match.");
}

#[test]
fn test_redefinition_is_an_error() {
    assert_eq!(run_error("var a = 1; var a = 1;"), "`a` already defined.");
}

#[test]
fn test_return_at_top_level_is_an_error() {
    assert_eq!(run_error("return;"), "Return from top level.");
}

#[test]
fn test_scoping_with_var_and_set() {
    assert_eq!(
        run_ok("var a = 10; { var a = 20; print a; } print a;"),
        ["20", "10"]
    );
    assert_eq!(
        run_ok("var a = 10; { set a = 20; print a; } print a;"),
        ["20", "20"]
    );
}

#[test]
fn test_short_circuit_protects_failing_operand() {
    assert_eq!(run_ok("print false & 1 / 0;"), ["false"]);
    assert_eq!(run_ok("print true | 1 / 0;"), ["true"]);
}
