//! Expression evaluation tests.

use super::*;

// ===================
// Arithmetic
// ===================

#[test]
fn test_literal_prints_itself() {
    assert_eq!(run("print 123;"), ["123"]);
    assert_eq!(run("print 0;"), ["0"]);
}

#[test]
fn test_addition_and_subtraction() {
    assert_eq!(run("print 5 + 6 + 7;"), ["18"]);
    assert_eq!(run("print 18 - 7 - 6;"), ["5"]);
}

#[test]
fn test_multiplication() {
    assert_eq!(run("print 5 * 6 * 7;"), ["210"]);
}

#[test]
fn test_division_chains_left() {
    assert_eq!(run("print 210 / 7 / 6;"), ["5"]);
}

#[test]
fn test_division_floors_toward_negative_infinity() {
    assert_eq!(run("print 7 / 2;"), ["3"]);
    assert_eq!(run("print -7 / 2;"), ["-4"]);
    assert_eq!(run("print 7 / -2;"), ["-4"]);
    assert_eq!(run("print -7 / -2;"), ["3"]);
}

#[test]
fn test_power() {
    assert_eq!(run("print 2 ^ 3;"), ["8"]);
    assert_eq!(run("print 5 * 2 ^ 3;"), ["40"]);
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(run("print 2 ^ 2 ^ 3;"), ["256"]);
}

#[test]
fn test_power_with_negative_exponent_is_zero() {
    assert_eq!(run("print 2 ^ -3;"), ["0"]);
}

#[test]
fn test_unary_minus() {
    assert_eq!(run("print -5;"), ["-5"]);
    assert_eq!(run("var a = 5; print -a;"), ["-5"]);
    assert_eq!(run("print - - 5;"), ["5"]);
}

#[test]
fn test_parens() {
    assert_eq!(run("print (5 + 6) * 7;"), ["77"]);
    assert_eq!(run("print 5 * (6 + 7);"), ["65"]);
}

// ===================
// Comparisons and equality
// ===================

#[test]
fn test_comparisons() {
    assert_eq!(run("print 1 < 2;"), ["true"]);
    assert_eq!(run("print 2 <= 2;"), ["true"]);
    assert_eq!(run("print 1 > 2;"), ["false"]);
    assert_eq!(run("print 2 >= 3;"), ["false"]);
}

#[test]
fn test_equality_on_integers() {
    assert_eq!(run("print 5 + 7 = 3 * 4;"), ["true"]);
    assert_eq!(run("print 5 + 6 = 3 * 4;"), ["false"]);
    assert_eq!(run("print 5 + 7 # 3 * 4;"), ["false"]);
    assert_eq!(run("print 5 + 6 # 3 * 4;"), ["true"]);
}

#[test]
fn test_equality_on_booleans() {
    assert_eq!(run("print true = true;"), ["true"]);
    assert_eq!(run("print true = false;"), ["false"]);
    assert_eq!(run("print true # false;"), ["true"]);
}

#[test]
fn test_equality_across_kinds_is_false() {
    assert_eq!(run("print 1 = true;"), ["false"]);
    assert_eq!(run("print 0 = false;"), ["false"]);
    assert_eq!(run("print null = 0;"), ["false"]);
}

#[test]
fn test_null_equals_only_null() {
    assert_eq!(run("print null = null;"), ["true"]);
    assert_eq!(run("print null # null;"), ["false"]);
}

#[test]
fn test_builtins_compare_by_identity() {
    assert_eq!(run("print less = less;"), ["true"]);
    assert_eq!(run("print less = print_env;"), ["false"]);
}

// ===================
// Short-circuit operators
// ===================

#[test]
fn test_and_short_circuits() {
    // The unevaluated side may even contain a division by zero.
    assert_eq!(run("print false & 1 / 0;"), ["false"]);
}

#[test]
fn test_or_short_circuits() {
    assert_eq!(run("print true | 1 / 0;"), ["true"]);
}

#[test]
fn test_and_or_return_operands_uncoerced() {
    assert_eq!(run("print 1 & 2;"), ["2"]);
    assert_eq!(run("print 0 & 2;"), ["0"]);
    assert_eq!(run("print 0 | 5;"), ["5"]);
    assert_eq!(run("print 3 | 5;"), ["3"]);
    assert_eq!(run("print null | 7;"), ["7"]);
}

// ===================
// Ternary
// ===================

#[test]
fn test_ternary_selects_branch() {
    assert_eq!(run("print 1 = 1 ? 2 : 3;"), ["2"]);
    assert_eq!(run("print 1 = 2 ? 2 : 3;"), ["3"]);
}

#[test]
fn test_ternary_skips_unselected_branch() {
    assert_eq!(run("print 1 = 1 ? 1 + 2 : 1 / 0;"), ["3"]);
    assert_eq!(run("print 1 = 2 ? 1 / 0 : 4;"), ["4"]);
}

#[test]
fn test_ternary_integer_condition_uses_truthiness() {
    assert_eq!(run("print 5 ? 1 : 2;"), ["1"]);
    assert_eq!(run("print 0 ? 1 : 2;"), ["2"]);
}

// ===================
// Printable forms
// ===================

#[test]
fn test_printable_forms() {
    assert_eq!(run("print true; print false;"), ["true", "false"]);
    assert_eq!(run("print null;"), ["null"]);
    assert_eq!(run("print less;"), ["<builtin>"]);
    assert_eq!(run("print func() {};"), ["<func>"]);
}

#[test]
fn test_expression_statement_prints_nothing() {
    assert_eq!(run("5 + 6;"), Vec::<String>::new());
}
