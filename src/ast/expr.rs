//! Expression nodes for the minilang AST.

use std::rc::Rc;

use crate::token::Span;

use super::stmt::Stmt;

/// A binary operator.
///
/// [`And`](BinaryOperator::And) and [`Or`](BinaryOperator::Or) are the
/// short-circuit forms: the evaluator decides from the left operand
/// whether the right one runs at all. Every other operator evaluates
/// both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `^` exponentiation (right-associative).
    Pow,
    /// `*` multiplication.
    Mul,
    /// `/` floor division.
    Div,
    /// `+` addition.
    Add,
    /// `-` subtraction.
    Sub,
    /// `<` comparison.
    Less,
    /// `<=` comparison.
    LessEqual,
    /// `>` comparison.
    Greater,
    /// `>=` comparison.
    GreaterEqual,
    /// `=` equality.
    Equal,
    /// `#` inequality.
    NotEqual,
    /// `&` short-circuit "and".
    And,
    /// `|` short-circuit "or".
    Or,
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `-` negation.
    Neg,
}

/// The kind of an expression in the minilang language.
///
/// This enum represents the different types of expressions without
/// source location information. Use [`Expr`] for the full AST node with
/// span information.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// An integer literal value.
    IntLiteral(i64),

    /// A boolean literal value.
    BoolLiteral(bool),

    /// The `null` literal.
    NullLiteral,

    /// A variable reference.
    ///
    /// Resolution happens at evaluation time by walking the environment
    /// chain; an unbound name is a runtime error.
    Identifier(String),

    /// A function literal: `func(a, b) { ... }`.
    ///
    /// The parameter list and body are reference-counted so the function
    /// value produced at evaluation time shares them with the AST and
    /// keeps them alive for as long as the closure is reachable.
    Func {
        /// The parameter names, in order.
        params: Rc<Vec<String>>,
        /// The body block.
        body: Rc<Stmt>,
    },

    /// A unary operation.
    UnaryOp {
        /// The operator.
        op: UnaryOperator,
        /// The operand expression.
        operand: Box<Expr>,
    },

    /// A binary operation.
    BinaryOp {
        /// The left operand.
        left: Box<Expr>,
        /// The operator.
        op: BinaryOperator,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A ternary expression: `cond ? then : else`.
    ///
    /// Only the selected branch is evaluated.
    Ternary {
        /// The condition, tested for truthiness.
        condition: Box<Expr>,
        /// The expression selected when the condition is truthy.
        then_branch: Box<Expr>,
        /// The expression selected otherwise.
        else_branch: Box<Expr>,
    },

    /// A call expression.
    ///
    /// The callee is an arbitrary expression, so calls chain:
    /// `make_adder(2)(3)` calls the function returned by the first call.
    Call {
        /// The expression evaluating to the function being called.
        callee: Box<Expr>,
        /// The argument expressions, evaluated left to right.
        args: Vec<Expr>,
    },
}

/// An expression in the minilang language with source location.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
