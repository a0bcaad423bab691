//! Runtime error types.
//!
//! This module defines [`RuntimeError`], which represents semantic
//! failures during evaluation. Messages are a contract: external tooling
//! matches them verbatim, so each constructor produces exactly one
//! message shape.

use crate::token::Span;

/// The kind of runtime error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching. The evaluator
/// itself matches on [`BreakAtTopLevel`](RuntimeErrorKind::BreakAtTopLevel)
/// and [`ContinueAtTopLevel`](RuntimeErrorKind::ContinueAtTopLevel) to
/// recover loop signals that crossed a function boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// A `var` re-declared a name in the same frame.
    AlreadyDefined,
    /// A name reference or `set` found no binding.
    NotDefined,
    /// Division with a zero divisor.
    DivisionByZero,
    /// A unary operation received a non-integer operand.
    OperandMustBeInteger,
    /// A binary operation received non-integer operands.
    OperandsMustBeIntegers,
    /// A call's argument count does not match the callee's arity.
    ArityMismatch,
    /// Arithmetic left the `i64` range.
    IntegerOverflow,
    /// Something that is not a function was called.
    NotCallable,
    /// A `return` signal escaped to the top level.
    ReturnFromTopLevel,
    /// A `break` signal escaped every loop.
    BreakAtTopLevel,
    /// A `continue` signal escaped every loop.
    ContinueAtTopLevel,
}

/// An error that occurred during evaluation.
///
/// Contains the exact one-line message contract of the language and,
/// when the failure can be traced to a node, the span of that node for
/// rich error reporting.
#[derive(Debug)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    message: String,
    /// The source location of the offending node, if known.
    span: Option<Span>,
    /// The kind of error, for structured error handling.
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            message: message.into(),
            span: None,
            kind,
        }
    }

    /// Creates a `` `name` already defined. `` error.
    pub(super) fn already_defined(name: &str) -> Self {
        Self::new(
            RuntimeErrorKind::AlreadyDefined,
            format!("`{}` already defined.", name),
        )
    }

    /// Creates a `` `name` not defined. `` error.
    pub(super) fn not_defined(name: &str) -> Self {
        Self::new(
            RuntimeErrorKind::NotDefined,
            format!("`{}` not defined.", name),
        )
    }

    /// Creates a `Division by zero.` error.
    pub(super) fn division_by_zero() -> Self {
        Self::new(RuntimeErrorKind::DivisionByZero, "Division by zero.")
    }

    /// Creates an `Operand must be integer.` error.
    pub(super) fn operand_must_be_integer() -> Self {
        Self::new(
            RuntimeErrorKind::OperandMustBeInteger,
            "Operand must be integer.",
        )
    }

    /// Creates an `Operands must be integers.` error.
    pub(super) fn operands_must_be_integers() -> Self {
        Self::new(
            RuntimeErrorKind::OperandsMustBeIntegers,
            "Operands must be integers.",
        )
    }

    /// Creates a `Parameter's count doesn't match.` error.
    pub(super) fn arity_mismatch() -> Self {
        Self::new(
            RuntimeErrorKind::ArityMismatch,
            "Parameter's count doesn't match.",
        )
    }

    /// Creates an `Integer overflow.` error.
    pub(super) fn integer_overflow() -> Self {
        Self::new(RuntimeErrorKind::IntegerOverflow, "Integer overflow.")
    }

    /// Creates an error for calling a value that is not a function.
    ///
    /// `printable` is the printable form of the offending value.
    pub(super) fn not_callable(printable: &str) -> Self {
        Self::new(
            RuntimeErrorKind::NotCallable,
            format!("`{}` is not a function.", printable),
        )
    }

    /// Creates a `Return from top level.` error.
    pub(super) fn return_from_top_level() -> Self {
        Self::new(
            RuntimeErrorKind::ReturnFromTopLevel,
            "Return from top level.",
        )
    }

    /// Creates a `Break at top level.` error.
    ///
    /// Also used to carry a `break` signal across a function boundary;
    /// see the loop evaluation in the `stmt` module.
    pub(super) fn break_at_top_level() -> Self {
        Self::new(RuntimeErrorKind::BreakAtTopLevel, "Break at top level.")
    }

    /// Creates a `Continue at top level.` error.
    ///
    /// Also used to carry a `continue` signal across a function
    /// boundary.
    pub(super) fn continue_at_top_level() -> Self {
        Self::new(
            RuntimeErrorKind::ContinueAtTopLevel,
            "Continue at top level.",
        )
    }

    /// Attaches a span if the error does not already carry one.
    ///
    /// The innermost attachment wins, so errors point at the most
    /// precise node that raised them.
    pub(super) fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location of the offending node, if known.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{}:{}: {}", span.line, span.column, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for RuntimeError {}
