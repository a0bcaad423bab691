//! Expression evaluation and function application.

use std::rc::Rc;

use crate::ast::{BinaryOperator, Expr, ExprKind, UnaryOperator};
use crate::token::Span;

use super::env::Environment;
use super::error::RuntimeError;
use super::value::{Function, Value};
use super::{Flow, Interpreter};

impl Interpreter {
    /// Evaluates an expression to a value.
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::IntLiteral(value) => Ok(Value::Int(*value)),
            ExprKind::BoolLiteral(value) => Ok(Value::Bool(*value)),
            ExprKind::NullLiteral => Ok(Value::Null),
            ExprKind::Identifier(name) => self
                .env
                .borrow()
                .get(name)
                .map_err(|e| e.with_span(expr.span)),
            ExprKind::Func { params, body } => {
                // A function literal captures the frame current at this
                // moment; that frame is what makes the value a closure.
                Ok(Value::Function(Rc::new(Function {
                    params: Rc::clone(params),
                    body: Rc::clone(body),
                    env: Rc::clone(&self.env),
                })))
            }
            ExprKind::UnaryOp {
                op: UnaryOperator::Neg,
                operand,
            } => match self.eval_expr(operand)? {
                Value::Int(value) => value
                    .checked_neg()
                    .map(Value::Int)
                    .ok_or_else(|| RuntimeError::integer_overflow().with_span(expr.span)),
                _ => Err(RuntimeError::operand_must_be_integer().with_span(operand.span)),
            },
            ExprKind::BinaryOp { left, op, right } => self.eval_binary(left, *op, right, expr.span),
            ExprKind::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                // Only the selected branch is evaluated.
                if self.eval_expr(condition)?.is_truthy() {
                    self.eval_expr(then_branch)
                } else {
                    self.eval_expr(else_branch)
                }
            }
            ExprKind::Call { callee, args } => {
                let callee_value = self.eval_expr(callee)?;
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.eval_expr(arg)?);
                }
                self.apply(callee_value, arg_values, expr.span)
            }
        }
    }

    /// Evaluates a binary operation.
    fn eval_binary(
        &mut self,
        left: &Expr,
        op: BinaryOperator,
        right: &Expr,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        match op {
            // `&` and `|` evaluate the right operand only when the left
            // one does not decide the result, and return whichever
            // operand decided - values are not coerced to boolean.
            BinaryOperator::And => {
                let lhs = self.eval_expr(left)?;
                if lhs.is_truthy() {
                    self.eval_expr(right)
                } else {
                    Ok(lhs)
                }
            }
            BinaryOperator::Or => {
                let lhs = self.eval_expr(left)?;
                if lhs.is_truthy() {
                    Ok(lhs)
                } else {
                    self.eval_expr(right)
                }
            }
            BinaryOperator::Equal => {
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                Ok(Value::Bool(lhs == rhs))
            }
            BinaryOperator::NotEqual => {
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                Ok(Value::Bool(lhs != rhs))
            }
            BinaryOperator::Pow => {
                let (a, b) = self.int_operands(left, right, span)?;
                Self::pow(a, b, span)
            }
            BinaryOperator::Mul => {
                let (a, b) = self.int_operands(left, right, span)?;
                a.checked_mul(b)
                    .map(Value::Int)
                    .ok_or_else(|| RuntimeError::integer_overflow().with_span(span))
            }
            BinaryOperator::Div => {
                let (a, b) = self.int_operands(left, right, span)?;
                Self::div(a, b, span)
            }
            BinaryOperator::Add => {
                let (a, b) = self.int_operands(left, right, span)?;
                a.checked_add(b)
                    .map(Value::Int)
                    .ok_or_else(|| RuntimeError::integer_overflow().with_span(span))
            }
            BinaryOperator::Sub => {
                let (a, b) = self.int_operands(left, right, span)?;
                a.checked_sub(b)
                    .map(Value::Int)
                    .ok_or_else(|| RuntimeError::integer_overflow().with_span(span))
            }
            BinaryOperator::Less => {
                let (a, b) = self.int_operands(left, right, span)?;
                Ok(Value::Bool(a < b))
            }
            BinaryOperator::LessEqual => {
                let (a, b) = self.int_operands(left, right, span)?;
                Ok(Value::Bool(a <= b))
            }
            BinaryOperator::Greater => {
                let (a, b) = self.int_operands(left, right, span)?;
                Ok(Value::Bool(a > b))
            }
            BinaryOperator::GreaterEqual => {
                let (a, b) = self.int_operands(left, right, span)?;
                Ok(Value::Bool(a >= b))
            }
        }
    }

    /// Evaluates both operands of an arithmetic or comparison operator,
    /// which require integers on both sides.
    fn int_operands(
        &mut self,
        left: &Expr,
        right: &Expr,
        span: Span,
    ) -> Result<(i64, i64), RuntimeError> {
        let lhs = self.eval_expr(left)?;
        let rhs = self.eval_expr(right)?;
        match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok((a, b)),
            _ => Err(RuntimeError::operands_must_be_integers().with_span(span)),
        }
    }

    /// Floor division: the quotient rounds toward negative infinity.
    fn div(a: i64, b: i64, span: Span) -> Result<Value, RuntimeError> {
        if b == 0 {
            return Err(RuntimeError::division_by_zero().with_span(span));
        }
        let Some(quotient) = a.checked_div(b) else {
            return Err(RuntimeError::integer_overflow().with_span(span));
        };
        // checked_div rounds toward zero; step down one when the signs
        // differ and the division was inexact.
        let remainder = a % b;
        if remainder != 0 && (remainder < 0) != (b < 0) {
            Ok(Value::Int(quotient - 1))
        } else {
            Ok(Value::Int(quotient))
        }
    }

    /// Exponentiation. A negative exponent evaluates to zero.
    fn pow(a: i64, b: i64, span: Span) -> Result<Value, RuntimeError> {
        if b < 0 {
            return Ok(Value::Int(0));
        }
        let exponent =
            u32::try_from(b).map_err(|_| RuntimeError::integer_overflow().with_span(span))?;
        a.checked_pow(exponent)
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::integer_overflow().with_span(span))
    }

    /// Applies a callee value to already-evaluated arguments.
    ///
    /// Both builtin and user calls check the argument count against the
    /// callee's arity first.
    fn apply(&mut self, callee: Value, args: Vec<Value>, span: Span) -> Result<Value, RuntimeError> {
        match callee {
            Value::Builtin(builtin) => {
                if args.len() != builtin.arity {
                    return Err(RuntimeError::arity_mismatch().with_span(span));
                }
                (builtin.call)(self, &args).map_err(|e| e.with_span(span))
            }
            Value::Function(function) => {
                if args.len() != function.params.len() {
                    return Err(RuntimeError::arity_mismatch().with_span(span));
                }
                // The call frame is parented to the function's captured
                // environment, not the caller's - closures see their
                // definition-time scope. The caller's frame is restored
                // on every exit path.
                let caller_env = Rc::clone(&self.env);
                self.env = Environment::with_parent(Rc::clone(&function.env));
                let result = self.call_function(&function, args, span);
                self.env = caller_env;
                result
            }
            other => Err(RuntimeError::not_callable(&other.to_string()).with_span(span)),
        }
    }

    /// Runs a user function's body in the already-prepared call frame.
    ///
    /// A `Return` signal is consumed here and its payload becomes the
    /// call's value; a body that completes without one yields null.
    /// `Break` and `Continue` are NOT consumed at the function boundary:
    /// they are re-raised on the error channel and keep unwinding until
    /// an enclosing loop in some caller recovers them, or the driver
    /// reports them as top-level errors.
    fn call_function(
        &mut self,
        function: &Function,
        args: Vec<Value>,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        for (param, arg) in function.params.iter().zip(args) {
            self.env
                .borrow_mut()
                .define(param, arg)
                .map_err(|e| e.with_span(span))?;
        }
        match self.eval_stmt(&function.body)? {
            Flow::Normal => Ok(Value::Null),
            Flow::Return(value, _) => Ok(value),
            Flow::Break(break_span) => {
                Err(RuntimeError::break_at_top_level().with_span(break_span))
            }
            Flow::Continue(continue_span) => {
                Err(RuntimeError::continue_at_top_level().with_span(continue_span))
            }
        }
    }
}
