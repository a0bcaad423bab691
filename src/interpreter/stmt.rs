//! Statement evaluation.

use std::rc::Rc;

use crate::ast::{Expr, Stmt, StmtKind};
use crate::token::Span;

use super::env::Environment;
use super::error::{RuntimeError, RuntimeErrorKind};
use super::value::Value;
use super::{Flow, Interpreter};

impl Interpreter {
    /// Evaluates a single statement and reports how control left it.
    pub(super) fn eval_stmt(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match &stmt.kind {
            StmtKind::Block(statements) => self.eval_block(statements),
            StmtKind::Var { name, init } => self.eval_var(name, init.as_ref(), stmt.span),
            StmtKind::Set { name, value } => self.eval_set(name, value, stmt.span),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => self.eval_if(condition, then_branch, else_branch),
            StmtKind::While {
                condition,
                body,
                then_clause,
            } => self.eval_while(condition, body, then_clause),
            StmtKind::For {
                name,
                init,
                condition,
                update_name,
                update,
                body,
            } => self.eval_for(name, init, condition, update_name, update, body, stmt.span),
            StmtKind::Break => Ok(Flow::Break(stmt.span)),
            StmtKind::Continue => Ok(Flow::Continue(stmt.span)),
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value, stmt.span))
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.output.push(value.to_string());
                Ok(Flow::Normal)
            }
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            }
        }
    }

    /// Evaluates a block in a fresh child frame.
    ///
    /// The parent frame is restored on every exit path, including signal
    /// propagation and errors.
    fn eval_block(&mut self, statements: &[Stmt]) -> Result<Flow, RuntimeError> {
        let parent = Rc::clone(&self.env);
        self.env = Environment::with_parent(Rc::clone(&parent));
        let result = self.eval_stmts(statements);
        self.env = parent;
        result
    }

    /// Evaluates statements in order, stopping at the first signal.
    fn eval_stmts(&mut self, statements: &[Stmt]) -> Result<Flow, RuntimeError> {
        for statement in statements {
            match self.eval_stmt(statement)? {
                Flow::Normal => {}
                signal => return Ok(signal),
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates the initializer (null when absent) and defines the name
    /// in the current frame.
    fn eval_var(
        &mut self,
        name: &str,
        init: Option<&Expr>,
        span: Span,
    ) -> Result<Flow, RuntimeError> {
        let value = match init {
            Some(expr) => self.eval_expr(expr)?,
            None => Value::Null,
        };
        self.env
            .borrow_mut()
            .define(name, value)
            .map_err(|e| e.with_span(span))?;
        Ok(Flow::Normal)
    }

    /// Evaluates the value and assigns it to the nearest enclosing
    /// binding.
    fn eval_set(&mut self, name: &str, value: &Expr, span: Span) -> Result<Flow, RuntimeError> {
        let value = self.eval_expr(value)?;
        self.env
            .borrow_mut()
            .assign(name, value)
            .map_err(|e| e.with_span(span))?;
        Ok(Flow::Normal)
    }

    /// Evaluates the branch selected by the condition's truthiness.
    fn eval_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: &Stmt,
    ) -> Result<Flow, RuntimeError> {
        if self.eval_expr(condition)?.is_truthy() {
            self.eval_stmt(then_branch)
        } else {
            self.eval_stmt(else_branch)
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// `continue` resumes with the next condition test; `break`
    /// terminates without running the then clause; a natural exit (the
    /// condition turning falsy) runs the then clause once, and any
    /// signal the then clause raises propagates outward.
    fn eval_while(
        &mut self,
        condition: &Expr,
        body: &Stmt,
        then_clause: &Stmt,
    ) -> Result<Flow, RuntimeError> {
        loop {
            if !self.eval_expr(condition)?.is_truthy() {
                return self.eval_stmt(then_clause);
            }
            match self.eval_loop_body(body)? {
                Flow::Normal | Flow::Continue(_) => {}
                Flow::Break(_) => return Ok(Flow::Normal),
                ret @ Flow::Return(..) => return Ok(ret),
            }
        }
    }

    /// Evaluates a `for` loop.
    ///
    /// The loop variable lives in a frame private to the loop, so it
    /// disappears when the loop ends. The update assignment runs after
    /// `Normal` and `Continue` iterations but not after a `break`.
    #[allow(clippy::too_many_arguments)]
    fn eval_for(
        &mut self,
        name: &str,
        init: &Expr,
        condition: &Expr,
        update_name: &str,
        update: &Expr,
        body: &Stmt,
        span: Span,
    ) -> Result<Flow, RuntimeError> {
        let initial = self.eval_expr(init)?;
        let parent = Rc::clone(&self.env);
        self.env = Environment::with_parent(Rc::clone(&parent));
        let result = self.run_for(name, initial, condition, update_name, update, body, span);
        self.env = parent;
        result
    }

    /// The body of [`eval_for`], separated so the loop frame is restored
    /// on every exit path.
    #[allow(clippy::too_many_arguments)]
    fn run_for(
        &mut self,
        name: &str,
        initial: Value,
        condition: &Expr,
        update_name: &str,
        update: &Expr,
        body: &Stmt,
        span: Span,
    ) -> Result<Flow, RuntimeError> {
        self.env
            .borrow_mut()
            .define(name, initial)
            .map_err(|e| e.with_span(span))?;
        loop {
            if !self.eval_expr(condition)?.is_truthy() {
                return Ok(Flow::Normal);
            }
            match self.eval_loop_body(body)? {
                Flow::Normal | Flow::Continue(_) => {
                    let next = self.eval_expr(update)?;
                    self.env
                        .borrow_mut()
                        .assign(update_name, next)
                        .map_err(|e| e.with_span(span))?;
                }
                Flow::Break(_) => return Ok(Flow::Normal),
                ret @ Flow::Return(..) => return Ok(ret),
            }
        }
    }

    /// Evaluates a loop body, recovering loop signals that crossed a
    /// function boundary.
    ///
    /// Function application does not consume `break`/`continue`; it
    /// re-raises them on the error channel with their top-level kinds.
    /// A loop body is the one place those kinds are intercepted and
    /// turned back into loop control, which gives the signals their
    /// dynamic extent: a bare `break` in a callee reaches the caller's
    /// loop, and only a signal with no enclosing loop anywhere surfaces
    /// as the top-level error.
    fn eval_loop_body(&mut self, body: &Stmt) -> Result<Flow, RuntimeError> {
        match self.eval_stmt(body) {
            Err(e) if e.kind() == RuntimeErrorKind::BreakAtTopLevel => {
                Ok(Flow::Break(e.span().unwrap_or(body.span)))
            }
            Err(e) if e.kind() == RuntimeErrorKind::ContinueAtTopLevel => {
                Ok(Flow::Continue(e.span().unwrap_or(body.span)))
            }
            other => other,
        }
    }
}
