//! Statement parsing.

use std::rc::Rc;

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single statement, dispatching on the lookahead token.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement = block | varset | if | while | for | break | continue
    ///           | def | return | print | exprstmt
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::Var | TokenKind::Set => self.parse_var_set(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Break => self.parse_break_stmt(),
            TokenKind::Continue => self.parse_continue_stmt(),
            TokenKind::Def => self.parse_def_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::Print => self.parse_print_stmt(),
            _ => {
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                let span = expr.span;
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    /// Parses a braced block.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block = "{" { statement } "}"
    /// ```
    pub(super) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::LeftBrace)?;

        let mut statements = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            statements.push(self.parse_stmt()?);
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RightBrace)?;
        Ok(Stmt::new(
            StmtKind::Block(statements),
            start_span.to(end_span),
        ))
    }

    /// Builds an empty block at the current position.
    ///
    /// Used for the missing `else` branch of an `if` and the missing
    /// `then` clause of a `while`.
    fn empty_block(&self) -> Stmt {
        Stmt::new(StmtKind::Block(Vec::new()), self.current_span())
    }

    /// Parses a `var` declaration or `set` assignment.
    ///
    /// The target parses as a primary expression that must turn out to
    /// be a name. `var x;` declares `x` as null; `set` always requires
    /// a value.
    ///
    /// # Grammar
    ///
    /// ```text
    /// varset = ("var" | "set") NAME [ "=" expression ] ";"
    /// ```
    fn parse_var_set(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        let is_var = matches!(self.current_kind(), TokenKind::Var);
        self.advance();

        let target_kind = self.current_kind().clone();
        let target_span = self.current_span();
        let target = self.parse_primary_expr()?;
        let ExprKind::Identifier(name) = target.kind else {
            return Err(ParseError::expected_name(&target_kind, target_span));
        };

        if is_var {
            let init = if matches!(self.current_kind(), TokenKind::Semicolon) {
                None
            } else {
                self.expect(&TokenKind::Equals)?;
                Some(self.parse_expr()?)
            };
            let end_span = self.current_span();
            self.expect(&TokenKind::Semicolon)?;
            Ok(Stmt::new(
                StmtKind::Var { name, init },
                start_span.to(end_span),
            ))
        } else {
            self.expect(&TokenKind::Equals)?;
            let value = self.parse_expr()?;
            let end_span = self.current_span();
            self.expect(&TokenKind::Semicolon)?;
            Ok(Stmt::new(
                StmtKind::Set { name, value },
                start_span.to(end_span),
            ))
        }
    }

    /// Parses an `if` statement, including `elif` chains.
    ///
    /// An `elif` continues the chain by parsing another `if` as the else
    /// branch; a missing `else` becomes an empty block.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if = ("if" | "elif") expression block [ "elif" if | "else" block ]
    /// ```
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.advance(); // `if` or `elif`

        let condition = self.parse_expr()?;
        let then_branch = self.parse_block()?;

        let else_branch = match self.current_kind() {
            TokenKind::Elif => self.parse_if_stmt()?,
            TokenKind::Else => {
                self.advance();
                self.parse_block()?
            }
            _ => self.empty_block(),
        };

        let span = start_span.to(else_branch.span);
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            span,
        ))
    }

    /// Parses a `while` statement with its optional `then` clause.
    ///
    /// # Grammar
    ///
    /// ```text
    /// while = "while" expression block [ "then" block ]
    /// ```
    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::While)?;

        let condition = self.parse_expr()?;
        let body = self.parse_block()?;

        let then_clause = if matches!(self.current_kind(), TokenKind::Then) {
            self.advance();
            self.parse_block()?
        } else {
            self.empty_block()
        };

        let span = start_span.to(then_clause.span);
        Ok(Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
                then_clause: Box::new(then_clause),
            },
            span,
        ))
    }

    /// Parses a `for` statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// for = "for" NAME "=" expression ";" expression ";"
    ///             NAME "=" expression block
    /// ```
    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::For)?;

        let name = self.expect_name()?;
        self.expect(&TokenKind::Equals)?;
        let init = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;

        let condition = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;

        let update_name = self.expect_name()?;
        self.expect(&TokenKind::Equals)?;
        let update = self.parse_expr()?;

        let body = self.parse_block()?;

        let span = start_span.to(body.span);
        Ok(Stmt::new(
            StmtKind::For {
                name,
                init,
                condition,
                update_name,
                update,
                body: Box::new(body),
            },
            span,
        ))
    }

    /// Parses a `break` statement.
    fn parse_break_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();
        self.expect(&TokenKind::Break)?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Break, span))
    }

    /// Parses a `continue` statement.
    fn parse_continue_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();
        self.expect(&TokenKind::Continue)?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Continue, span))
    }

    /// Parses a `def` statement.
    ///
    /// `def name(params) { body }` is sugar for
    /// `var name = func(params) { body };`, so this desugars directly to
    /// a [`StmtKind::Var`] holding a function literal.
    ///
    /// # Grammar
    ///
    /// ```text
    /// def = "def" NAME "(" [ NAME { "," NAME } ] ")" block
    /// ```
    fn parse_def_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Def)?;

        let name = self.expect_name()?;
        let params = self.parse_param_list()?;
        let body = self.parse_block()?;

        let span = start_span.to(body.span);
        let func = Expr::new(
            ExprKind::Func {
                params: Rc::new(params),
                body: Rc::new(body),
            },
            span,
        );
        Ok(Stmt::new(
            StmtKind::Var {
                name,
                init: Some(func),
            },
            span,
        ))
    }

    /// Parses a `return` statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return = "return" [ expression ] ";"
    /// ```
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Return)?;

        let value = if matches!(self.current_kind(), TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };

        let end_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Return(value), start_span.to(end_span)))
    }

    /// Parses a `print` statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// print = "print" expression ";"
    /// ```
    fn parse_print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Print)?;

        let expr = self.parse_expr()?;
        let end_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Print(expr), start_span.to(end_span)))
    }
}
