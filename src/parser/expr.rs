//! Expression parsing using precedence climbing.
//!
//! This module implements expression parsing with proper operator
//! precedence. The parser handles:
//! - The right-associative ternary `? :` above all binary operators
//! - Binary operators with a precedence table, including the
//!   right-associative `^`
//! - Prefix `-` and postfix call chains
//! - Primary expressions (literals, names, parenthesized expressions,
//!   function literals)

use std::rc::Rc;

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOperator, Expr, ExprKind, UnaryOperator};
use crate::token::TokenKind;

/// Operator precedence levels (higher number = lower precedence = looser
/// binding).
///
/// Lower precedence operators are parsed later, forming parent nodes in
/// the AST. For example, `2 + 3 * 4` is parsed as `2 + (3 * 4)` because
/// multiplication (level 2) binds tighter than addition (level 3).
///
/// - Level 1: `^` (power, right-associative) - tightest binding
/// - Level 2: `*`, `/` (multiplicative)
/// - Level 3: `+`, `-` (additive)
/// - Level 4: `<`, `>`, `<=`, `>=` (comparison)
/// - Level 5: `=`, `#` (equality)
/// - Level 6: `&` (short-circuit "and")
/// - Level 7: `|` (short-circuit "or") - loosest binding
///
/// The ternary `? :` sits above level 7 and is handled separately; unary
/// `-` and calls bind tighter than level 1 and are handled below the
/// binary loop.
const PRECEDENCE_OR: u8 = 7;

/// Returns the operator and precedence for a binary operator token.
///
/// Returns `None` for non-operator tokens.
fn binary_op(kind: &TokenKind) -> Option<(BinaryOperator, u8)> {
    match kind {
        TokenKind::Caret => Some((BinaryOperator::Pow, 1)),
        TokenKind::Star => Some((BinaryOperator::Mul, 2)),
        TokenKind::Slash => Some((BinaryOperator::Div, 2)),
        TokenKind::Plus => Some((BinaryOperator::Add, 3)),
        TokenKind::Minus => Some((BinaryOperator::Sub, 3)),
        TokenKind::LessThan => Some((BinaryOperator::Less, 4)),
        TokenKind::LessEqual => Some((BinaryOperator::LessEqual, 4)),
        TokenKind::GreaterThan => Some((BinaryOperator::Greater, 4)),
        TokenKind::GreaterEqual => Some((BinaryOperator::GreaterEqual, 4)),
        TokenKind::Equals => Some((BinaryOperator::Equal, 5)),
        TokenKind::Hash => Some((BinaryOperator::NotEqual, 5)),
        TokenKind::Ampersand => Some((BinaryOperator::And, 6)),
        TokenKind::Pipe => Some((BinaryOperator::Or, 7)),
        _ => None,
    }
}

impl Parser {
    /// Parses an expression.
    ///
    /// This is the main entry point for expression parsing; an
    /// expression is a ternary at the loosest level.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_ternary()
    }

    /// Parses a ternary expression.
    ///
    /// The condition parses at or-level (one level below the ternary);
    /// both branches recurse into another ternary, making the operator
    /// right-associative: `a ? b : c ? d : e` groups as
    /// `a ? b : (c ? d : e)`.
    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_binary_expr(PRECEDENCE_OR)?;

        if !matches!(self.current_kind(), TokenKind::Question) {
            return Ok(condition);
        }
        self.advance();

        let then_branch = self.parse_ternary()?;
        self.expect(&TokenKind::Colon)?;
        let else_branch = self.parse_ternary()?;

        let span = condition.span.to(else_branch.span);
        Ok(Expr::new(
            ExprKind::Ternary {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            span,
        ))
    }

    /// Parses binary operators with precedence climbing, respecting
    /// minimum precedence.
    ///
    /// 1. Parse a unary expression as the left-hand side
    /// 2. While the current token is an operator bound at least as
    ///    tightly as `min_precedence`: consume it, recursively parse the
    ///    right-hand side, and build a BinaryOp node
    ///
    /// The right-hand side parses at `precedence - 1` so an operator
    /// binds tighter than itself and `a - b - c` groups as
    /// `(a - b) - c`. The exception is `^`, whose right operand parses
    /// at the operator's own level so a further `^` nests to the right:
    /// `2 ^ 2 ^ 3` groups as `2 ^ (2 ^ 3)`.
    fn parse_binary_expr(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary_expr()?;

        loop {
            let Some((op, precedence)) = binary_op(self.current_kind()) else {
                break;
            };
            if precedence > min_precedence {
                break;
            }
            self.advance();

            let next_min = if op == BinaryOperator::Pow {
                precedence
            } else {
                precedence - 1
            };
            let right = self.parse_binary_expr(next_min)?;

            let span = left.span.to(right.span);
            left = Expr::new(
                ExprKind::BinaryOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Parses a unary expression.
    ///
    /// Prefix `-` is right-associative and binds tighter than `^`, so
    /// `-2 ^ 2` groups as `(-2) ^ 2`. Negation applied directly to an
    /// integer literal folds into the literal.
    fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        if !matches!(self.current_kind(), TokenKind::Minus) {
            return self.parse_call_expr();
        }

        let start_span = self.current_span();
        self.advance();

        if let TokenKind::IntLiteral(value) = self.current_kind() {
            let value = *value;
            let literal_span = self.current_span();
            self.advance();
            return Ok(Expr::new(
                ExprKind::IntLiteral(-value),
                start_span.to(literal_span),
            ));
        }

        let operand = self.parse_unary_expr()?;
        let span = start_span.to(operand.span);
        Ok(Expr::new(
            ExprKind::UnaryOp {
                op: UnaryOperator::Neg,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Parses a primary expression followed by any number of postfix
    /// call argument lists.
    ///
    /// Calls chain left to right: `make_adder(2)(3)` wraps the first
    /// call as the callee of the second.
    fn parse_call_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary_expr()?;

        while matches!(self.current_kind(), TokenKind::LeftParen) {
            expr = self.parse_call_args(expr)?;
        }

        Ok(expr)
    }

    /// Parses one parenthesized argument list and wraps `callee` in a
    /// call node.
    ///
    /// # Grammar
    ///
    /// ```text
    /// call      = callee "(" [ expression { "," expression } ] ")"
    /// ```
    fn parse_call_args(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut args = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if matches!(self.current_kind(), TokenKind::RightParen) {
                    break;
                }
                self.expect(&TokenKind::Comma)?;
            }
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RightParen)?;

        let span = callee.span.to(end_span);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    /// Parses a primary expression (atom).
    ///
    /// Primary expressions are the basic building blocks: literals,
    /// names, parenthesized expressions, and function literals.
    ///
    /// Also used by the `var`/`set` parser, whose target is a primary
    /// that must turn out to be a name.
    pub(super) fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind() {
            TokenKind::IntLiteral(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::new(ExprKind::IntLiteral(value), start_span))
            }
            TokenKind::BoolLiteral(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::new(ExprKind::BoolLiteral(value), start_span))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Expr::new(ExprKind::NullLiteral, start_span))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::new(ExprKind::Identifier(name), start_span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let close_span = self.current_span();
                self.expect(&TokenKind::RightParen)?;

                // Return the inner expression with a span covering the
                // parens.
                Ok(Expr::new(inner.kind, start_span.to(close_span)))
            }
            TokenKind::Func => self.parse_func_literal(),
            _ => Err(ParseError::unexpected_token(
                self.current_kind(),
                start_span,
            )),
        }
    }

    /// Parses a function literal.
    ///
    /// # Grammar
    ///
    /// ```text
    /// func = "func" "(" [ NAME { "," NAME } ] ")" block
    /// ```
    fn parse_func_literal(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Func)?;

        let params = self.parse_param_list()?;
        let body = self.parse_block()?;

        let span = start_span.to(body.span);
        Ok(Expr::new(
            ExprKind::Func {
                params: Rc::new(params),
                body: Rc::new(body),
            },
            span,
        ))
    }

    /// Parses a parenthesized, comma-separated parameter name list.
    ///
    /// Shared between function literals and `def` statements.
    pub(super) fn parse_param_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                params.push(self.expect_name()?);
                if matches!(self.current_kind(), TokenKind::RightParen) {
                    break;
                }
                self.expect(&TokenKind::Comma)?;
            }
        }

        self.expect(&TokenKind::RightParen)?;
        Ok(params)
    }
}
