//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can
//! occur during tokenization.

use crate::token::Span;

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// The lexer is nearly total: the only failure is an integer literal too
/// large for `i64`.
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
}

impl LexError {
    /// Creates an error for an integer literal that does not fit `i64`.
    pub(super) fn integer_overflow(literal: &str, span: Span) -> Self {
        LexError {
            message: format!("Integer literal `{}` is too large.", literal),
            span,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
