//! Lexical analyzer for the minilang language.
//!
//! This module provides the [`Lexer`] struct which converts source text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes identifiers, keywords, integer literals, and punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace and comments
//!
//! # Supported Tokens
//!
//! - **Identifiers**: an ASCII letter followed by ASCII letters, digits,
//!   or underscores. The words `true`, `false`, and `null` become literal
//!   tokens; the statement keywords (`var`, `set`, `if`, ...) become
//!   keyword tokens.
//! - **Integer literals**: sequences of ASCII digits, decoded as `i64`.
//!   Literals exceeding the `i64` range are the lexer's only error.
//! - **Punctuation**: `<=` and `>=` are the only two-character lexemes;
//!   every other symbol is a single character. Characters with no meaning
//!   are passed through as [`TokenKind::Unknown`] for the parser to
//!   reject.
//! - **Comments**: `!` through the end of the line.
//! - **Whitespace**: space, tab, carriage return, and line feed are
//!   discarded.
//!
//! # Examples
//!
//! ```
//! use minilang::lexer::Lexer;
//! use minilang::token::TokenKind;
//!
//! let mut lexer = Lexer::new("print 5;");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert!(matches!(tokens[0].kind, TokenKind::Print));
//! assert!(matches!(tokens[1].kind, TokenKind::IntLiteral(5)));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace and comment handling
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes minilang source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used
/// once per source text.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and
    /// column numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// Consumes the input from start to end. The returned vector always
    /// ends with a [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if an integer literal does not fit in
    /// `i64`. Nothing else fails: unknown characters become
    /// [`TokenKind::Unknown`] tokens for the parser to reject.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }
}
