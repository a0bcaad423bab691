//! Source-in, output-out entry points.
//!
//! This module is the seam between the language core and its shells
//! (CLI, REPL, tests). A [`Session`] owns a persistent
//! [`Interpreter`] and runs source texts against it; [`interpret`] is
//! the one-shot convenience. Errors from every phase unify into
//! [`InterpretError`], which exposes the one-line diagnostic message and
//! the offending span for rendering.
//!
//! # Examples
//!
//! ```
//! use minilang::driver::Session;
//!
//! let mut session = Session::new();
//! let output = session.interpret("def twice(n) { return 2 * n; }").unwrap();
//! assert!(output.is_empty());
//!
//! // Definitions persist across inputs within one session.
//! let output = session.interpret("print twice(21);").unwrap();
//! assert_eq!(output, ["42"]);
//! ```

use std::fmt;

use crate::interpreter::{Interpreter, RuntimeError};
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::token::Span;

/// An error from any phase of a run.
///
/// This enum unifies lexical, syntactic, and runtime failures to
/// simplify error handling in the shells. Every variant carries the
/// one-line message contract of the language.
#[derive(Debug)]
pub enum InterpretError {
    /// An error during tokenization.
    Lex(LexError),
    /// An error during parsing.
    Parse(ParseError),
    /// An error during evaluation.
    Runtime(RuntimeError),
}

impl InterpretError {
    /// The one-line diagnostic message.
    pub fn message(&self) -> &str {
        match self {
            InterpretError::Lex(error) => error.message(),
            InterpretError::Parse(error) => error.message(),
            InterpretError::Runtime(error) => error.message(),
        }
    }

    /// The source location of the failure, when one exists.
    pub fn span(&self) -> Option<Span> {
        match self {
            InterpretError::Lex(error) => Some(error.span()),
            InterpretError::Parse(error) => Some(error.span()),
            InterpretError::Runtime(error) => error.span(),
        }
    }
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretError::Lex(error) => write!(f, "{}", error),
            InterpretError::Parse(error) => write!(f, "{}", error),
            InterpretError::Runtime(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<LexError> for InterpretError {
    fn from(error: LexError) -> Self {
        InterpretError::Lex(error)
    }
}

impl From<ParseError> for InterpretError {
    fn from(error: ParseError) -> Self {
        InterpretError::Parse(error)
    }
}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self {
        InterpretError::Runtime(error)
    }
}

/// A persistent interpreter session.
///
/// The interpreter's global frame survives across
/// [`interpret`](Session::interpret) calls, so names defined by one
/// input - including closures - remain usable from the next. Errors are
/// fatal to the failing run only; the session continues with the next
/// input.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// Creates a session with a fresh interpreter.
    pub fn new() -> Self {
        Session {
            interpreter: Interpreter::new(),
        }
    }

    /// Runs one source text and returns its printed output.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntactic, or runtime failure as an
    /// [`InterpretError`].
    pub fn interpret(&mut self, source: &str) -> Result<Vec<String>, InterpretError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;

        let mut parser = Parser::new(tokens);
        let program = parser.parse()?;

        self.interpreter.eval_program(&program)?;
        Ok(self.interpreter.output().to_vec())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one source text on a fresh session and returns its printed
/// output.
pub fn interpret(source: &str) -> Result<Vec<String>, InterpretError> {
    Session::new().interpret(source)
}
