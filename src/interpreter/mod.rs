//! Tree-walking evaluator for the minilang language.
//!
//! This module provides the [`Interpreter`] struct which walks the AST
//! produced by the [`crate::parser`] against a chain of environments,
//! implementing value semantics, lexical scoping, built-ins, function
//! application, and the three non-local control signals (`break`,
//! `continue`, `return`).
//!
//! # Overview
//!
//! An interpreter instance owns:
//! - the global [`Environment`] frame, seeded with built-ins and alive
//!   for the interpreter's lifetime, and
//! - an output buffer collecting the printable form of every `print`
//!   statement, which the driver reads after a run.
//!
//! Statement evaluation returns a [`Flow`] describing how control left
//! the statement; expression evaluation returns a [`Value`]. The control
//! signals propagate as `Flow` variants until the matching handler: a
//! loop consumes `Break`/`Continue`, a function call consumes `Return`,
//! and anything reaching the top level is a fatal error.
//!
//! # Examples
//!
//! ```
//! use minilang::interpreter::Interpreter;
//! use minilang::lexer::Lexer;
//! use minilang::parser::Parser;
//!
//! let tokens = Lexer::new("print 2 + 3;").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.eval_program(&program).unwrap();
//! assert_eq!(interpreter.output().to_vec(), ["5"]);
//! ```
//!
//! # Module Structure
//!
//! - [`value`] - Runtime values and their semantics
//! - [`env`] - Environment frames and name resolution
//! - [`builtins`] - The built-in function table
//! - [`error`] - Runtime error types
//! - `stmt` - Statement evaluation
//! - `expr` - Expression evaluation and application
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The AST this module walks
//! * [`crate::driver`] - Source-in, output-out entry points

mod builtins;
mod env;
mod error;
mod expr;
mod stmt;
mod value;

#[cfg(test)]
mod tests;

pub use env::Environment;
pub use error::{RuntimeError, RuntimeErrorKind};
pub use value::{Builtin, BuiltinFn, Function, Value};

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Program;
use crate::token::Span;

/// How control left a statement.
///
/// The three signal variants carry the span of the statement that raised
/// them, so a signal that escapes every handler can be reported at its
/// source.
#[derive(Debug)]
pub(crate) enum Flow {
    /// The statement ran to completion.
    Normal,
    /// A `break` is looking for its enclosing loop.
    Break(Span),
    /// A `continue` is looking for its enclosing loop.
    Continue(Span),
    /// A `return` is looking for its enclosing function call, carrying
    /// the return value.
    Return(Value, Span),
}

/// A tree-walking evaluator with a persistent global environment.
///
/// One interpreter evaluates any number of programs in sequence; names
/// defined at the top level of one program remain visible to the next,
/// which is what makes a REPL session coherent. An interpreter is not
/// safe for concurrent use; independent interpreters are fully isolated
/// from each other.
pub struct Interpreter {
    /// The current innermost environment frame.
    env: Rc<RefCell<Environment>>,
    /// Printed entries of the current run, already stringified.
    output: Vec<String>,
}

impl Interpreter {
    /// Creates an interpreter whose global frame is seeded with the
    /// built-in functions.
    pub fn new() -> Self {
        let mut globals = Environment::new();
        builtins::install(&mut globals);
        Interpreter {
            env: Rc::new(RefCell::new(globals)),
            output: Vec::new(),
        }
    }

    /// Evaluates a program.
    ///
    /// The output buffer is reset at the start of every run and is
    /// available through [`output`](Interpreter::output) afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] on the first semantic failure. A
    /// control signal escaping to this level is fatal: `Return from top
    /// level.`, `Break at top level.`, or `Continue at top level.`.
    pub fn eval_program(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.output.clear();
        for statement in &program.statements {
            match self.eval_stmt(statement)? {
                Flow::Normal => {}
                Flow::Return(_, span) => {
                    return Err(RuntimeError::return_from_top_level().with_span(span));
                }
                Flow::Break(span) => {
                    return Err(RuntimeError::break_at_top_level().with_span(span));
                }
                Flow::Continue(span) => {
                    return Err(RuntimeError::continue_at_top_level().with_span(span));
                }
            }
        }
        Ok(())
    }

    /// The entries printed by the most recent run.
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
