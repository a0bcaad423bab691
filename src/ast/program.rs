//! Top-level program structure for the minilang AST.

use super::stmt::Stmt;

/// The root node of a minilang program's AST.
///
/// A `Program` is the sequence of statements that appeared at the top
/// level of a source text. Unlike a block, evaluating a program does not
/// open a new scope: top-level declarations land in the interpreter's
/// global frame, which is how a REPL session accumulates definitions
/// across inputs.
#[derive(Debug)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Stmt>,
}
