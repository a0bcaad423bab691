//! Abstract Syntax Tree definitions for the minilang language.
//!
//! This module defines the data structures that represent parsed minilang
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::interpreter`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node containing the top-level statements
//! - [`Stmt`] - Statements (blocks, declarations, conditionals, loops, ...)
//! - [`Expr`] - Expressions (literals, names, operators, function
//!   literals, calls)
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting.
//!
//! Ownership is tree-shaped: parents own their children. The two
//! exceptions are function literal parameter lists and bodies, which are
//! reference-counted so that evaluated function values can share the
//! subtree and outlive the program walk that created them.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Walks the AST to produce output

mod expr;
mod program;
mod stmt;

pub use expr::{BinaryOperator, Expr, ExprKind, UnaryOperator};
pub use program::Program;
pub use stmt::{Stmt, StmtKind};
