//! The minilang interpreter library.
//!
//! Minilang is a small imperative teaching language: integers, booleans,
//! null, first-class functions with closures, block-scoped variables,
//! conditionals, loops with non-local control flow, and a handful of
//! built-ins. This library provides the full pipeline from source text to
//! observable output:
//!
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`interpreter`] - Tree-walking evaluator
//! - [`token`] - Token types and source location tracking
//! - [`driver`] - Source-in, output-out entry points
//!
//! # Example
//!
//! ```
//! use minilang::interpreter::Interpreter;
//! use minilang::lexer::Lexer;
//! use minilang::parser::Parser;
//!
//! let source = "var a = 5; print a + 6;";
//!
//! // Lexical analysis
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize().expect("lex error");
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().expect("parse error");
//!
//! // Evaluation
//! let mut interpreter = Interpreter::new();
//! interpreter.eval_program(&program).expect("runtime error");
//! assert_eq!(interpreter.output().to_vec(), ["11"]);
//! ```
//!
//! For the common case there is a one-call surface in [`driver`]:
//!
//! ```
//! let output = minilang::driver::interpret("print 2 ^ 2 ^ 3;").unwrap();
//! assert_eq!(output, ["256"]);
//! ```

pub mod ast;
pub mod driver;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod token;
