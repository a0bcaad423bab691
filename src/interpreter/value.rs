//! Runtime values and their semantics.
//!
//! This module defines [`Value`], the sum of everything a minilang
//! expression can evaluate to, together with truthiness, equality, and
//! the printable form used by `print`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::Stmt;

use super::Interpreter;
use super::env::Environment;
use super::error::RuntimeError;

/// The signature shared by built-in functions.
///
/// Built-ins receive the interpreter (for access to the environment
/// chain and output buffer) and their already-evaluated arguments; the
/// argument count has been checked against the declared arity before the
/// call.
pub type BuiltinFn = fn(&mut Interpreter, &[Value]) -> Result<Value, RuntimeError>;

/// A built-in function: an opaque callable with a declared arity.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the global frame binds this built-in to.
    pub name: &'static str,
    /// The number of arguments the built-in expects.
    pub arity: usize,
    /// The implementation.
    pub call: BuiltinFn,
}

impl PartialEq for Builtin {
    /// Built-ins compare by identity. Each is registered exactly once,
    /// so the registered name is the identity.
    fn eq(&self, other: &Builtin) -> bool {
        self.name == other.name
    }
}

/// A user function value: a closure.
///
/// The parameter list and body are shared with the function literal that
/// produced this value; `env` is the frame that was current when the
/// literal was evaluated, so the body sees its definition-time scope.
pub struct Function {
    /// The parameter names, in order.
    pub params: Rc<Vec<String>>,
    /// The body block.
    pub body: Rc<Stmt>,
    /// The captured definition environment.
    pub env: Rc<RefCell<Environment>>,
}

impl fmt::Debug for Function {
    /// Shallow on purpose: a recursive function's captured environment
    /// contains the function itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A boolean.
    Bool(bool),
    /// The null value.
    Null,
    /// A built-in function.
    Builtin(Builtin),
    /// A user function with its captured environment.
    Function(Rc<Function>),
}

impl Value {
    /// Truthiness: `false`, `null`, and the integer zero are falsy;
    /// every other value - including every function - is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null | Value::Int(0))
    }
}

impl PartialEq for Value {
    /// Structural equality on values of compatible kind.
    ///
    /// Integers and booleans compare by value; null equals only null;
    /// built-ins compare by identity. User functions compare by
    /// parameter list plus pointer identity of body and captured
    /// environment: two evaluations of the same literal in the same
    /// frame are equal, textually identical literals elsewhere are not.
    /// Values of different kinds are never equal - in particular
    /// `1 = true` is false.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => {
                a.params == b.params && Rc::ptr_eq(&a.body, &b.body) && Rc::ptr_eq(&a.env, &b.env)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// The printable form appended to the output buffer by `print`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(true) => write!(f, "true"),
            Value::Bool(false) => write!(f, "false"),
            Value::Null => write!(f, "null"),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Function(_) => write!(f, "<func>"),
        }
    }
}
