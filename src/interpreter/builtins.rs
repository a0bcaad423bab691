//! The built-in function table.
//!
//! Built-ins are seeded into the global frame when an interpreter is
//! created. Each entry declares its arity; the evaluator checks the
//! argument count before invoking the implementation, so the functions
//! here may index their argument slice freely.

use std::rc::Rc;

use super::Interpreter;
use super::env::Environment;
use super::error::RuntimeError;
use super::value::{Builtin, Value};

/// Every built-in, in registration order.
const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "less",
        arity: 2,
        call: builtin_less,
    },
    Builtin {
        name: "print_env",
        arity: 0,
        call: builtin_print_env,
    },
];

/// Seeds `globals` with the built-in table.
pub(super) fn install(globals: &mut Environment) {
    for builtin in BUILTINS {
        globals.insert(builtin.name.to_string(), Value::Builtin(*builtin));
    }
}

/// `less(a, b)`: integer comparison returning a boolean.
fn builtin_less(_interp: &mut Interpreter, args: &[Value]) -> Result<Value, RuntimeError> {
    match (&args[0], &args[1]) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a < b)),
        _ => Err(RuntimeError::operands_must_be_integers()),
    }
}

/// `print_env()`: dumps the environment chain to stderr for debugging.
///
/// Frames print outermost first with sorted keys, so the global frame
/// leads and the current frame ends the dump.
fn builtin_print_env(interp: &mut Interpreter, _args: &[Value]) -> Result<Value, RuntimeError> {
    let mut frames = Vec::new();
    let mut current = Some(Rc::clone(&interp.env));
    while let Some(env) = current {
        frames.push(env.borrow().render());
        current = env.borrow().parent();
    }
    for frame in frames.iter().rev() {
        eprintln!("{}", frame);
    }
    Ok(Value::Null)
}
