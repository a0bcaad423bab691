//! Environment frames and name resolution.
//!
//! An environment is an ordered chain of frames. Each frame maps names
//! to values and optionally links to its parent; lookup and assignment
//! walk child to parent, while definition touches only the innermost
//! frame.
//!
//! Frames are reference-counted ([`Rc<RefCell<_>>`]) rather than owned
//! by their children because function values capture the frame that was
//! current at their definition, and that frame must stay alive for as
//! long as the closure is reachable - arbitrarily long after the block
//! that created it has exited. The chain is acyclic by construction: a
//! new frame always points at an already-existing parent.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::RuntimeError;
use super::value::Value;

/// A single scope's name-to-value frame, linked to its parent frame.
pub struct Environment {
    /// Bindings for this scope.
    values: HashMap<String, Value>,
    /// The enclosing scope, absent for the global frame.
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates the top-level (global) frame.
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            parent: None,
        }
    }

    /// Creates a frame enclosed by `parent`, shared and ready to become
    /// the interpreter's current frame.
    pub fn with_parent(parent: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            parent: Some(parent),
        }))
    }

    /// Introduces `name` in this frame.
    ///
    /// # Errors
    ///
    /// Fails with `` `name` already defined. `` if this frame already
    /// binds the name. Shadowing an outer binding is fine; redefining
    /// within one scope is not.
    pub fn define(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        if self.values.contains_key(name) {
            return Err(RuntimeError::already_defined(name));
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Seeds a binding without the redefinition check.
    ///
    /// Only used while populating the global frame with built-ins.
    pub(super) fn insert(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }

    /// Updates the nearest enclosing binding of `name`.
    ///
    /// # Errors
    ///
    /// Fails with `` `name` not defined. `` if no frame in the chain
    /// binds the name.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(RuntimeError::not_defined(name)),
        }
    }

    /// Looks `name` up through the frame chain.
    ///
    /// # Errors
    ///
    /// Fails with `` `name` not defined. `` if no frame binds the name.
    pub fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().get(name),
            None => Err(RuntimeError::not_defined(name)),
        }
    }

    /// Returns a shared handle to the parent frame, if any.
    pub(super) fn parent(&self) -> Option<Rc<RefCell<Environment>>> {
        self.parent.as_ref().map(Rc::clone)
    }

    /// Renders this frame's bindings for debugging, keys sorted.
    pub(super) fn render(&self) -> String {
        let mut names: Vec<&String> = self.values.keys().collect();
        names.sort();
        let entries: Vec<String> = names
            .iter()
            .map(|name| format!("{}: {}", name, self.values[name.as_str()]))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
