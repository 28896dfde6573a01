use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::object::core::Object};

/// A shared, mutable handle to an [`Environment`].
///
/// Environments are shared: every function value holding a scope keeps it
/// alive, and a closure mutating a captured binding is visible through every
/// other handle to the same scope.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical scope: named bindings plus an optional enclosing scope.
///
/// Environments form a tree rooted at the program-global scope and grow
/// downward on each function call. Lookups walk outward; `let` writes stay
/// local; `assign` writes into the scope that owns the name.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates the program-global scope.
    #[must_use]
    pub fn global() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a fresh scope enclosed by `outer`.
    ///
    /// Used at every function call to hold the parameter bindings; the new
    /// scope keeps `outer` alive for as long as it is itself alive.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(), outer: Some(Rc::clone(outer)) }))
    }

    /// Looks `name` up through the scope chain, innermost first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    ///
    /// This is what `let` and function-parameter binding use.
    pub fn set(&mut self, name: &str, value: Object) {
        self.store.insert(name.to_owned(), value);
    }

    /// Re-binds `name` in the nearest enclosing scope that already contains
    /// it and returns the new value. If no scope owns the name, the result
    /// is an Error value instead.
    pub fn assign(&mut self, name: &str, value: Object) -> Object {
        if self.store.contains_key(name) {
            self.store.insert(name.to_owned(), value.clone());
            return value;
        }

        match &self.outer {
            Some(outer) => outer.borrow_mut().assign(name, value),
            None => Object::Error(RuntimeError::UndefinedAssignment { name: name.to_owned() }),
        }
    }
}
