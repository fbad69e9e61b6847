use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A scoped mapping from identifier names to runtime values.
///
/// Environments form a chain: lookups walk outward through the enclosing
/// links, while definitions always write to the innermost scope. The global
/// environment sits at the root; each function call extends the callee's
/// captured environment with a fresh child holding the parameter bindings.
/// Function values keep their defining environment alive through the shared
/// `Rc`, which is what makes closures observe bindings after the defining
/// scope has returned.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    enclosing: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates the root environment of a program run.
    #[must_use]
    pub fn global() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates an empty environment whose lookups fall through to
    /// `enclosing`.
    #[must_use]
    pub fn enclosed(enclosing: Rc<Self>) -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::new(HashMap::new()), enclosing: Some(enclosing) })
    }

    /// Resolves `name` against this environment and then its enclosing
    /// chain. Lookups never mutate any scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.bindings.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.enclosing.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` to `value` in this scope, replacing any previous binding
    /// of the same name here. Enclosing scopes are never written to.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }
}
