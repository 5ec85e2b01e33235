//! Environment chain: chained lexical scopes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::Value;

/// A lexical scope: bindings plus a link to the enclosing scope.
///
/// Scopes are shared (`Rc`) so closures can capture the environment they
/// were defined in; bindings are interior-mutable because `define`
/// extends the scope it runs in.
#[derive(Debug, Default)]
pub struct Env {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Env>>,
}

impl Env {
    /// A scope with no parent.
    pub fn root() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// A child scope of `parent`.
    pub fn child(parent: &Rc<Env>) -> Rc<Self> {
        Rc::new(Self {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(Rc::clone(parent)),
        })
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Look `name` up through the scope chain, innermost first.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(name))
    }
}
