//! Variable storage for the interpreter.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Flat binding table mapping names to values.
///
/// Lambda values hold an `Rc<RefCell<Environment>>` to the environment
/// they close over, so the table's lifetime is independent of any value
/// referencing it. Scope chains and assignment rules live in the
/// evaluator, not here.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// Variable bindings.
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Define a variable, replacing any existing binding of the same name.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a variable by name.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
