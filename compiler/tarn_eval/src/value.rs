//! Runtime values for the Tarn interpreter.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::environment::Environment;

/// Built-in procedure signature.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// Runtime value in the Tarn interpreter.
///
/// A closed sum type: exactly one payload exists per value, so reading a
/// field that does not belong to the active kind is impossible by
/// construction.
#[derive(Clone)]
pub enum Value {
    /// Identifier name, stored verbatim.
    Symbol(String),
    /// String literal content, stored verbatim.
    Str(String),
    /// Numeric value. Tarn has a single numeric domain.
    Number(f64),
    /// Ordered sequence of values. Built empty and appended to by its
    /// owner; elements are deep-owned.
    List(Vec<Value>),
    /// Built-in procedure.
    Builtin(BuiltinFn),
    /// User-defined function closing over an environment.
    Lambda(LambdaValue),
}

/// User-defined function value.
///
/// Holds a shared reference to the environment it closes over; the
/// environment's lifetime is managed independently of any value that
/// references it. Parameter and body storage land here once the
/// evaluator grows lambda support.
#[derive(Clone)]
pub struct LambdaValue {
    /// Captured environment.
    pub env: Rc<RefCell<Environment>>,
}

impl LambdaValue {
    /// Create a lambda closing over the given environment.
    pub fn new(env: Rc<RefCell<Environment>>) -> Self {
        LambdaValue { env }
    }
}

impl fmt::Debug for LambdaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaValue").finish_non_exhaustive()
    }
}

impl Value {
    /// Get the kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Symbol(_) => "symbol",
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::List(_) => "list",
            Value::Builtin(_) => "procedure",
            Value::Lambda(_) => "lambda",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(s) => write!(f, "Symbol({:?})", s),
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::List(items) => write!(f, "List({:?})", items),
            Value::Builtin(_) => write!(f, "Builtin(<fn>)"),
            Value::Lambda(l) => write!(f, "Lambda({:?})", l),
        }
    }
}

/// Human-readable rendering, used for diagnostics and the REPL printer.
///
/// Lists render with a space after the opening parenthesis and after every
/// element: `( hello 42 )`, and the empty list is `(  )`. Existing golden
/// output depends on this exact spacing.
///
/// Numbers use Rust's shortest round-trippable decimal form, so `42.0`
/// renders as `42`. The JSON encoder follows the same policy.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(s) | Value::Str(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::List(items) => {
                write!(f, "( ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, " )")
            }
            Value::Builtin(_) => write!(f, "<procedure>"),
            Value::Lambda(_) => write!(f, "<lambda>"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}
