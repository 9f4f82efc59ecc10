//! Tarn runtime values
//!
//! Runtime value representation for the Tarn interpreter, plus JSON
//! interchange. The `Value` enum is the single datum type flowing through
//! evaluation; `Environment` is the binding table lambdas close over; the
//! `json` module maps values onto JSON's narrower type system (lossily,
//! where it must).

pub mod environment;
pub mod json;
pub mod value;

// Re-exports
pub use environment::Environment;
pub use json::{JsonError, FUNCTION_MARKER};
pub use value::{BuiltinFn, LambdaValue, Value};
