//! JSON interchange for runtime values.
//!
//! Values map onto JSON's narrower type system:
//! - `Symbol` and `Str` encode as JSON strings (properly escaped), and any
//!   JSON string decodes as `Str`. The symbol/string distinction does not
//!   survive a round trip; JSON has no symbol concept.
//! - `Number` encodes as a bare JSON number token.
//! - `List` encodes as a JSON array, recursively.
//! - `Builtin` and `Lambda` collapse to the opaque marker `"<function>"`
//!   and are not reconstructable from JSON.
//!
//! JSON objects, booleans, and null have no value mapping; decoding them
//! fails. Every operation is all-or-nothing: no partial trees.

use thiserror::Error;

use crate::value::Value;

/// Marker emitted for callable values, which have no JSON form.
pub const FUNCTION_MARKER: &str = "<function>";

/// Largest magnitude at which every integer is exactly representable as
/// an `f64` (2^53). Integral numbers inside this range encode as JSON
/// integers; everything else finite encodes as a JSON double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Error converting between values and JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Input text is not syntactically valid JSON.
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Decode hit a JSON node kind with no value mapping.
    #[error("unsupported JSON type: {0}")]
    UnsupportedType(&'static str),

    /// NaN and infinities have no JSON number representation.
    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}

impl Value {
    /// Encode this value as a JSON tree.
    pub fn to_json(&self) -> Result<serde_json::Value, JsonError> {
        match self {
            Value::Symbol(s) | Value::Str(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Number(n) => encode_number(*n),
            Value::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.to_json()?);
                }
                Ok(serde_json::Value::Array(out))
            }
            Value::Builtin(_) | Value::Lambda(_) => {
                Ok(serde_json::Value::String(FUNCTION_MARKER.to_string()))
            }
        }
    }

    /// Encode this value as JSON text.
    pub fn to_json_string(&self) -> Result<String, JsonError> {
        Ok(self.to_json()?.to_string())
    }

    /// Decode JSON text into a value.
    pub fn from_json_str(text: &str) -> Result<Value, JsonError> {
        let node: serde_json::Value = serde_json::from_str(text)?;
        Value::from_json(&node)
    }

    /// Map a parsed JSON tree into a value.
    ///
    /// Strings decode as `Str`, never `Symbol`.
    pub fn from_json(node: &serde_json::Value) -> Result<Value, JsonError> {
        match node {
            serde_json::Value::String(s) => Ok(Value::Str(s.clone())),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or(JsonError::UnsupportedType("number")),
            serde_json::Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(Value::from_json(item)?);
                }
                Ok(Value::List(out))
            }
            serde_json::Value::Bool(_) => Err(JsonError::UnsupportedType("boolean")),
            serde_json::Value::Null => Err(JsonError::UnsupportedType("null")),
            serde_json::Value::Object(_) => Err(JsonError::UnsupportedType("object")),
        }
    }
}

/// Encode a float as a JSON number token.
///
/// Integral values in the exactly-representable range emit as integers,
/// so `42.0` becomes `42` on the wire; this matches the display policy in
/// [`Value`]'s `Display` impl.
fn encode_number(n: f64) -> Result<serde_json::Value, JsonError> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        return Ok(serde_json::Value::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or(JsonError::NonFiniteNumber(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_atoms() {
        let sym = Value::Symbol("hello".to_string());
        assert_eq!(sym.to_json_string().unwrap(), "\"hello\"");

        let s = Value::Str("world".to_string());
        assert_eq!(s.to_json_string().unwrap(), "\"world\"");
    }

    #[test]
    fn test_encode_escapes_strings() {
        let tricky = Value::Str("say \"hi\"\n".to_string());
        let text = tricky.to_json_string().unwrap();
        assert_eq!(text, "\"say \\\"hi\\\"\\n\"");
        // The escaped form must parse back to the original text
        assert_eq!(
            Value::from_json_str(&text).unwrap(),
            Value::Str("say \"hi\"\n".to_string())
        );
    }

    #[test]
    fn test_encode_number_policy() {
        assert_eq!(Value::Number(42.0).to_json_string().unwrap(), "42");
        assert_eq!(Value::Number(-7.0).to_json_string().unwrap(), "-7");
        assert_eq!(Value::Number(2.5).to_json_string().unwrap(), "2.5");
        // Integral but outside the exact range stays a double token
        let big = Value::Number(1e300).to_json_string().unwrap();
        assert_eq!(
            Value::from_json_str(&big).unwrap(),
            Value::Number(1e300)
        );
    }

    #[test]
    fn test_decode_recovers_exact_double() {
        // Needs serde_json's float_roundtrip parser; the default fast
        // path can come back a ulp off for doubles like this one
        let n = -243.313_623_368_201_66_f64;
        let text = Value::Number(n).to_json_string().unwrap();
        assert_eq!(Value::from_json_str(&text).unwrap(), Value::Number(n));
    }

    #[test]
    fn test_encode_non_finite_fails() {
        assert!(matches!(
            Value::Number(f64::NAN).to_json(),
            Err(JsonError::NonFiniteNumber(_))
        ));
        assert!(matches!(
            Value::Number(f64::INFINITY).to_json(),
            Err(JsonError::NonFiniteNumber(_))
        ));
    }

    #[test]
    fn test_encode_list_in_order() {
        let list = Value::List(vec![
            Value::Symbol("hello".to_string()),
            Value::Number(42.0),
        ]);
        assert_eq!(list.to_json_string().unwrap(), "[\"hello\",42]");
    }

    #[test]
    fn test_decode_string_is_never_symbol() {
        let decoded = Value::from_json_str("\"hello\"").unwrap();
        assert_eq!(decoded, Value::Str("hello".to_string()));
        assert_ne!(decoded, Value::Symbol("hello".to_string()));
    }

    #[test]
    fn test_decode_unsupported_types() {
        for (text, kind) in [
            ("{\"a\":1}", "object"),
            ("true", "boolean"),
            ("false", "boolean"),
            ("null", "null"),
        ] {
            match Value::from_json_str(text) {
                Err(JsonError::UnsupportedType(got)) => assert_eq!(got, kind),
                other => panic!("expected unsupported-type error for {}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_decode_unsupported_aborts_whole_list() {
        // One bad element poisons the entire decode; no partial list
        assert!(matches!(
            Value::from_json_str("[1, 2, null]"),
            Err(JsonError::UnsupportedType("null"))
        ));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            Value::from_json_str("not json"),
            Err(JsonError::Malformed(_))
        ));
        assert!(matches!(
            Value::from_json_str("[1, 2"),
            Err(JsonError::Malformed(_))
        ));
    }
}
