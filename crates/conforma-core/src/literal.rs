//! # Literal Values — The Primitives an Enumeration May List
//!
//! [`LiteralValue`] is the closed set of literals an enumerated descriptor
//! can accept: null, booleans, numbers, and strings. Aggregates (arrays,
//! objects) are excluded on purpose — enumeration membership is strict
//! equality, and JSON aggregates have no identity to compare strictly, so
//! they are unrepresentable here rather than silently deep-compared.
//!
//! Numbers compare across representations: an `i64` literal `1` matches a
//! value parsed as the float `1.0`, because they denote the same number.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// A single acceptable literal inside an enumerated descriptor.
///
/// Serializes untagged, so an enumeration can be declared in data as a plain
/// JSON array of literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// The JSON `null` literal.
    Null,
    /// A boolean literal.
    Bool(bool),
    /// A numeric literal.
    Number(Number),
    /// A string literal.
    String(String),
}

impl LiteralValue {
    /// Strict equality between this literal and a runtime value.
    ///
    /// Variant-wise: a literal only ever matches a value of its own kind.
    /// No coercion is performed — `"1"` does not match `1`, `1` does not
    /// match `true`.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (LiteralValue::Null, Value::Null) => true,
            (LiteralValue::Bool(a), Value::Bool(b)) => a == b,
            (LiteralValue::Number(a), Value::Number(b)) => numbers_equal(a, b),
            (LiteralValue::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Numeric equality across the integer and float representations of the
/// same number. `serde_json::Number` keeps `1` and `1.0` in different
/// internal categories; both denote the number one.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Number(Number::from(value))
    }
}

impl From<u64> for LiteralValue {
    fn from(value: u64) -> Self {
        LiteralValue::Number(Number::from(value))
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}
