//! # Leaf Descriptors — Scalar and Aggregate Kind Tests
//!
//! The primitive end of the descriptor algebra: one unit struct per JSON
//! value kind, each implementing [`Descriptor`] with the corresponding kind
//! test. Leaves carry no configuration and no new algorithm; they exist so
//! the combinators and the object-shape layer have something to compose.
//!
//! `integer` is the one refinement: a JSON number representable as `i64` or
//! `u64`. The value inferer prefers it over `number` for integral inputs,
//! and the deliberate `integer`/`number` overlap is what the exhaustive
//! union check detects as ambiguity.

use serde_json::Value;

use crate::descriptor::Descriptor;

/// Accepts exactly JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullDescriptor;

impl Descriptor for NullDescriptor {
    fn name(&self) -> String {
        "null".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        value.is_null()
    }
}

/// Accepts JSON booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanDescriptor;

impl Descriptor for BooleanDescriptor {
    fn name(&self) -> String {
        "boolean".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        value.is_boolean()
    }
}

/// Accepts any JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberDescriptor;

impl Descriptor for NumberDescriptor {
    fn name(&self) -> String {
        "number".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        value.is_number()
    }
}

/// Accepts JSON numbers representable as `i64` or `u64`.
///
/// Every conforming value also conforms to [`NumberDescriptor`]; the overlap
/// is intentional (see the module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerDescriptor;

impl Descriptor for IntegerDescriptor {
    fn name(&self) -> String {
        "integer".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        value.is_i64() || value.is_u64()
    }
}

/// Accepts JSON strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDescriptor;

impl Descriptor for StringDescriptor {
    fn name(&self) -> String {
        "string".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        value.is_string()
    }
}

/// Accepts JSON arrays, regardless of element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayDescriptor;

impl Descriptor for ArrayDescriptor {
    fn name(&self) -> String {
        "array".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        value.is_array()
    }
}

/// Accepts JSON objects, regardless of their properties.
///
/// Also the "expected" descriptor reported when an object-shape check
/// receives a non-object value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectDescriptor;

impl Descriptor for ObjectDescriptor {
    fn name(&self) -> String {
        "object".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        value.is_object()
    }
}
