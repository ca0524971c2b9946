//! # Value Inferer — Most Specific Descriptor for a Value
//!
//! Total, pure mapping from any runtime value to the most specific leaf
//! descriptor accepting it. Used by the failure record to fill in the
//! "actual type" diagnostic when the caller does not already know it; never
//! part of the conformity decision itself.

use serde_json::Value;

use crate::descriptor::{shared, DescriptorRef};
use crate::leaf::{
    ArrayDescriptor, BooleanDescriptor, IntegerDescriptor, NullDescriptor, NumberDescriptor,
    ObjectDescriptor, StringDescriptor,
};

/// Infer the most specific descriptor matching `value`.
///
/// Integral numbers infer `integer` rather than the broader `number`; every
/// other value kind maps to its leaf descriptor. Total — every JSON value
/// has an inference.
pub fn infer(value: &Value) -> DescriptorRef {
    match value {
        Value::Null => shared(NullDescriptor),
        Value::Bool(_) => shared(BooleanDescriptor),
        Value::Number(n) if n.is_i64() || n.is_u64() => shared(IntegerDescriptor),
        Value::Number(_) => shared(NumberDescriptor),
        Value::String(_) => shared(StringDescriptor),
        Value::Array(_) => shared(ArrayDescriptor),
        Value::Object(_) => shared(ObjectDescriptor),
    }
}
