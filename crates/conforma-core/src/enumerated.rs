//! # Enumerated Descriptor — A Fixed Set of Acceptable Literals
//!
//! Accepts a value iff it is strictly equal to one of the listed literals.
//! The exhaustive predicate additionally requires the match to be unique:
//! if the accepted-values list itself contains duplicates, membership of
//! that value is ambiguous and the exhaustive check returns false.

use serde_json::Value;

use crate::descriptor::Descriptor;
use crate::literal::LiteralValue;

/// Descriptor accepting a fixed, ordered list of literal values.
#[derive(Debug, Clone)]
pub struct EnumeratedDescriptor {
    values: Vec<LiteralValue>,
    display_name: Option<String>,
}

impl EnumeratedDescriptor {
    /// Build an unnamed enumeration. Its name is the literal string `"enum"`;
    /// no richer name is synthesized from the member values.
    pub fn new(values: Vec<LiteralValue>) -> Self {
        Self {
            values,
            display_name: None,
        }
    }

    /// Build an enumeration with an explicit display name.
    pub fn named(values: Vec<LiteralValue>, display_name: impl Into<String>) -> Self {
        Self {
            values,
            display_name: Some(display_name.into()),
        }
    }

    /// The accepted literals, in declaration order.
    pub fn values(&self) -> &[LiteralValue] {
        &self.values
    }
}

impl Descriptor for EnumeratedDescriptor {
    fn name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| "enum".to_string())
    }

    fn check_conformity(&self, value: &Value) -> bool {
        self.values.iter().any(|literal| literal.matches(value))
    }

    /// True iff exactly one listed literal equals the input. The scan does
    /// not stop at the first match: a later duplicate must still be seen,
    /// because it makes membership ambiguous.
    fn check_conformity_exhaustive(&self, value: &Value) -> bool {
        let mut matched = false;
        for literal in &self.values {
            if literal.matches(value) {
                if matched {
                    return false;
                }
                matched = true;
            }
        }
        matched
    }
}
