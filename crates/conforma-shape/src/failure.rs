//! # Conformity Failure — One Located, Structured Nonconformity
//!
//! [`ConformityFailure`] reports exactly one violation: where it happened
//! (the property path from the checked root), what was expected (the
//! descriptor), and what was actually there (the raw value plus its inferred
//! descriptor, or the absent-marker for a missing property).
//!
//! ## Invariants
//!
//! - The record is immutable. [`ConformityFailure::prepend_path`] builds a
//!   new record; intermediate recursion frames never alter a record already
//!   returned by a deeper frame, since callers above may hold it (say, for
//!   logging) while it propagates.
//! - The actual descriptor is inferred from the value only when the caller
//!   does not already supply it; on the recursive path the checker usually
//!   knows it and skips the inference.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use conforma_core::{infer, Descriptor, DescriptorRef};

/// Root label used by [`ConformityFailure::path_string`].
const PATH_ROOT: &str = "value";

/// Placeholder rendered for a property that was absent from the input.
const MISSING: &str = "<missing>";

/// Structured report of a single nonconformity found by a shape check.
#[derive(Debug, Clone)]
pub struct ConformityFailure {
    /// Property chain from the checked root to the failure point.
    path: Vec<String>,
    /// The descriptor the value was expected to conform to.
    expected: DescriptorRef,
    /// Descriptor of the value actually found; `None` for a missing property.
    actual: Option<DescriptorRef>,
    /// The nonconforming raw value; `None` is the absent-marker.
    value: Option<Value>,
}

impl ConformityFailure {
    /// Failure for a present value, with the actual descriptor inferred.
    pub fn new(path: Vec<String>, expected: DescriptorRef, value: Value) -> Self {
        let actual = infer(&value);
        Self {
            path,
            expected,
            actual: Some(actual),
            value: Some(value),
        }
    }

    /// Failure for a present value whose actual descriptor the caller
    /// already knows; skips the inference.
    pub fn with_actual(
        path: Vec<String>,
        expected: DescriptorRef,
        actual: DescriptorRef,
        value: Value,
    ) -> Self {
        Self {
            path,
            expected,
            actual: Some(actual),
            value: Some(value),
        }
    }

    /// Failure for a property that was absent from the input.
    pub fn missing(path: Vec<String>, expected: DescriptorRef) -> Self {
        Self {
            path,
            expected,
            actual: None,
            value: None,
        }
    }

    /// A new, independent record whose path is `segments` followed by this
    /// record's path. All other fields are preserved; `self` is untouched.
    ///
    /// The checker uses this while recursion unwinds, so the final path
    /// reads root-to-leaf.
    pub fn prepend_path<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path: Vec<String> = segments.into_iter().map(Into::into).collect();
        path.extend(self.path.iter().cloned());
        Self {
            path,
            expected: self.expected.clone(),
            actual: self.actual.clone(),
            value: self.value.clone(),
        }
    }

    /// Property chain from the checked root to the failure point.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Root-prefixed, dot-separated rendering of the path: `value.a.b`,
    /// or bare `value` for a failure at the checked root itself.
    pub fn path_string(&self) -> String {
        let mut rendered = String::from(PATH_ROOT);
        for segment in &self.path {
            rendered.push('.');
            rendered.push_str(segment);
        }
        rendered
    }

    /// The descriptor the value was expected to conform to.
    pub fn expected(&self) -> &DescriptorRef {
        &self.expected
    }

    /// Descriptor of the value actually found; `None` for a missing property.
    pub fn actual(&self) -> Option<&DescriptorRef> {
        self.actual.as_ref()
    }

    /// The nonconforming raw value; `None` for a missing property.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Serializable read-only view of this failure.
    pub fn snapshot(&self) -> FailureSnapshot {
        FailureSnapshot {
            path: self.path.clone(),
            path_string: self.path_string(),
            expected: self.expected.name(),
            actual: self.actual.as_ref().map(|d| d.name()),
            value: self.value.clone(),
        }
    }
}

impl fmt::Display for ConformityFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.actual, &self.value) {
            (Some(actual), Some(value)) => write!(
                f,
                "{} does not conform: expected {}, found {} ({value})",
                self.path_string(),
                self.expected.name(),
                actual.name(),
            ),
            _ => write!(
                f,
                "{} does not conform: expected {}, found {MISSING}",
                self.path_string(),
                self.expected.name(),
            ),
        }
    }
}

impl std::error::Error for ConformityFailure {}

/// Read-only, serializable snapshot of a [`ConformityFailure`].
#[derive(Debug, Clone, Serialize)]
pub struct FailureSnapshot {
    /// Property chain from the checked root to the failure point.
    pub path: Vec<String>,
    /// Root-prefixed, dot-separated path rendering.
    pub path_string: String,
    /// Name of the expected descriptor.
    pub expected: String,
    /// Name of the actual descriptor; `None` for a missing property.
    pub actual: Option<String>,
    /// The nonconforming raw value; `None` for a missing property.
    pub value: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use conforma_core::{shared, IntegerDescriptor, StringDescriptor};
    use serde_json::json;

    #[test]
    fn test_new_infers_actual_descriptor() {
        let failure = ConformityFailure::new(
            vec!["age".to_string()],
            shared(StringDescriptor),
            json!(41),
        );
        assert_eq!(failure.expected().name(), "string");
        assert_eq!(failure.actual().map(|d| d.name()).as_deref(), Some("integer"));
        assert_eq!(failure.value(), Some(&json!(41)));
    }

    #[test]
    fn test_with_actual_skips_inference() {
        let failure = ConformityFailure::with_actual(
            Vec::new(),
            shared(StringDescriptor),
            shared(IntegerDescriptor),
            json!(4.5),
        );
        // The supplied descriptor wins even when inference would disagree.
        assert_eq!(failure.actual().map(|d| d.name()).as_deref(), Some("integer"));
    }

    #[test]
    fn test_missing_has_no_value_and_no_actual() {
        let failure = ConformityFailure::missing(
            vec!["name".to_string()],
            shared(StringDescriptor),
        );
        assert!(failure.actual().is_none());
        assert!(failure.value().is_none());
    }

    #[test]
    fn test_prepend_path_is_non_mutating() {
        let failure = ConformityFailure::new(
            vec!["b".to_string()],
            shared(StringDescriptor),
            json!(5),
        );
        let prepended = failure.prepend_path(["a"]);
        assert_eq!(failure.path(), ["b"]);
        assert_eq!(prepended.path(), ["a", "b"]);
        assert_eq!(prepended.expected().name(), failure.expected().name());
        assert_eq!(prepended.value(), failure.value());
    }

    #[test]
    fn test_prepend_path_multiple_segments() {
        let failure =
            ConformityFailure::new(vec!["c".to_string()], shared(StringDescriptor), json!(5));
        let prepended = failure.prepend_path(["a", "b"]);
        assert_eq!(prepended.path(), ["a", "b", "c"]);
    }

    #[test]
    fn test_path_string_forms() {
        let root = ConformityFailure::new(Vec::new(), shared(StringDescriptor), json!(5));
        assert_eq!(root.path_string(), "value");

        let nested = root.prepend_path(["a", "b"]);
        assert_eq!(nested.path_string(), "value.a.b");
    }

    #[test]
    fn test_display_present_value() {
        let failure = ConformityFailure::new(
            vec!["name".to_string()],
            shared(StringDescriptor),
            json!(5),
        );
        let rendered = failure.to_string();
        assert_eq!(
            rendered,
            "value.name does not conform: expected string, found integer (5)"
        );
    }

    #[test]
    fn test_display_missing_value() {
        let failure = ConformityFailure::missing(
            vec!["name".to_string()],
            shared(StringDescriptor),
        );
        assert_eq!(
            failure.to_string(),
            "value.name does not conform: expected string, found <missing>"
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let failure = ConformityFailure::new(
            vec!["age".to_string()],
            shared(StringDescriptor),
            json!(41),
        );
        let encoded = serde_json::to_value(failure.snapshot()).unwrap();
        assert_eq!(
            encoded,
            json!({
                "path": ["age"],
                "path_string": "value.age",
                "expected": "string",
                "actual": "integer",
                "value": 41,
            })
        );
    }

    #[test]
    fn test_snapshot_of_missing_property() {
        let failure = ConformityFailure::missing(
            vec!["name".to_string()],
            shared(StringDescriptor),
        );
        let snapshot = failure.snapshot();
        assert_eq!(snapshot.actual, None);
        assert_eq!(snapshot.value, None);
        assert_eq!(snapshot.path_string, "value.name");
    }
}
