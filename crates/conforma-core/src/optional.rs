//! # Optional Wrapper — Structural Absence, Delegated Conformity
//!
//! Wrapping a descriptor in [`OptionalDescriptor`] marks the property that
//! carries it as absent-able. That is the wrapper's entire contribution:
//! both conformity predicates delegate to the inner descriptor untouched.
//! In particular, `Optional(X).check_conformity(null)` is judged by `X` —
//! there is no "no value" special case here. Presence handling lives solely
//! in the object-shape checker, which consults `is_optional()` when a key
//! is missing.

use serde_json::Value;

use crate::descriptor::{Descriptor, DescriptorRef};

/// Marks the wrapped descriptor as "may be absent" at the container level.
#[derive(Debug, Clone)]
pub struct OptionalDescriptor {
    inner: DescriptorRef,
}

impl OptionalDescriptor {
    /// Wrap exactly one inner descriptor.
    pub fn new(inner: DescriptorRef) -> Self {
        Self { inner }
    }

    /// The wrapped descriptor.
    pub fn inner(&self) -> &DescriptorRef {
        &self.inner
    }
}

impl Descriptor for OptionalDescriptor {
    /// Inner name suffixed with `?`, parenthesized when the inner name
    /// contains a space so the suffix stays unambiguous: `string?`, but
    /// `(string | number)?`.
    fn name(&self) -> String {
        let inner = self.inner.name();
        if inner.contains(' ') {
            format!("({inner})?")
        } else {
            format!("{inner}?")
        }
    }

    fn check_conformity(&self, value: &Value) -> bool {
        self.inner.check_conformity(value)
    }

    fn check_conformity_exhaustive(&self, value: &Value) -> bool {
        self.inner.check_conformity_exhaustive(value)
    }

    fn is_optional(&self) -> bool {
        true
    }
}
