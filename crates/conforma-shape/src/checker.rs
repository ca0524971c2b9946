//! # Shape Checker — Depth-First Walk With Path-Tracked Failures
//!
//! The checking algorithm for [`ShapeDefinition`]: walk the input object
//! property by property in declaration order, recursing into nested shapes,
//! and stop at the first nonconformity. Failures produced by deeper frames
//! are re-surfaced untouched except for the key prepended to their path as
//! the recursion unwinds, so the finished record reads root-to-leaf.
//!
//! Recursion depth is bounded by the statically authored definition, not by
//! the input, so a check always terminates in time proportional to the
//! definition size times the input's matching substructure.

use serde_json::Value;

use conforma_core::{shared, Descriptor, ObjectDescriptor};

use crate::definition::{ShapeDefinition, ShapeEntry};
use crate::failure::ConformityFailure;

impl ShapeDefinition {
    /// Check `value` against this definition.
    ///
    /// Properties present in `value` but not declared here are ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`ConformityFailure`] for the first property (in
    /// declaration order, depth-first) that does not conform: a non-object
    /// input, a missing non-optional property, or a present value rejected
    /// by its descriptor.
    pub fn check(&self, value: &Value) -> Result<(), ConformityFailure> {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                return Err(ConformityFailure::new(
                    Vec::new(),
                    shared(ObjectDescriptor),
                    value.clone(),
                ));
            }
        };

        for (key, entry) in &self.entries {
            match entry {
                ShapeEntry::Shape(nested) => match object.get(key) {
                    Some(inner) => {
                        if let Err(failure) = nested.check(inner) {
                            return Err(failure.prepend_path([key.as_str()]));
                        }
                    }
                    // A bare nested shape cannot be absent; only an
                    // Optional-wrapped descriptor entry can.
                    None => {
                        return Err(ConformityFailure::missing(
                            vec![key.clone()],
                            shared(ObjectDescriptor),
                        ));
                    }
                },
                ShapeEntry::Descriptor(descriptor) => match object.get(key) {
                    None if descriptor.is_optional() => {}
                    None => {
                        return Err(ConformityFailure::missing(
                            vec![key.clone()],
                            descriptor.clone(),
                        ));
                    }
                    Some(present) => {
                        if !descriptor.check_conformity(present) {
                            return Err(ConformityFailure::new(
                                vec![key.clone()],
                                descriptor.clone(),
                                present.clone(),
                            ));
                        }
                    }
                },
            }
        }

        Ok(())
    }
}
