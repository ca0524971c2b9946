//! # Descriptor Capability — The Shared Conformity Contract
//!
//! Every type descriptor in conforma implements the [`Descriptor`] trait.
//! The trait is deliberately small: a name, two conformity predicates, and an
//! optionality flag. Everything else — recursion, path tracking, failure
//! reporting — lives in the layers that compose descriptors, not in the
//! descriptors themselves.
//!
//! ## Design
//!
//! - `check_conformity` answers "does this value match under at least one
//!   acceptable interpretation". It is total: foreign or unexpected value
//!   kinds return `false`, they never panic.
//! - `check_conformity_exhaustive` answers the stricter "does this value
//!   match under exactly one unambiguous interpretation". Only descriptors
//!   with an ambiguity concept (unions, enumerations) override it; the
//!   provided default falls back to `check_conformity`.
//! - `is_optional` is consulted by containers deciding whether a missing
//!   property is acceptable. A descriptor's own conformity check never looks
//!   at it: a bare descriptor has no notion of property presence, only of
//!   value correctness.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// The capability contract shared by every type descriptor.
///
/// Implementations must be pure: `name()` is deterministic and derived only
/// from the descriptor's own structure, and both conformity predicates are
/// side-effect-free functions of the descriptor and the input value.
///
/// Descriptors are composed through [`DescriptorRef`], so implementations
/// must be `Send + Sync`. All descriptors shipped by conforma are immutable
/// after construction, which makes sharing them across validation calls (and
/// threads) safe by construction.
pub trait Descriptor: fmt::Debug + Send + Sync {
    /// Human-readable name of this descriptor, derived from its constituents.
    fn name(&self) -> String;

    /// Returns true iff `value` matches this descriptor under "at least one
    /// of the allowed shapes/values" semantics. Never panics.
    fn check_conformity(&self, value: &Value) -> bool;

    /// Returns true iff `value` matches this descriptor under exactly one
    /// unambiguous interpretation.
    ///
    /// Meaningful chiefly for unions and enumerations, which can contain
    /// overlapping alternatives. For every other descriptor the two
    /// predicates coincide, which is what this default provides.
    fn check_conformity_exhaustive(&self, value: &Value) -> bool {
        self.check_conformity(value)
    }

    /// Whether a container may treat a property carrying this descriptor as
    /// absent-able. Only the optional wrapper overrides this.
    fn is_optional(&self) -> bool {
        false
    }
}

/// A shared, immutable handle to a descriptor.
///
/// Descriptor trees are built once at startup and then read concurrently by
/// any number of validation calls; `Arc` makes that sharing explicit and
/// cheap.
pub type DescriptorRef = Arc<dyn Descriptor>;

/// Wrap a concrete descriptor into a shareable [`DescriptorRef`].
pub fn shared<D: Descriptor + 'static>(descriptor: D) -> DescriptorRef {
    Arc::new(descriptor)
}
