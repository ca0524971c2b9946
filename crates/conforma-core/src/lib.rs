//! # conforma-core — Descriptor Algebra for Runtime Value Validation
//!
//! This crate defines the composable type descriptors that `conforma` checks
//! runtime values against. A descriptor is a small, immutable description of
//! an acceptable value: a scalar kind, an enumeration of literals, a union of
//! alternatives, or an optional wrapper. The object-shape layer in
//! `conforma-shape` builds on these primitives; this crate depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **One capability contract.** Every descriptor implements the
//!    [`Descriptor`] trait: a deterministic name, a conformity predicate, an
//!    exhaustive-conformity predicate, and an optionality flag. Composition
//!    happens through [`DescriptorRef`] (`Arc<dyn Descriptor>`), so descriptor
//!    trees are immutable and cheaply shared across threads.
//!
//! 2. **Conformity never panics.** `check_conformity` is a total predicate
//!    over `serde_json::Value`; input of an unexpected kind returns `false`,
//!    it never errors.
//!
//! 3. **Optionality is structural, not value-level.** `is_optional()` tells a
//!    container that a property may be absent. It is never consulted by a
//!    descriptor's own conformity check, which only ever judges a value that
//!    is actually present.
//!
//! 4. **Misuse fails at construction time.** A union with no members or a
//!    duplicate shape key is a [`DefinitionError`] from the constructor, not
//!    a silent always-false (or worse, always-true) descriptor.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `conforma-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod descriptor;
pub mod enumerated;
pub mod error;
pub mod infer;
pub mod leaf;
pub mod literal;
pub mod optional;
pub mod union;

// Re-export primary types for ergonomic imports.
pub use descriptor::{shared, Descriptor, DescriptorRef};
pub use enumerated::EnumeratedDescriptor;
pub use error::DefinitionError;
pub use infer::infer;
pub use leaf::{
    ArrayDescriptor, BooleanDescriptor, IntegerDescriptor, NullDescriptor, NumberDescriptor,
    ObjectDescriptor, StringDescriptor,
};
pub use literal::LiteralValue;
pub use optional::OptionalDescriptor;
pub use union::UnionDescriptor;
