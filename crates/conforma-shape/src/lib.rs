//! # conforma-shape — Recursive Object-Shape Validation
//!
//! Validates parsed JSON objects against a declaratively composed
//! [`ShapeDefinition`]: a recursive mapping from property name to either a
//! descriptor (from `conforma-core`) or a nested shape. A check either
//! passes or produces exactly one [`ConformityFailure`] locating the first
//! nonconforming property — depth-first, in declaration order — with the
//! full root-to-leaf property path.
//!
//! ## Design
//!
//! - **Built once, shared forever.** A definition is immutable after
//!   construction and `Send + Sync`; any number of threads may validate
//!   against it concurrently. No validation path mutates a definition.
//! - **Fail fast, never swallow.** The checker stops at the first violation
//!   and re-surfaces nested failures with path context prepended; it never
//!   aggregates, repairs, or discards them.
//! - **Open matching.** Properties present in the value but absent from the
//!   definition are ignored; a shape constrains what it names, nothing more.
//!
//! ## Example
//!
//! ```
//! use conforma_core::{shared, OptionalDescriptor, NumberDescriptor, StringDescriptor};
//! use conforma_shape::ShapeDefinition;
//!
//! let shape = ShapeDefinition::new()
//!     .field("name", shared(StringDescriptor))?
//!     .field("age", shared(OptionalDescriptor::new(shared(NumberDescriptor))))?;
//!
//! assert!(shape.check(&serde_json::json!({"name": "ada"})).is_ok());
//!
//! let failure = shape.check(&serde_json::json!({"name": 5})).unwrap_err();
//! assert_eq!(failure.path(), ["name"]);
//! assert_eq!(failure.path_string(), "value.name");
//! # Ok::<(), conforma_core::DefinitionError>(())
//! ```

pub mod checker;
pub mod definition;
pub mod failure;

pub use definition::{ShapeDefinition, ShapeEntry};
pub use failure::{ConformityFailure, FailureSnapshot};
