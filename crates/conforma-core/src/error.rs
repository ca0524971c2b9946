//! # Definition Errors — Construction-Time Misuse
//!
//! A malformed definition (an empty union, a duplicated shape key) is a
//! programmer error, not a property of any runtime value. The fallible
//! constructors surface these at build time so a malformed definition can
//! never silently judge values.

use thiserror::Error;

/// Misuse detected while constructing a descriptor or shape definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// A union descriptor was constructed with no members.
    #[error("union descriptor requires at least one member")]
    EmptyUnion,

    /// A shape definition already contains an entry for this property.
    #[error("duplicate property {name:?} in shape definition")]
    DuplicateKey {
        /// The property name that was declared twice.
        name: String,
    },
}
