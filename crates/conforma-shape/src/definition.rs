//! # Shape Definition — Declarative, Recursive Property Mapping
//!
//! A [`ShapeDefinition`] maps property names to what each property must be:
//! either a descriptor leaf or a nested shape, tagged explicitly as
//! [`ShapeEntry`] so the checker resolves the two cases by matching, never
//! by runtime type inspection.
//!
//! Entries keep declaration order. Order does not affect whether a value
//! conforms, but it fixes which of several invalid properties the fail-fast
//! checker reports first, keeping diagnostics reproducible.
//!
//! A definition is itself a descriptor (name `"object"`, conformity = the
//! check passes), so a whole nested object can be wrapped in
//! `OptionalDescriptor` or listed as a union member like any other
//! descriptor.

use serde_json::Value;

use conforma_core::{DefinitionError, Descriptor, DescriptorRef};

/// One declared property: a descriptor leaf or a nested shape.
#[derive(Debug, Clone)]
pub enum ShapeEntry {
    /// The property's value must conform to this descriptor.
    Descriptor(DescriptorRef),
    /// The property's value must itself conform to this nested shape.
    Shape(ShapeDefinition),
}

/// Immutable mapping from property name to [`ShapeEntry`], in declaration
/// order, with unique keys.
#[derive(Debug, Clone, Default)]
pub struct ShapeDefinition {
    pub(crate) entries: Vec<(String, ShapeEntry)>,
}

impl ShapeDefinition {
    /// An empty definition. An empty shape accepts any object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property whose value must conform to `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::DuplicateKey`] if `name` was already
    /// declared on this definition.
    pub fn field(
        self,
        name: impl Into<String>,
        descriptor: DescriptorRef,
    ) -> Result<Self, DefinitionError> {
        self.insert(name.into(), ShapeEntry::Descriptor(descriptor))
    }

    /// Declare a property whose value must conform to a nested shape.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::DuplicateKey`] if `name` was already
    /// declared on this definition.
    pub fn nested(
        self,
        name: impl Into<String>,
        shape: ShapeDefinition,
    ) -> Result<Self, DefinitionError> {
        self.insert(name.into(), ShapeEntry::Shape(shape))
    }

    fn insert(mut self, name: String, entry: ShapeEntry) -> Result<Self, DefinitionError> {
        if self.entries.iter().any(|(existing, _)| *existing == name) {
            return Err(DefinitionError::DuplicateKey { name });
        }
        self.entries.push((name, entry));
        Ok(self)
    }

    /// Declared entries, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ShapeEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Look up a declared entry by property name.
    pub fn get(&self, name: &str) -> Option<&ShapeEntry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, entry)| entry)
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no properties are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Descriptor for ShapeDefinition {
    fn name(&self) -> String {
        "object".to_string()
    }

    fn check_conformity(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }
}
