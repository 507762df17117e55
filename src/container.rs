#![deny(missing_docs)]

//! # Output Container
//!
//! Designates where newly generated composite types are placed: a package
//! scope plus an order-preserving registry of the types generated into it.

use crate::types::TypeRef;
use indexmap::IndexMap;

/// The placement target for generated composite types.
#[derive(Debug, Clone, Default)]
pub struct OutputContainer {
    package: String,
    registry: IndexMap<String, TypeRef>,
}

impl OutputContainer {
    /// Creates a container scoped to `package` (may be empty for the
    /// default package).
    pub fn new(package: impl Into<String>) -> Self {
        OutputContainer {
            package: package.into(),
            registry: IndexMap::new(),
        }
    }

    /// The package scope of this container.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Registers a generated type under `name` and returns its reference.
    ///
    /// Registering the same name twice returns the existing reference, so
    /// repeated schema nodes resolve to the same logical type.
    pub fn register(&mut self, name: &str) -> TypeRef {
        if let Some(existing) = self.registry.get(name) {
            return existing.clone();
        }
        let type_ref = TypeRef::Generated {
            package: self.package.clone(),
            name: name.to_string(),
        };
        self.registry.insert(name.to_string(), type_ref.clone());
        type_ref
    }

    /// Iterates registered types in generation order.
    pub fn generated(&self) -> impl Iterator<Item = (&str, &TypeRef)> {
        self.registry.iter().map(|(name, t)| (name.as_str(), t))
    }

    /// Number of types generated into this container.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True when no type has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
