#![deny(missing_docs)]

//! # Rules
//!
//! The type-selection rule, the capability trait it delegates through, and
//! the factory that binds them together.
//!
//! The factory hands out the extended type rule (the one honouring the
//! `"short"` and `"byte"` extension types) and itself implements
//! [`CompositeRules`], standing in for the host generator's object, array,
//! format and media rules. A host with richer rules implements
//! [`CompositeRules`] and constructs [`TypeRule`] directly.

use crate::config::GenerationConfig;
use crate::container::OutputContainer;
use crate::error::GenResult;
use crate::schema::SchemaContext;
use crate::types::TypeRef;
use serde_json::Value;

mod array;
mod format;
mod media;
mod object;

/// The type-selection rule.
pub mod type_rule;

pub use type_rule::TypeRule;

/// Capability interface over the sibling rules the type rule delegates to.
///
/// Late-bound: the type rule never inspects composite schemas itself, it
/// forwards them here. Failures from any of these operations propagate to
/// the type rule's caller unmodified.
pub trait CompositeRules {
    /// Produces the type for an object schema, placing any newly generated
    /// type in `container`'s package scope.
    fn object(
        &self,
        name: &str,
        node: &Value,
        container: &mut OutputContainer,
        context: &SchemaContext,
    ) -> GenResult<TypeRef>;

    /// Produces the sequence type for an array schema.
    fn array(
        &self,
        name: &str,
        node: &Value,
        container: &mut OutputContainer,
        context: &SchemaContext,
    ) -> GenResult<TypeRef>;

    /// Refines `current` according to the node's `format` value.
    /// The returned type replaces whatever the dispatch chose.
    fn format(
        &self,
        name: &str,
        format: &Value,
        current: TypeRef,
        context: &SchemaContext,
    ) -> GenResult<TypeRef>;

    /// Refines `current` according to the node's `media` value.
    fn media(
        &self,
        name: &str,
        media: &Value,
        current: TypeRef,
        context: &SchemaContext,
    ) -> GenResult<TypeRef>;
}

/// The rule factory.
///
/// Overrides the stock type rule with the extended one and supplies the
/// default composite delegates.
#[derive(Debug, Clone)]
pub struct RuleFactory {
    config: GenerationConfig,
}

impl RuleFactory {
    /// Creates a factory over the given generation configuration.
    pub fn new(config: GenerationConfig) -> Self {
        RuleFactory { config }
    }

    /// The configuration this factory was created with.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Returns the type-selection rule, bound to this factory so it can
    /// delegate back for composite cases.
    pub fn type_rule(&self) -> TypeRule<'_> {
        TypeRule::new(&self.config, self)
    }
}

impl CompositeRules for RuleFactory {
    fn object(
        &self,
        name: &str,
        node: &Value,
        container: &mut OutputContainer,
        context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        object::apply(name, node, container, context)
    }

    fn array(
        &self,
        name: &str,
        node: &Value,
        container: &mut OutputContainer,
        context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        array::apply(self, name, node, container, context)
    }

    fn format(
        &self,
        name: &str,
        format: &Value,
        current: TypeRef,
        _context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        format::apply(&self.config, name, format, current)
    }

    fn media(
        &self,
        name: &str,
        media: &Value,
        current: TypeRef,
        _context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        media::apply(name, media, current)
    }
}
