#![deny(missing_docs)]

//! # Schema Typegen
//!
//! Type-selection rules for a JSON-Schema-to-source generator targeting a
//! Java-like language (boxed wrappers vs. unboxed primitives).
//!
//! The core is [`rules::TypeRule`]: given a schema node it decides which
//! output type the node maps to, consulting [`config::GenerationConfig`] for
//! primitive and width preferences and delegating composite cases (objects,
//! arrays, formatted strings, media strings) to sibling rules obtained from
//! [`rules::RuleFactory`]. Beyond the standard JSON-Schema scalar set the
//! rule also honours the extension type names `"short"` and `"byte"`.

/// Shared error types.
pub mod error;

/// Generation configuration flags.
pub mod config;

/// Output type references.
pub mod types;

/// Output container & generated-type registry.
pub mod container;

/// Schema resolution context.
pub mod schema;

/// Type-selection rules.
pub mod rules;

pub use config::GenerationConfig;
pub use container::OutputContainer;
pub use error::{GenError, GenResult};
pub use rules::{CompositeRules, RuleFactory, TypeRule};
pub use schema::SchemaContext;
pub use types::{ScalarKind, TypeRef};
