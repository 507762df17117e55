#![deny(missing_docs)]

//! # Type Rule
//!
//! Reads the details of a schema node to determine the output type it should
//! be represented as. The result may be a primitive, a boxed wrapper, a
//! newly generated composite type, or a library type refined from a
//! `format`/`media` annotation.
//!
//! Schema types and their output equivalent:
//!
//! - `"type":"string"`  => `String` (or a refinement when `format`/`media`
//!   is present)
//! - `"type":"number"`  => `Double`/`Float` per configuration
//! - `"type":"integer"` => `Long`/`Integer` per configuration
//! - `"type":"short"`   => `Short` (extension type)
//! - `"type":"byte"`    => `Byte` (extension type)
//! - `"type":"boolean"` => `Boolean`
//! - `"type":"object"`  => generated type (object delegate)
//! - `"type":"array"`   => `List`/`Set` (array delegate)
//! - `"type":"any"`, `"type":"null"`, anything else => `Object`
//!
//! Scalars are unboxed to primitives when the configuration asks for it.

use crate::config::GenerationConfig;
use crate::container::OutputContainer;
use crate::error::GenResult;
use crate::rules::CompositeRules;
use crate::schema::SchemaContext;
use crate::types::{ScalarKind, TypeRef};
use serde_json::Value;

const DEFAULT_TYPE_NAME: &str = "any";

/// The type-selection rule.
///
/// A pure decision function over (node, configuration, delegate results);
/// it holds no state of its own and never mutates the node.
pub struct TypeRule<'a> {
    config: &'a GenerationConfig,
    rules: &'a dyn CompositeRules,
}

impl<'a> TypeRule<'a> {
    /// Binds the rule to a configuration and a set of composite delegates.
    pub fn new(config: &'a GenerationConfig, rules: &'a dyn CompositeRules) -> Self {
        TypeRule { config, rules }
    }

    /// Selects the output type for `node`.
    ///
    /// `node_name` is only used when delegating to the composite rules (it
    /// names any generated type); the scalar decision ignores it. Malformed
    /// or absent fields degrade to the catch-all rather than failing; the
    /// only errors are those raised by a delegate, which propagate
    /// unchanged.
    pub fn apply(
        &self,
        node_name: &str,
        node: &Value,
        container: &mut OutputContainer,
        context: &SchemaContext,
    ) -> GenResult<TypeRef> {
        let type_name = resolved_type_name(node);

        let mut type_ref = match type_name.as_str() {
            "string" => TypeRef::Str,
            "number" => self.unbox_if_necessary(self.number_type()),
            "integer" => self.unbox_if_necessary(self.integer_type()),
            "short" => self.unbox_if_necessary(TypeRef::Boxed(ScalarKind::Short)),
            "byte" => self.unbox_if_necessary(TypeRef::Boxed(ScalarKind::Byte)),
            "boolean" => self.unbox_if_necessary(TypeRef::Boxed(ScalarKind::Boolean)),
            // A non-empty `properties` implies an object whatever the
            // declared type says, and takes precedence over "array".
            name if name == "object" || has_nonempty_properties(node) => {
                self.rules.object(node_name, node, container, context)?
            }
            "array" => self.rules.array(node_name, node, container, context)?,
            _ => TypeRef::Opaque,
        };

        // `format` replaces the dispatched type; `media` only applies to
        // strings and only when no `format` is present.
        if let Some(format) = node.get("format") {
            type_ref = self.rules.format(node_name, format, type_ref, context)?;
        } else if type_name == "string" {
            if let Some(media) = node.get("media") {
                type_ref = self.rules.media(node_name, media, type_ref, context)?;
            }
        }

        Ok(type_ref)
    }

    fn number_type(&self) -> TypeRef {
        if self.config.use_double_numbers {
            TypeRef::Boxed(ScalarKind::Double)
        } else {
            TypeRef::Boxed(ScalarKind::Float)
        }
    }

    fn integer_type(&self) -> TypeRef {
        if self.config.use_long_integers {
            TypeRef::Boxed(ScalarKind::Long)
        } else {
            TypeRef::Boxed(ScalarKind::Integer)
        }
    }

    fn unbox_if_necessary(&self, type_ref: TypeRef) -> TypeRef {
        if self.config.use_primitives {
            type_ref.unboxify()
        } else {
            type_ref
        }
    }
}

/// Resolves the logical type name of a node.
///
/// Multi-type arrays are not truly supported: only the first element is
/// honoured. Nodes without a `type` default to `"any"`.
fn resolved_type_name(node: &Value) -> String {
    match node.get("type") {
        Some(Value::Array(candidates)) if !candidates.is_empty() => text_of(&candidates[0]),
        Some(value) => text_of(value),
        None => DEFAULT_TYPE_NAME.to_string(),
    }
}

/// Textual value of a scalar node; structured values degrade to the empty
/// string, which no dispatch arm matches.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn has_nonempty_properties(node: &Value) -> bool {
    match node.get("properties") {
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        _ => false,
    }
}
