#![deny(missing_docs)]

//! # Object Rule
//!
//! Default composite-object delegate: names the generated type after the
//! node and registers it in the container's package scope. Field emission
//! and collision renaming belong to the host generator.

use crate::container::OutputContainer;
use crate::error::GenResult;
use crate::schema::SchemaContext;
use crate::types::TypeRef;
use heck::ToUpperCamelCase;
use serde_json::Value;

pub(crate) fn apply(
    node_name: &str,
    _node: &Value,
    container: &mut OutputContainer,
    _context: &SchemaContext,
) -> GenResult<TypeRef> {
    let class_name = node_name.to_upper_camel_case();
    Ok(container.register(&class_name))
}
