#![deny(missing_docs)]

//! # Array Rule
//!
//! Default array delegate: selects the element type by re-applying the
//! factory's type rule to the `items` node, then wraps it in `Set` or
//! `List` according to `uniqueItems`.

use crate::container::OutputContainer;
use crate::error::GenResult;
use crate::rules::RuleFactory;
use crate::schema::SchemaContext;
use crate::types::TypeRef;
use serde_json::Value;

pub(crate) fn apply(
    factory: &RuleFactory,
    node_name: &str,
    node: &Value,
    container: &mut OutputContainer,
    context: &SchemaContext,
) -> GenResult<TypeRef> {
    let unique = node
        .get("uniqueItems")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let item = match node.get("items") {
        // Tuple-style item lists have no single element type
        Some(Value::Array(_)) | None => TypeRef::Opaque,
        Some(items) => factory
            .type_rule()
            .apply(node_name, items, container, context)?,
    };

    // Sequence elements cannot be unboxed
    Ok(TypeRef::Sequence {
        item: Box::new(item.boxify()),
        unique,
    })
}
