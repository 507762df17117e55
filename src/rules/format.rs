#![deny(missing_docs)]

//! # Format Rule
//!
//! Default format delegate: maps a node's `format` value to the library
//! type that represents it, replacing whatever the type dispatch chose.
//! Unknown formats leave the current type untouched.

use crate::config::GenerationConfig;
use crate::error::GenResult;
use crate::types::{ScalarKind, TypeRef};
use serde_json::Value;

pub(crate) fn apply(
    config: &GenerationConfig,
    _node_name: &str,
    format: &Value,
    current: TypeRef,
) -> GenResult<TypeRef> {
    let Some(format) = format.as_str() else {
        // Malformed format values degrade to no refinement
        return Ok(current);
    };

    let refined = match format {
        "date-time" => TypeRef::Named("java.util.Date".to_string()),
        "utc-millisec" => {
            let millis = TypeRef::Boxed(ScalarKind::Long);
            if config.use_primitives {
                millis.unboxify()
            } else {
                millis
            }
        }
        "regex" => TypeRef::Named("java.util.regex.Pattern".to_string()),
        "uri" => TypeRef::Named("java.net.URI".to_string()),
        "uuid" => TypeRef::Named("java.util.UUID".to_string()),
        "date" | "time" | "email" | "phone" | "ip-address" | "ipv6" | "host-name" | "style"
        | "color" => TypeRef::Str,
        _ => current,
    };

    Ok(refined)
}
