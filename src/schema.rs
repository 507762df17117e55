#![deny(missing_docs)]

//! # Schema Context
//!
//! Opaque schema-resolution state threaded through rule applications
//! unchanged. Holds the root document a node was parsed from; reference
//! resolution against it belongs to the host generator, not to these rules.

use serde_json::Value;

/// Resolution state passed through to delegated rules.
#[derive(Debug, Clone, Default)]
pub struct SchemaContext {
    root: Value,
}

impl SchemaContext {
    /// Wraps the root schema document.
    pub fn new(root: Value) -> Self {
        SchemaContext { root }
    }

    /// The root document this context was created from.
    pub fn root(&self) -> &Value {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_passthrough() {
        let doc = json!({"type": "object", "properties": {"id": {"type": "integer"}}});
        let context = SchemaContext::new(doc.clone());
        assert_eq!(context.root(), &doc);
    }
}
