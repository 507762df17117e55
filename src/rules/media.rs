#![deny(missing_docs)]

//! # Media Rule
//!
//! Default media delegate: string nodes carrying a binary `media` encoding
//! become byte arrays. Anything else passes through unchanged.

use crate::error::GenResult;
use crate::types::TypeRef;
use serde_json::Value;

pub(crate) fn apply(_node_name: &str, media: &Value, current: TypeRef) -> GenResult<TypeRef> {
    let encoding = media
        .get("binaryEncoding")
        .and_then(Value::as_str)
        .unwrap_or("");

    if encoding.eq_ignore_ascii_case("base64") || encoding.eq_ignore_ascii_case("quoted-printable")
    {
        Ok(TypeRef::Named("byte[]".to_string()))
    } else {
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base64_becomes_byte_array() {
        let result = apply("blob", &json!({"binaryEncoding": "base64"}), TypeRef::Str).unwrap();
        assert_eq!(result, TypeRef::Named("byte[]".into()));
    }

    #[test]
    fn test_encoding_match_is_case_insensitive() {
        let result = apply("blob", &json!({"binaryEncoding": "BASE64"}), TypeRef::Str).unwrap();
        assert_eq!(result, TypeRef::Named("byte[]".into()));
    }

    #[test]
    fn test_quoted_printable_becomes_byte_array() {
        let media = json!({"binaryEncoding": "quoted-printable"});
        let result = apply("blob", &media, TypeRef::Str).unwrap();
        assert_eq!(result, TypeRef::Named("byte[]".into()));
    }

    #[test]
    fn test_unknown_encoding_passes_through() {
        let result = apply("blob", &json!({"binaryEncoding": "hex"}), TypeRef::Str).unwrap();
        assert_eq!(result, TypeRef::Str);
    }

    #[test]
    fn test_missing_encoding_passes_through() {
        let result = apply("blob", &json!({"type": "image/png"}), TypeRef::Str).unwrap();
        assert_eq!(result, TypeRef::Str);
    }
}
