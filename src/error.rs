#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `GenError` enum used across the crate.

use derive_more::{Display, From};

/// The crate-wide error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum GenError {
    /// Wrapper for standard IO errors (configuration file reads).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON parse errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML parse errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Failure reported by a delegated rule.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Rule Error: {_0}")]
    Rule(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for GenError {}

/// Helper type alias for Result using GenError.
pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let gen_err: GenError = io_err.into();
        assert!(matches!(gen_err, GenError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // Test that String defaults to General, not Rule
        let msg = String::from("something wrong");
        let gen_err: GenError = msg.into();
        match gen_err {
            GenError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to GenError::General"),
        }
    }

    #[test]
    fn test_rule_manual_creation() {
        // Rule errors must be created explicitly
        let gen_err = GenError::Rule("delegate fail".into());
        assert_eq!(format!("{}", gen_err), "Rule Error: delegate fail");
    }
}
