#![deny(missing_docs)]

//! # Generation Configuration
//!
//! Read-only flags controlling primitive and width preferences. Constructed
//! once per generation run and shared by reference; never mutated by the
//! rules.

use crate::error::{GenError, GenResult};
use serde::Deserialize;
use std::path::Path;

/// Flags consulted by the type-selection rule.
///
/// Field names deserialize from camelCase (`usePrimitives`, ...), matching
/// the configuration files the host generator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    /// Prefer unboxed primitives over wrapper types for scalars.
    pub use_primitives: bool,
    /// Represent `integer` as a 64-bit type instead of 32-bit.
    pub use_long_integers: bool,
    /// Represent `number` as double precision instead of single.
    pub use_double_numbers: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            use_primitives: false,
            use_long_integers: false,
            use_double_numbers: true,
        }
    }
}

impl GenerationConfig {
    /// Parses a configuration from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> GenResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file, dispatching on the file extension
    /// (`.yml`/`.yaml` or `.json`).
    pub fn from_file(path: &Path) -> GenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(GenError::General(format!(
                "Unsupported config extension: {:?}",
                other
            ))),
        }
    }
}
