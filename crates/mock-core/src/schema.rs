//! Custom generator definitions for the fmock engine.
//!
//! Directives whose opcode is not a built-in generator are resolved through a
//! fallback registry. This module defines the YAML shape used to populate that
//! registry declaratively:
//!
//! ```yaml
//! version: 1
//! generators:
//!   - name: color
//!     generator:
//!       type: one_of
//!       values: [red, green, blue]
//!   - name: age
//!     generator:
//!       type: int_range
//!       min: 18
//!       max: 80
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

// ============================================================================
// Generator Types
// ============================================================================

/// Generator configuration for a custom generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Generate UUIDs (v4)
    UuidV4,

    /// Generate random integers in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Generate random floats in a range
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Generate weighted boolean values
    WeightedBool {
        /// Weight for true value (0.0 to 1.0)
        true_weight: f64,
    },

    /// Generate random selection from a pool of values
    OneOf {
        /// Pool of values to select from
        values: Vec<serde_yaml::Value>,
    },

    /// Generate a static value
    Static {
        /// The static value to use
        value: serde_yaml::Value,
    },

    /// Generate null values
    Null,
}

/// A named custom generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGenerator {
    /// Opcode the generator answers to
    pub name: String,

    /// Generator configuration
    pub generator: GeneratorConfig,
}

fn default_version() -> u32 {
    1
}

/// Collection of custom generators loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MockSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Custom generator definitions
    #[serde(default)]
    pub generators: Vec<CustomGenerator>,
}

impl MockSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    ///
    /// Names are not checked here; the registry built from the schema
    /// rejects invalid and duplicate names.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
