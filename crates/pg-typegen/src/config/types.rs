//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::dialect::TargetLanguage;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Language the generated code is written in (default: go).
    #[serde(default)]
    pub target: TargetLanguage,

    /// Which tables to read from the metadata source.
    pub source: SourceConfig,
}

/// Metadata source selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Catalog (database) name.
    pub catalog: String,

    /// Schema to read (default: "public").
    #[serde(default = "default_public_schema")]
    pub schema: String,

    /// Tables to resolve. Empty means every table the source lists.
    #[serde(default)]
    pub tables: Vec<String>,
}

// Default value functions for serde
fn default_public_schema() -> String {
    "public".to_string()
}
