//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use std::path::Path;

use tracing::info;

use crate::core::schema::TableRef;
use crate::dialect::DialectImpl;
use crate::error::Result;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Dialect for the configured target language.
    pub fn dialect(&self) -> DialectImpl {
        DialectImpl::from(self.target)
    }
}

impl SourceConfig {
    /// Reference to a table in the configured catalog schema.
    pub fn table_ref(&self, table: &str) -> TableRef {
        TableRef::new(&self.catalog, &self.schema, table)
    }
}
