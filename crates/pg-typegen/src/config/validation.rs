//! Configuration validation.

use std::collections::HashSet;

use super::Config;
use crate::core::identifier::validate_identifier;
use crate::error::{Result, TypegenError};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    check_identifier("source.catalog", &config.source.catalog)?;
    check_identifier("source.schema", &config.source.schema)?;

    let mut seen = HashSet::new();
    for table in &config.source.tables {
        check_identifier("source.tables", table)?;
        if !seen.insert(table.as_str()) {
            return Err(TypegenError::Config(format!(
                "source.tables lists '{}' more than once",
                table
            )));
        }
    }

    Ok(())
}

/// Validate an identifier, prefixing failures with the config field.
fn check_identifier(field: &str, name: &str) -> Result<()> {
    validate_identifier(name).map_err(|e| match e {
        TypegenError::Config(msg) => TypegenError::Config(format!("{}: {}", field, msg)),
        other => other,
    })
}
