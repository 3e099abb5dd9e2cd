//! Error types for the type generator.
//!
//! Type resolution itself never fails; these errors come from loading
//! configuration and catalog snapshots and from metadata sources.

use thiserror::Error;

/// Main error type for pg-typegen operations.
#[derive(Error, Debug)]
pub enum TypegenError {
    /// Configuration error (invalid YAML, missing fields, bad identifiers)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog row that cannot become a column
    #[error("Invalid column in {table}: {message}")]
    InvalidColumn { table: String, message: String },

    /// The metadata source does not know the requested table
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Metadata source failure with context.
    ///
    /// Returned when a source cannot read its catalog, e.g. a malformed
    /// snapshot file. External `MetadataSource` implementations use it for
    /// connection and query failures.
    #[error("Metadata source error: {message}\n  Context: {context}")]
    Metadata { message: String, context: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TypegenError {
    /// Create a Metadata error with context about where it occurred
    pub fn metadata(message: impl Into<String>, context: impl Into<String>) -> Self {
        TypegenError::Metadata {
            message: message.into(),
            context: context.into(),
        }
    }

    /// Create an InvalidColumn error
    pub fn invalid_column(table: impl Into<String>, message: impl Into<String>) -> Self {
        TypegenError::InvalidColumn {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for pg-typegen operations.
pub type Result<T> = std::result::Result<T, TypegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_carries_context() {
        let err = TypegenError::metadata("connection reset", "loading columns for shop.public.orders");
        let msg = err.to_string();
        assert!(msg.contains("connection reset"));
        assert!(msg.contains("shop.public.orders"));
    }

    #[test]
    fn test_format_detailed_includes_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "snapshot.yaml missing");
        let err = TypegenError::from(io);
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: IO error"));
        assert!(detailed.contains("snapshot.yaml missing"));
    }
}
