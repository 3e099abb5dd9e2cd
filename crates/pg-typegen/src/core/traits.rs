//! Core traits for catalog-driven type generation.
//!
//! - [`MetadataSource`]: Supplies column metadata for a table
//! - [`TypeDialect`]: Renders canonical types for one target language
//!
//! # Design Patterns
//!
//! - **Strategy**: `TypeDialect` implementations provide interchangeable
//!   rendering rules per target language
//! - **Template Method**: `render_model` and `render_annotation` are built
//!   from the smaller per-language hooks

use async_trait::async_trait;

use crate::dialect::{ModelType, StorageType};
use crate::error::Result;

use super::schema::{ColumnMetadata, TableRef};

/// Supplies catalog metadata for tables.
///
/// Implementations talk to a live catalog or replay a snapshot. Columns must
/// come back in catalog ordinal order, each with a non-empty name and SQL
/// type.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// List table names in a catalog schema, sorted by name.
    async fn tables(&self, catalog: &str, schema: &str) -> Result<Vec<String>>;

    /// Load the columns of a table in ordinal order.
    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnMetadata>>;

    /// Load the primary key column names of a table, in key order.
    ///
    /// Returns an empty list for tables without a primary key.
    async fn primary_key(&self, table: &TableRef) -> Result<Vec<String>>;
}

/// Target-language rendering strategy.
///
/// Rendered strings are interpolated straight into generated source and
/// never contain newlines.
pub trait TypeDialect: Send + Sync {
    /// Get the dialect identifier (e.g., "go", "rust").
    fn name(&self) -> &str;

    /// Render a storage type.
    fn render_storage(&self, storage: &StorageType) -> String;

    /// Wrap an already rendered type as optional.
    ///
    /// - Go: `*T`
    /// - Rust: `Option<T>`
    fn wrap_nullable(&self, rendered: &str) -> String;

    /// Wrap a non-empty, comma-joined keyword list in the persistence
    /// framework's attribute syntax.
    fn wrap_annotation(&self, keywords: &str) -> String;

    /// Render a model type, applying the nullable wrapper when needed.
    fn render_model(&self, model: &ModelType) -> String {
        let storage = self.render_storage(&model.storage);
        if model.nullable {
            self.wrap_nullable(&storage)
        } else {
            storage
        }
    }

    /// Render an annotation; no keywords means no annotation at all.
    fn render_annotation(&self, keywords: &[&str]) -> String {
        if keywords.is_empty() {
            return String::new();
        }
        self.wrap_annotation(&keywords.join(","))
    }
}
