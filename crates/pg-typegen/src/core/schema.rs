//! Schema and metadata types for catalog tables and columns.
//!
//! These types carry the facts a PostgreSQL catalog reports about a column,
//! in the shape the type resolvers consume.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypegenError};

/// Identifies a table by its (catalog, schema, table) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// Catalog (database) name.
    pub catalog: String,

    /// Schema name.
    pub schema: String,

    /// Table name.
    pub table: String,
}

impl TableRef {
    /// Create a new table reference.
    pub fn new(
        catalog: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            catalog: catalog.into(),
            schema: schema.into(),
            table: table.into(),
        }
    }

    /// Get the fully qualified table name.
    pub fn full_name(&self) -> String {
        format!("{}.{}.{}", self.catalog, self.schema, self.table)
    }
}

/// Column metadata.
///
/// Immutable once constructed: fields are private and only exposed through
/// accessors. A column never references another column or table.
///
/// Serialize-only: records are built through [`ColumnMetadata::new`] or
/// [`CatalogRow::into_column`], never deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMetadata {
    name: String,
    is_nullable: bool,
    sql_type: String,
    user_defined_type_name: String,
}

impl ColumnMetadata {
    /// Create a column from already-parsed catalog facts.
    ///
    /// Metadata sources guarantee a non-empty name and SQL type; rows that
    /// cannot meet that go through [`CatalogRow::into_column`] instead.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>, is_nullable: bool) -> Self {
        Self {
            name: name.into(),
            is_nullable,
            sql_type: sql_type.into(),
            user_defined_type_name: String::new(),
        }
    }

    /// Attach the catalog's user-defined type name (`udt_name`).
    pub fn with_user_defined_type(mut self, udt_name: impl Into<String>) -> Self {
        self.user_defined_type_name = udt_name.into();
        self
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the column allows NULL.
    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    /// Catalog data type (e.g. "integer", "character varying", "USER-DEFINED").
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// User-defined type name; only meaningful for `USER-DEFINED` columns.
    pub fn user_defined_type_name(&self) -> &str {
        &self.user_defined_type_name
    }

    /// Check if the column's type is a catalog enum or domain.
    pub fn is_user_defined(&self) -> bool {
        self.sql_type == USER_DEFINED
    }
}

/// The `data_type` value the catalog reports for enums and domains.
pub const USER_DEFINED: &str = "USER-DEFINED";

/// One raw row of `information_schema.columns`.
///
/// `is_nullable` stays textual here; it becomes a boolean in
/// [`CatalogRow::into_column`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// `column_name`.
    pub column_name: String,

    /// `is_nullable` ("YES" or "NO").
    pub is_nullable: String,

    /// `data_type`.
    pub data_type: String,

    /// `udt_name`.
    #[serde(default)]
    pub udt_name: String,

    /// `ordinal_position` (1-based), when the snapshot recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal_position: Option<i32>,
}

impl CatalogRow {
    /// Convert the row into a column, checking the source contract.
    ///
    /// Only the exact text `YES` marks a column nullable.
    pub fn into_column(self, table: &TableRef) -> Result<ColumnMetadata> {
        if self.column_name.is_empty() {
            return Err(TypegenError::invalid_column(
                table.full_name(),
                "column_name is empty",
            ));
        }
        if self.data_type.is_empty() {
            return Err(TypegenError::invalid_column(
                table.full_name(),
                format!("column '{}' has an empty data_type", self.column_name),
            ));
        }

        let is_nullable = self.is_nullable == "YES";
        Ok(ColumnMetadata::new(self.column_name, self.data_type, is_nullable)
            .with_user_defined_type(self.udt_name))
    }
}
