//! Type resolution from PostgreSQL catalog types.
//!
//! Three pure, total resolvers turn a [`ColumnMetadata`] into the types a
//! generator needs:
//!
//! - [`resolve_builder_type`]: logical tag for the query builder
//! - [`resolve_storage_type`]: concrete storage type
//! - [`resolve_model_type`]: storage type with nullability applied
//!
//! None of them fail. A type missing from the tables falls back to a string
//! type and the result carries a [`Diagnostic`] saying so; callers decide
//! whether to log, collect, or ignore it.

use serde::{Deserialize, Serialize};

use crate::core::identifier::camelize;
use crate::core::schema::{ColumnMetadata, USER_DEFINED};
use crate::dialect::{BuilderType, ModelType, StorageType};

/// Which resolver fell back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The builder type resolver used `String`.
    BuilderType,
    /// The storage type resolver used `String`.
    StorageType,
}

/// Notice about a catalog type the resolvers do not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Column the notice is about.
    pub column: String,
    /// The unrecognized catalog type.
    pub sql_type: String,
    /// Resolver that produced the notice.
    pub kind: DiagnosticKind,
    /// Human-readable description, including the chosen fallback.
    pub message: String,
}

/// A resolved value plus the notice produced while resolving it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The resolved value. Always present.
    pub value: T,
    /// Set when the value is a fallback for an unrecognized type.
    pub diagnostic: Option<Diagnostic>,
}

impl<T> Resolved<T> {
    /// A value taken straight from the mapping table.
    pub fn known(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    /// A fallback value with the notice explaining it.
    pub fn fallback(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostic: Some(diagnostic),
        }
    }

    /// Whether the value came from the fallback path.
    pub fn is_fallback(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Map a column's catalog type to its query-builder tag.
pub fn resolve_builder_type(column: &ColumnMetadata) -> Resolved<BuilderType> {
    let tag = match column.sql_type() {
        "boolean" => BuilderType::Bool,
        "smallint" | "integer" | "bigint" => BuilderType::Integer,
        "date" => BuilderType::Date,
        "timestamp without time zone" => BuilderType::Timestamp,
        "timestamp with time zone" => BuilderType::TimestampWithZone,
        "time without time zone" => BuilderType::Time,
        "time with time zone" => BuilderType::TimeWithZone,
        USER_DEFINED | "text" | "character" | "character varying" | "bytea" | "uuid"
        | "tsvector" | "bit" | "bit varying" | "money" | "json" | "jsonb" | "xml" | "point"
        | "interval" | "line" | "ARRAY" => BuilderType::String,
        "real" | "numeric" | "decimal" | "double precision" => BuilderType::Float,
        other => {
            return Resolved::fallback(
                BuilderType::String,
                Diagnostic {
                    column: column.name().to_string(),
                    sql_type: other.to_string(),
                    kind: DiagnosticKind::BuilderType,
                    message: format!(
                        "Unknown sql type: {}, using string column instead for sql builder.",
                        other
                    ),
                },
            );
        }
    };

    Resolved::known(tag)
}

/// Map a column's catalog type to its storage type.
///
/// `USER-DEFINED` columns become a generated enum named after the
/// camel-cased `udt_name`.
pub fn resolve_storage_type(column: &ColumnMetadata) -> Resolved<StorageType> {
    if column.is_user_defined() {
        return Resolved::known(StorageType::Enum(camelize(column.user_defined_type_name())));
    }

    let storage = match column.sql_type() {
        "boolean" => StorageType::Bool,
        "smallint" => StorageType::Int16,
        "integer" => StorageType::Int32,
        "bigint" => StorageType::Int64,
        "date"
        | "timestamp without time zone"
        | "timestamp with time zone"
        | "time with time zone"
        | "time without time zone" => StorageType::Timestamp,
        "bytea" => StorageType::Bytes,
        "text" | "character" | "character varying" | "tsvector" | "bit" | "bit varying"
        | "money" | "json" | "jsonb" | "xml" | "point" | "interval" | "line" | "ARRAY" => {
            StorageType::String
        }
        "real" => StorageType::Float32,
        "numeric" | "decimal" | "double precision" => StorageType::Float64,
        "uuid" => StorageType::Uuid,
        other => {
            return Resolved::fallback(
                StorageType::String,
                Diagnostic {
                    column: column.name().to_string(),
                    sql_type: other.to_string(),
                    kind: DiagnosticKind::StorageType,
                    message: format!(
                        "Unknown sql type: {}, {}, using string instead for model type.",
                        other,
                        column.user_defined_type_name()
                    ),
                },
            );
        }
    };

    Resolved::known(storage)
}

/// Apply the column's nullability to an already resolved storage type.
///
/// Split out of [`resolve_model_type`] so callers that resolved the storage
/// type once do not resolve (and diagnose) it twice.
pub fn decorate_nullable(column: &ColumnMetadata, storage: StorageType) -> ModelType {
    if column.is_nullable() && !storage.absence_via_empty() {
        ModelType::nullable(storage)
    } else {
        ModelType::plain(storage)
    }
}

/// Map a column to its model type: the storage type, optional when the
/// column is nullable and the type has no empty value of its own.
pub fn resolve_model_type(column: &ColumnMetadata) -> Resolved<ModelType> {
    let storage = resolve_storage_type(column);
    Resolved {
        value: decorate_nullable(column, storage.value),
        diagnostic: storage.diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn col(sql_type: &str) -> ColumnMetadata {
        ColumnMetadata::new("c", sql_type, false)
    }

    fn nullable_col(sql_type: &str) -> ColumnMetadata {
        ColumnMetadata::new("c", sql_type, true)
    }

    const BUILDER_TABLE: &[(&str, BuilderType)] = &[
        ("boolean", BuilderType::Bool),
        ("smallint", BuilderType::Integer),
        ("integer", BuilderType::Integer),
        ("bigint", BuilderType::Integer),
        ("date", BuilderType::Date),
        ("timestamp without time zone", BuilderType::Timestamp),
        ("timestamp with time zone", BuilderType::TimestampWithZone),
        ("time without time zone", BuilderType::Time),
        ("time with time zone", BuilderType::TimeWithZone),
        ("real", BuilderType::Float),
        ("numeric", BuilderType::Float),
        ("decimal", BuilderType::Float),
        ("double precision", BuilderType::Float),
        ("USER-DEFINED", BuilderType::String),
        ("text", BuilderType::String),
        ("character", BuilderType::String),
        ("character varying", BuilderType::String),
        ("bytea", BuilderType::String),
        ("uuid", BuilderType::String),
        ("tsvector", BuilderType::String),
        ("bit", BuilderType::String),
        ("bit varying", BuilderType::String),
        ("money", BuilderType::String),
        ("json", BuilderType::String),
        ("jsonb", BuilderType::String),
        ("xml", BuilderType::String),
        ("point", BuilderType::String),
        ("interval", BuilderType::String),
        ("line", BuilderType::String),
        ("ARRAY", BuilderType::String),
    ];

    fn storage_table() -> Vec<(&'static str, StorageType)> {
        vec![
            ("boolean", StorageType::Bool),
            ("smallint", StorageType::Int16),
            ("integer", StorageType::Int32),
            ("bigint", StorageType::Int64),
            ("date", StorageType::Timestamp),
            ("timestamp without time zone", StorageType::Timestamp),
            ("timestamp with time zone", StorageType::Timestamp),
            ("time without time zone", StorageType::Timestamp),
            ("time with time zone", StorageType::Timestamp),
            ("bytea", StorageType::Bytes),
            ("text", StorageType::String),
            ("character", StorageType::String),
            ("character varying", StorageType::String),
            ("tsvector", StorageType::String),
            ("bit", StorageType::String),
            ("bit varying", StorageType::String),
            ("money", StorageType::String),
            ("json", StorageType::String),
            ("jsonb", StorageType::String),
            ("xml", StorageType::String),
            ("point", StorageType::String),
            ("interval", StorageType::String),
            ("line", StorageType::String),
            ("ARRAY", StorageType::String),
            ("real", StorageType::Float32),
            ("numeric", StorageType::Float64),
            ("decimal", StorageType::Float64),
            ("double precision", StorageType::Float64),
            ("uuid", StorageType::Uuid),
        ]
    }

    #[test]
    fn test_builder_type_table() {
        for (sql_type, expected) in BUILDER_TABLE {
            let resolved = resolve_builder_type(&col(sql_type));
            assert_eq!(resolved.value, *expected, "sql type {:?}", sql_type);
            assert!(!resolved.is_fallback(), "sql type {:?}", sql_type);
        }
    }

    #[test]
    fn test_storage_type_table() {
        for (sql_type, expected) in storage_table() {
            let resolved = resolve_storage_type(&col(sql_type));
            assert_eq!(resolved.value, expected, "sql type {:?}", sql_type);
            assert!(!resolved.is_fallback(), "sql type {:?}", sql_type);
        }
    }

    #[test]
    fn test_user_defined_storage_type() {
        let column = col("USER-DEFINED").with_user_defined_type("order_status");
        let resolved = resolve_storage_type(&column);
        assert_eq!(resolved.value, StorageType::Enum("OrderStatus".to_string()));
        assert!(!resolved.is_fallback());
    }

    #[test]
    fn test_user_defined_with_empty_udt_name() {
        let resolved = resolve_storage_type(&col("USER-DEFINED"));
        assert_eq!(resolved.value, StorageType::Enum(String::new()));
    }

    #[test]
    fn test_udt_name_ignored_for_other_types() {
        let column = col("integer").with_user_defined_type("int4");
        assert_eq!(resolve_storage_type(&column).value, StorageType::Int32);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(resolve_builder_type(&col("INTEGER")).is_fallback());
        assert!(resolve_storage_type(&col("Boolean")).is_fallback());
        assert!(resolve_storage_type(&col("user-defined")).is_fallback());
    }

    #[test]
    fn test_unknown_type_builder_fallback() {
        let resolved = resolve_builder_type(&ColumnMetadata::new("tags", "hstore", false));
        assert_eq!(resolved.value, BuilderType::String);

        let diag = resolved.diagnostic.expect("hstore should be diagnosed");
        assert_eq!(diag.kind, DiagnosticKind::BuilderType);
        assert_eq!(diag.column, "tags");
        assert_eq!(diag.sql_type, "hstore");
        assert!(diag.message.contains("hstore"));
        assert!(diag.message.contains("sql builder"));
    }

    #[test]
    fn test_unknown_type_storage_fallback() {
        let column = ColumnMetadata::new("tags", "hstore", false).with_user_defined_type("hstore");
        let resolved = resolve_storage_type(&column);
        assert_eq!(resolved.value, StorageType::String);

        let diag = resolved.diagnostic.expect("hstore should be diagnosed");
        assert_eq!(diag.kind, DiagnosticKind::StorageType);
        assert_eq!(
            diag.message,
            "Unknown sql type: hstore, hstore, using string instead for model type."
        );
    }

    #[test]
    fn test_model_type_nullable_wraps() {
        let resolved = resolve_model_type(&nullable_col("character varying"));
        assert_eq!(resolved.value, ModelType::nullable(StorageType::String));
    }

    #[test]
    fn test_model_type_not_nullable_is_plain() {
        let resolved = resolve_model_type(&col("integer"));
        assert_eq!(resolved.value, ModelType::plain(StorageType::Int32));
    }

    #[test]
    fn test_model_type_bytes_never_wrapped() {
        assert_eq!(
            resolve_model_type(&nullable_col("bytea")).value,
            ModelType::plain(StorageType::Bytes)
        );
        assert_eq!(
            resolve_model_type(&col("bytea")).value,
            ModelType::plain(StorageType::Bytes)
        );
    }

    #[test]
    fn test_model_type_nullable_enum() {
        let column = nullable_col("USER-DEFINED").with_user_defined_type("user_status");
        assert_eq!(
            resolve_model_type(&column).value,
            ModelType::nullable(StorageType::Enum("UserStatus".to_string()))
        );
    }

    #[test]
    fn test_model_type_carries_storage_diagnostic() {
        let resolved = resolve_model_type(&nullable_col("cidr"));
        assert_eq!(resolved.value, ModelType::nullable(StorageType::String));
        assert_eq!(
            resolved.diagnostic.map(|d| d.kind),
            Some(DiagnosticKind::StorageType)
        );
    }

    #[test]
    fn test_model_type_nullability_rule() {
        for (sql_type, storage) in storage_table() {
            for nullable in [false, true] {
                let column = ColumnMetadata::new("c", sql_type, nullable);
                let model = resolve_model_type(&column).value;
                let expect_wrapped = nullable && storage != StorageType::Bytes;
                assert_eq!(model.nullable, expect_wrapped, "sql type {:?}", sql_type);
                assert_eq!(model.storage, storage);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_resolvers_are_total(sql_type in "\\PC{1,30}", nullable in any::<bool>()) {
            let column = ColumnMetadata::new("c", sql_type.clone(), nullable);
            let builder = resolve_builder_type(&column);
            let storage = resolve_storage_type(&column);

            let known = BUILDER_TABLE.iter().any(|(t, _)| *t == sql_type);
            prop_assert_eq!(builder.is_fallback(), !known);
            prop_assert_eq!(storage.is_fallback(), !known);
            if !known {
                prop_assert_eq!(builder.value, BuilderType::String);
                prop_assert_eq!(storage.value, StorageType::String);
            }
        }
    }
}
