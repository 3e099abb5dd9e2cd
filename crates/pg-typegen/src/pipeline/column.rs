//! Resolution of a single column.

use serde::Serialize;

use crate::annotation::AnnotationBuilder;
use crate::core::schema::ColumnMetadata;
use crate::core::traits::TypeDialect;
use crate::dialect::{BuilderType, ModelType, StorageType};
use crate::typemap::{decorate_nullable, resolve_builder_type, resolve_storage_type, Diagnostic};

/// Resolved types and annotation for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnResolution {
    /// Column name.
    pub name: String,
    /// Query-builder tag.
    pub builder_type: BuilderType,
    /// Canonical storage type.
    pub storage_type: StorageType,
    /// Canonical model type.
    pub model_type: ModelType,
    /// Storage type rendered for the target language.
    pub rendered_storage: String,
    /// Model type rendered for the target language.
    pub rendered_model: String,
    /// Field annotation; empty when there is none.
    pub annotation: String,
    /// Fallback notices, at most one per resolver.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ColumnResolution {
    /// Whether any resolver fell back for this column.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Resolve one column.
///
/// The storage type is resolved once and reused for the model type, so an
/// unknown type yields exactly one builder notice and one storage notice.
pub fn resolve_column(
    column: &ColumnMetadata,
    is_primary_key: bool,
    dialect: &dyn TypeDialect,
) -> ColumnResolution {
    let builder = resolve_builder_type(column);
    let storage = resolve_storage_type(column);
    let model_type = decorate_nullable(column, storage.value.clone());

    let diagnostics = builder
        .diagnostic
        .into_iter()
        .chain(storage.diagnostic)
        .collect();

    ColumnResolution {
        name: column.name().to_string(),
        builder_type: builder.value,
        rendered_storage: dialect.render_storage(&storage.value),
        rendered_model: dialect.render_model(&model_type),
        storage_type: storage.value,
        model_type,
        annotation: AnnotationBuilder::for_column(is_primary_key).build(dialect),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{DialectImpl, TargetLanguage};
    use crate::typemap::DiagnosticKind;

    fn go() -> DialectImpl {
        DialectImpl::from(TargetLanguage::Go)
    }

    #[test]
    fn test_resolve_primary_key_integer() {
        let column = ColumnMetadata::new("id", "integer", false);
        let resolved = resolve_column(&column, true, &go());
        assert_eq!(resolved.builder_type, BuilderType::Integer);
        assert_eq!(resolved.rendered_storage, "int32");
        assert_eq!(resolved.rendered_model, "int32");
        assert_eq!(resolved.annotation, "`sql:\"primary_key\"`");
        assert!(!resolved.has_diagnostics());
    }

    #[test]
    fn test_resolve_unknown_type_collects_both_notices() {
        let column = ColumnMetadata::new("attrs", "hstore", true);
        let resolved = resolve_column(&column, false, &go());
        assert_eq!(resolved.rendered_model, "*string");
        assert_eq!(resolved.annotation, "");

        let kinds: Vec<DiagnosticKind> = resolved.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DiagnosticKind::BuilderType, DiagnosticKind::StorageType]);
    }

    #[test]
    fn test_resolve_rust_target() {
        let column = ColumnMetadata::new("created_at", "timestamp with time zone", true);
        let resolved = resolve_column(&column, false, &DialectImpl::from(TargetLanguage::Rust));
        assert_eq!(resolved.builder_type, BuilderType::TimestampWithZone);
        assert_eq!(
            resolved.rendered_model,
            "Option<chrono::DateTime<chrono::Utc>>"
        );
    }
}
