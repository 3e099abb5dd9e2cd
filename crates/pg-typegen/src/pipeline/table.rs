//! Resolution of whole tables.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::schema::{ColumnMetadata, TableRef};
use crate::core::traits::{MetadataSource, TypeDialect};
use crate::error::Result;
use crate::typemap::Diagnostic;

use super::column::{resolve_column, ColumnResolution};

/// Resolved columns of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableResolution {
    /// Table the columns belong to.
    pub table: TableRef,
    /// Target dialect name the strings were rendered for.
    pub dialect: String,
    /// Columns in catalog ordinal order.
    pub columns: Vec<ColumnResolution>,
}

impl TableResolution {
    /// All fallback notices across the table, in column order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.columns.iter().flat_map(|c| c.diagnostics.iter())
    }

    /// Look up a resolved column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnResolution> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Serialize to pretty JSON for the generator.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolve an ordered column list, logging every fallback notice.
///
/// Output order matches input order.
pub fn resolve_columns(
    table: &TableRef,
    columns: &[ColumnMetadata],
    primary_key: &[String],
    dialect: &dyn TypeDialect,
) -> Vec<ColumnResolution> {
    columns
        .iter()
        .map(|column| {
            let is_pk = primary_key.iter().any(|pk| pk == column.name());
            let resolved = resolve_column(column, is_pk, dialect);
            for diag in &resolved.diagnostics {
                warn!(
                    table = %table.full_name(),
                    column = %diag.column,
                    sql_type = %diag.sql_type,
                    "{}",
                    diag.message
                );
            }
            resolved
        })
        .collect()
}

/// Fetch a table's metadata from `source` and resolve it.
pub async fn resolve_table(
    source: &dyn MetadataSource,
    table: &TableRef,
    dialect: &dyn TypeDialect,
) -> Result<TableResolution> {
    let columns = source.columns(table).await?;
    let primary_key = source.primary_key(table).await?;

    let resolved = resolve_columns(table, &columns, &primary_key, dialect);
    let fallbacks = resolved.iter().filter(|c| c.has_diagnostics()).count();
    debug!(
        "Resolved {} columns for {} ({} with fallback types)",
        resolved.len(),
        table.full_name(),
        fallbacks
    );

    Ok(TableResolution {
        table: table.clone(),
        dialect: dialect.name().to_string(),
        columns: resolved,
    })
}

/// Resolve every table selected by `config`.
///
/// An empty `source.tables` list means every table the source reports for
/// the configured schema.
pub async fn resolve_configured(
    source: &dyn MetadataSource,
    config: &Config,
) -> Result<Vec<TableResolution>> {
    let dialect = config.dialect();
    let names = if config.source.tables.is_empty() {
        source
            .tables(&config.source.catalog, &config.source.schema)
            .await?
    } else {
        config.source.tables.clone()
    };

    let mut results = Vec::with_capacity(names.len());
    for name in &names {
        let table = config.source.table_ref(name);
        results.push(resolve_table(source, &table, &dialect).await?);
    }

    info!(
        "Resolved {} tables from {}.{} for target '{}'",
        results.len(),
        config.source.catalog,
        config.source.schema,
        config.target
    );
    Ok(results)
}
