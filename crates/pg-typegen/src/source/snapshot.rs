//! Catalog snapshot source.
//!
//! A snapshot is `information_schema.columns` rows recorded to YAML or JSON,
//! grouped by catalog, schema and table:
//!
//! ```yaml
//! catalogs:
//!   shop:
//!     public:
//!       orders:
//!         primary_key: [id]
//!         columns:
//!           - { column_name: id, is_nullable: "NO", data_type: integer, udt_name: int4 }
//!           - { column_name: status, is_nullable: "NO", data_type: USER-DEFINED, udt_name: order_status }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::schema::{CatalogRow, ColumnMetadata, TableRef};
use crate::core::traits::MetadataSource;
use crate::error::{Result, TypegenError};

/// Recorded rows and primary key of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Primary key column names, in key order.
    #[serde(default)]
    pub primary_key: Vec<String>,

    /// Column rows as the catalog reported them.
    #[serde(default)]
    pub columns: Vec<CatalogRow>,
}

/// Snapshot file contents: catalog → schema → table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub catalogs: BTreeMap<String, BTreeMap<String, BTreeMap<String, TableSnapshot>>>,
}

impl Snapshot {
    /// Record a table, replacing any earlier entry for it.
    pub fn insert(&mut self, table: &TableRef, snapshot: TableSnapshot) {
        self.catalogs
            .entry(table.catalog.clone())
            .or_default()
            .entry(table.schema.clone())
            .or_default()
            .insert(table.table.clone(), snapshot);
    }

    fn get(&self, table: &TableRef) -> Option<&TableSnapshot> {
        self.catalogs
            .get(&table.catalog)?
            .get(&table.schema)?
            .get(&table.table)
    }
}

/// Metadata source backed by an in-memory [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Wrap an already built snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a YAML or JSON file (chosen by extension).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        let source = parsed.map_err(|e| {
            TypegenError::metadata(e.to_string(), format!("parsing snapshot {}", path.display()))
        })?;

        info!(
            "Loaded catalog snapshot from {:?} ({} catalogs)",
            path,
            source.snapshot.catalogs.len()
        );
        Ok(source)
    }

    /// Parse a snapshot from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::new(serde_yaml::from_str(yaml)?))
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn table(&self, table: &TableRef) -> Result<&TableSnapshot> {
        self.snapshot
            .get(table)
            .ok_or_else(|| TypegenError::TableNotFound(table.full_name()))
    }
}

#[async_trait]
impl MetadataSource for SnapshotSource {
    async fn tables(&self, catalog: &str, schema: &str) -> Result<Vec<String>> {
        let tables = self
            .snapshot
            .catalogs
            .get(catalog)
            .and_then(|schemas| schemas.get(schema))
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default();
        Ok(tables)
    }

    async fn columns(&self, table: &TableRef) -> Result<Vec<ColumnMetadata>> {
        let mut rows = self.table(table)?.columns.clone();

        // Either every row carries an ordinal or none does; none keeps file order
        let with_ordinal = rows.iter().filter(|r| r.ordinal_position.is_some()).count();
        if with_ordinal == rows.len() {
            rows.sort_by_key(|r| r.ordinal_position);
        } else if with_ordinal > 0 {
            return Err(TypegenError::invalid_column(
                table.full_name(),
                "ordinal_position is recorded for some columns but not all",
            ));
        }

        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let column = row.into_column(table)?;
            if !seen.insert(column.name().to_string()) {
                return Err(TypegenError::invalid_column(
                    table.full_name(),
                    format!("duplicate column '{}'", column.name()),
                ));
            }
            columns.push(column);
        }

        debug!("Loaded {} columns for {}", columns.len(), table.full_name());
        Ok(columns)
    }

    async fn primary_key(&self, table: &TableRef) -> Result<Vec<String>> {
        Ok(self.table(table)?.primary_key.clone())
    }
}
