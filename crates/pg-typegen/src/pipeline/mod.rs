//! Per-table resolution pipeline.
//!
//! - [`ColumnResolution`]: everything the generator needs for one field
//! - [`TableResolution`]: the resolved columns of one table, in catalog order
//!
//! The pipeline pulls metadata from a [`MetadataSource`](crate::core::MetadataSource),
//! runs the pure resolvers on each column, and reports every fallback with
//! `tracing::warn!`. A diagnostic never stops the remaining columns.

mod column;
mod table;

pub use column::{resolve_column, ColumnResolution};
pub use table::{resolve_columns, resolve_configured, resolve_table, TableResolution};
