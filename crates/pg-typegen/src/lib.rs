//! # pg-typegen
//!
//! Type mapping core for code generated from PostgreSQL schemas.
//!
//! Given a column's catalog metadata (nullability, SQL data type,
//! user-defined type name), this library derives:
//!
//! - **Builder type**: the coarse tag a query builder uses for operators
//! - **Storage / model type**: the field type in generated code, with
//!   nullability applied
//! - **Annotation**: the persistence-framework tag for the field
//!
//! Resolution is pure and never fails. Unknown catalog types fall back to a
//! string type and come back with a [`Diagnostic`].
//!
//! ## Example
//!
//! ```rust
//! use pg_typegen::{resolve_column, ColumnMetadata, DialectImpl, TargetLanguage};
//!
//! let dialect = DialectImpl::from(TargetLanguage::Go);
//! let column = ColumnMetadata::new("status", "USER-DEFINED", true)
//!     .with_user_defined_type("order_status");
//!
//! let resolved = resolve_column(&column, false, &dialect);
//! assert_eq!(resolved.rendered_model, "*OrderStatus");
//! assert_eq!(resolved.builder_type.builder_name(), "String");
//! ```

pub mod annotation;
pub mod config;
pub mod core;
pub mod dialect;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod typemap;

// Re-exports for convenient access
pub use annotation::{build_annotation, AnnotationBuilder};
pub use config::{Config, SourceConfig};
pub use crate::core::{ColumnMetadata, MetadataSource, TableRef, TypeDialect};
pub use dialect::{BuilderType, DialectImpl, ModelType, StorageType, TargetLanguage};
pub use error::{Result, TypegenError};
pub use pipeline::{resolve_column, resolve_configured, resolve_table, ColumnResolution, TableResolution};
pub use source::SnapshotSource;
pub use typemap::{
    resolve_builder_type, resolve_model_type, resolve_storage_type, Diagnostic, DiagnosticKind,
    Resolved,
};
