//! Core abstractions for catalog-driven type generation.
//!
//! - [`schema`]: Column and table metadata types
//! - [`identifier`]: Identifier validation and camel-case conversion
//! - [`traits`]: Metadata source and target dialect traits
//!
//! # Architecture
//!
//! The core module holds the catalog-facing data model and the two seams
//! the rest of the crate plugs into: where metadata comes from
//! ([`MetadataSource`]) and how resolved types are written out
//! ([`TypeDialect`]).

pub mod identifier;
pub mod schema;
pub mod traits;

// Re-export commonly used types for convenience
pub use identifier::camelize;
pub use schema::{CatalogRow, ColumnMetadata, TableRef};
pub use traits::{MetadataSource, TypeDialect};
