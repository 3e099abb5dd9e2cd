//! Canonical types and target-language dialects.
//!
//! Resolvers produce the canonical [`BuilderType`], [`StorageType`] and
//! [`ModelType`]; a dialect renders them as source text.
//!
//! # Available Dialects
//!
//! - [`GoDialect`]: Go types with `sql:"..."` struct tags (default)
//! - [`RustDialect`]: Rust types with `#[sql(...)]` attributes
//!
//! # Usage
//!
//! ```rust
//! use pg_typegen::core::TypeDialect;
//! use pg_typegen::dialect::{DialectImpl, ModelType, StorageType, TargetLanguage};
//!
//! let dialect = DialectImpl::from(TargetLanguage::Go);
//! let model = ModelType::nullable(StorageType::String);
//! assert_eq!(dialect.render_model(&model), "*string");
//! ```

mod canonical;
mod go;
mod rust;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use canonical::{BuilderType, ModelType, StorageType};
pub use go::GoDialect;
pub use rust::RustDialect;

use crate::core::traits::TypeDialect;

/// Target language selected in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetLanguage {
    /// Go structs for go-pg style persistence.
    #[default]
    Go,

    /// Rust structs.
    Rust,
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Go => f.write_str("go"),
            TargetLanguage::Rust => f.write_str("rust"),
        }
    }
}

/// Enum-based static dispatch for dialects.
#[derive(Debug, Clone)]
pub enum DialectImpl {
    Go(GoDialect),
    Rust(RustDialect),
}

impl From<TargetLanguage> for DialectImpl {
    fn from(target: TargetLanguage) -> Self {
        match target {
            TargetLanguage::Go => DialectImpl::Go(GoDialect::new()),
            TargetLanguage::Rust => DialectImpl::Rust(RustDialect::new()),
        }
    }
}

impl Default for DialectImpl {
    fn default() -> Self {
        DialectImpl::from(TargetLanguage::default())
    }
}

impl TypeDialect for DialectImpl {
    fn name(&self) -> &str {
        match self {
            DialectImpl::Go(d) => d.name(),
            DialectImpl::Rust(d) => d.name(),
        }
    }

    fn render_storage(&self, storage: &StorageType) -> String {
        match self {
            DialectImpl::Go(d) => d.render_storage(storage),
            DialectImpl::Rust(d) => d.render_storage(storage),
        }
    }

    fn wrap_nullable(&self, rendered: &str) -> String {
        match self {
            DialectImpl::Go(d) => d.wrap_nullable(rendered),
            DialectImpl::Rust(d) => d.wrap_nullable(rendered),
        }
    }

    fn wrap_annotation(&self, keywords: &str) -> String {
        match self {
            DialectImpl::Go(d) => d.wrap_annotation(keywords),
            DialectImpl::Rust(d) => d.wrap_annotation(keywords),
        }
    }
}
