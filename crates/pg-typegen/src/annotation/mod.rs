//! Persistence-framework annotations for generated fields.
//!
//! An annotation is an ordered keyword set rendered by a
//! [`TypeDialect`]. Today the only keyword is `primary_key`; new keywords
//! append after the existing ones and never reorder them.

use crate::core::traits::TypeDialect;

/// Keyword marking a primary key column.
pub const PRIMARY_KEY: &str = "primary_key";

/// Ordered, duplicate-free set of annotation keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationBuilder {
    keywords: Vec<&'static str>,
}

impl AnnotationBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the column facts known today.
    pub fn for_column(is_primary_key: bool) -> Self {
        Self::new().primary_key(is_primary_key)
    }

    /// Add `primary_key` when `is_primary_key` is true.
    pub fn primary_key(self, is_primary_key: bool) -> Self {
        if is_primary_key {
            self.keyword(PRIMARY_KEY)
        } else {
            self
        }
    }

    /// Append a keyword; a keyword already present keeps its position.
    pub fn keyword(mut self, keyword: &'static str) -> Self {
        if !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    /// Keywords in insertion order.
    pub fn keywords(&self) -> &[&'static str] {
        &self.keywords
    }

    /// Check if no keyword was added.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Render the annotation; empty string when there are no keywords.
    pub fn build(&self, dialect: &dyn TypeDialect) -> String {
        dialect.render_annotation(&self.keywords)
    }
}

/// Render the annotation for a column with the given primary-key flag.
pub fn build_annotation(is_primary_key: bool, dialect: &dyn TypeDialect) -> String {
    AnnotationBuilder::for_column(is_primary_key).build(dialect)
}
