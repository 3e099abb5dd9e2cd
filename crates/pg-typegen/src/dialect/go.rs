//! Go rendering (Strategy pattern).
//!
//! Emits the types and `sql:"..."` struct tags that go-pg style models use.

use crate::core::traits::TypeDialect;

use super::canonical::StorageType;

/// Go dialect implementation.
#[derive(Debug, Clone, Default)]
pub struct GoDialect;

impl GoDialect {
    /// Create a new Go dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl TypeDialect for GoDialect {
    fn name(&self) -> &str {
        "go"
    }

    fn render_storage(&self, storage: &StorageType) -> String {
        match storage {
            StorageType::Bool => "bool".to_string(),
            StorageType::Int16 => "int16".to_string(),
            StorageType::Int32 => "int32".to_string(),
            StorageType::Int64 => "int64".to_string(),
            StorageType::Float32 => "float32".to_string(),
            StorageType::Float64 => "float64".to_string(),
            StorageType::Timestamp => "time.Time".to_string(),
            StorageType::Uuid => "uuid.UUID".to_string(),
            StorageType::String => "string".to_string(),
            StorageType::Bytes => "[]byte".to_string(),
            StorageType::Enum(name) => name.clone(),
        }
    }

    fn wrap_nullable(&self, rendered: &str) -> String {
        format!("*{}", rendered)
    }

    fn wrap_annotation(&self, keywords: &str) -> String {
        format!("`sql:\"{}\"`", keywords)
    }
}
