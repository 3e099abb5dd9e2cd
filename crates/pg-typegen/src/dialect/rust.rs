//! Rust rendering (Strategy pattern).

use crate::core::traits::TypeDialect;

use super::canonical::StorageType;

/// Rust dialect implementation.
///
/// Timestamps and UUIDs render as fully qualified `chrono` and `uuid` paths
/// so generated code needs no extra imports.
#[derive(Debug, Clone, Default)]
pub struct RustDialect;

impl RustDialect {
    /// Create a new Rust dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl TypeDialect for RustDialect {
    fn name(&self) -> &str {
        "rust"
    }

    fn render_storage(&self, storage: &StorageType) -> String {
        match storage {
            StorageType::Bool => "bool".to_string(),
            StorageType::Int16 => "i16".to_string(),
            StorageType::Int32 => "i32".to_string(),
            StorageType::Int64 => "i64".to_string(),
            StorageType::Float32 => "f32".to_string(),
            StorageType::Float64 => "f64".to_string(),
            StorageType::Timestamp => "chrono::DateTime<chrono::Utc>".to_string(),
            StorageType::Uuid => "uuid::Uuid".to_string(),
            StorageType::String => "String".to_string(),
            StorageType::Bytes => "Vec<u8>".to_string(),
            StorageType::Enum(name) => name.clone(),
        }
    }

    fn wrap_nullable(&self, rendered: &str) -> String {
        format!("Option<{}>", rendered)
    }

    fn wrap_annotation(&self, keywords: &str) -> String {
        format!("#[sql({})]", keywords)
    }
}
