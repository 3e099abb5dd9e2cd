//! Language-neutral type representation for generated code.
//!
//! Resolvers map catalog types onto these canonical forms; a
//! [`TypeDialect`](super::TypeDialect) then renders them for one target
//! language. Keeping the two steps apart means the mapping tables are
//! written once no matter how many targets exist.
//!
//! ```text
//! sql_type  →  StorageType / BuilderType  →  target text
//! integer   →  Int32                      →  int32 (Go), i32 (Rust)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical type tag consumed by the query-builder layer.
///
/// The builder only needs comparison and operator semantics, so SQL types
/// collapse into a handful of broad buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuilderType {
    Bool,
    Integer,
    Date,
    Timestamp,
    TimestampWithZone,
    Time,
    TimeWithZone,
    Float,
    String,
}

impl BuilderType {
    /// Name of the matching column type in the generated query builder.
    ///
    /// The zoned variants keep the builder's historical short names.
    pub fn builder_name(&self) -> &'static str {
        match self {
            BuilderType::Bool => "Bool",
            BuilderType::Integer => "Integer",
            BuilderType::Date => "Date",
            BuilderType::Timestamp => "Timestamp",
            BuilderType::TimestampWithZone => "Timestampz",
            BuilderType::Time => "Time",
            BuilderType::TimeWithZone => "Timez",
            BuilderType::Float => "Float",
            BuilderType::String => "String",
        }
    }
}

impl fmt::Display for BuilderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.builder_name())
    }
}

/// Concrete storage type holding a column's decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    // ===== Scalars =====
    /// Boolean.
    Bool,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,

    // ===== Values =====
    /// Timestamp value type; shared by date, time and timestamp columns.
    Timestamp,
    /// UUID value type.
    Uuid,
    /// Text.
    String,

    // ===== Collections =====
    /// Raw byte sequence.
    Bytes,

    // ===== Generated =====
    /// Generated enum type for a catalog user-defined type.
    Enum(String),
}

impl StorageType {
    /// Whether an empty value already stands for absence.
    ///
    /// Collection-like types are never wrapped as nullable: consumers do not
    /// distinguish "no bytes" from NULL.
    pub fn absence_via_empty(&self) -> bool {
        matches!(self, StorageType::Bytes)
    }
}

/// Storage type after nullability decoration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelType {
    /// Underlying storage type.
    pub storage: StorageType,
    /// Whether the model wraps the storage type as optional.
    pub nullable: bool,
}

impl ModelType {
    /// Model type that is exactly the storage type.
    pub fn plain(storage: StorageType) -> Self {
        Self {
            storage,
            nullable: false,
        }
    }

    /// Model type that wraps the storage type as optional.
    pub fn nullable(storage: StorageType) -> Self {
        Self {
            storage,
            nullable: true,
        }
    }
}
