//! Metadata sources.
//!
//! The [`MetadataSource`](crate::core::MetadataSource) trait is the seam to a
//! live catalog. This crate ships only [`SnapshotSource`], which replays a
//! recorded `information_schema` snapshot.

mod snapshot;

pub use snapshot::{Snapshot, SnapshotSource, TableSnapshot};
