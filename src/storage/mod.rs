//! Storage backend abstraction for quadpath
//!
//! The index never stores points itself. It encodes each point once at the
//! storage depth and hands the point and its path to a backend, then answers
//! queries by asking the backend for every record whose path falls inside a
//! [`KeyRange`]. Any ordered key-value or SQL store can play this role.

use crate::error::Result;
use crate::tree::{KeyRange, Path};
use bytes::Bytes;
use quadpath_types::Point;
use serde::{Deserialize, Serialize};

mod memory;

pub use memory::MemoryBackend;

/// Identifier assigned by a backend when a point is stored.
pub type PointId = u64;

/// A persisted point together with its storage-depth path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPoint {
    pub id: PointId,
    pub point: Point,
    pub path: Path,
    /// Opaque caller value kept alongside the point
    pub payload: Bytes,
}

/// Trait for storage backend implementations
///
/// This trait abstracts the storage layer, allowing for different backends
/// such as in-memory maps, embedded databases, or remote SQL servers.
/// Backend failures are returned as [`IndexError::Storage`] and reach the
/// caller unchanged; the index performs no retries.
///
/// [`IndexError::Storage`]: crate::IndexError::Storage
pub trait StorageBackend: Send + Sync {
    /// Persist a point with its encoded path and return its new id
    fn put(&mut self, point: Point, path: &Path, payload: Bytes) -> Result<PointId>;

    /// Get a stored point by id
    fn get(&self, id: PointId) -> Result<Option<StoredPoint>>;

    /// Delete a point and return it if it existed
    fn delete(&mut self, id: PointId) -> Result<Option<StoredPoint>>;

    /// All points whose path lies in `[range.lower(), range.upper())`.
    ///
    /// Order of the returned points is unspecified.
    fn range_query(&self, range: &KeyRange) -> Result<Vec<StoredPoint>>;

    /// Get the total number of stored points
    fn len(&self) -> Result<usize>;

    /// Check if the storage is empty
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove every stored point
    fn clear(&mut self) -> Result<()>;

    /// Get storage statistics
    fn stats(&self) -> Result<StorageStats>;
}

/// Storage backend statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
    /// Total number of stored points
    pub point_count: usize,
    /// Approximate payload and key size in bytes
    pub size_bytes: usize,
    /// Number of write operations performed
    pub operations_count: u64,
}
