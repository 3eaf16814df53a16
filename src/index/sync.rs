//! Thread-safe wrapper for concurrent index access.
//!
//! This module provides `SyncIndex`, a thread-safe wrapper around `QuadIndex`
//! that uses `Arc<RwLock<QuadIndex>>` internally to allow safe concurrent
//! access from multiple threads.
//!
//! # Features
//!
//! Enabled by the `sync` feature (on by default):
//!
//! ```toml
//! [dependencies]
//! quadpath = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use quadpath::{IndexConfig, Point, SyncIndex};
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IndexConfig::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
//! let index = SyncIndex::memory(config)?;
//!
//! let writer = index.clone();
//! let handle = thread::spawn(move || {
//!     writer.insert(Point::new(10.0, 10.0), "from thread").unwrap();
//! });
//! handle.join().unwrap();
//!
//! assert_eq!(index.circle_search(&Point::new(10.0, 10.0), 1.0)?.len(), 1);
//! # Ok(())
//! # }
//! ```

use super::QuadIndex;
use crate::config::IndexConfig;
use crate::error::Result;
use crate::storage::{MemoryBackend, PointId, StorageBackend, StoredPoint};
use crate::tree::{Path, Tree};
use bytes::Bytes;
use parking_lot::RwLock;
use quadpath_types::Point;
use std::sync::Arc;

/// Thread-safe wrapper around `QuadIndex` using `Arc<RwLock<QuadIndex>>`.
///
/// Searches take the read lock and run concurrently; inserts and removals
/// take the write lock. Encoding itself needs no locking, so the lock only
/// guards the backend.
pub struct SyncIndex<S: StorageBackend = MemoryBackend> {
    inner: Arc<RwLock<QuadIndex<S>>>,
}

impl<S: StorageBackend> Clone for SyncIndex<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SyncIndex<MemoryBackend> {
    /// Creates a new in-memory index.
    pub fn memory(config: IndexConfig) -> Result<Self> {
        Ok(Self::from_index(QuadIndex::memory(config)?))
    }
}

impl<S: StorageBackend> SyncIndex<S> {
    /// Creates an index over `backend`.
    pub fn new(config: IndexConfig, backend: S) -> Result<Self> {
        Ok(Self::from_index(QuadIndex::new(config, backend)?))
    }

    /// Wraps an existing index.
    pub fn from_index(index: QuadIndex<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// The tree shared by all clones.
    pub fn tree(&self) -> Tree {
        *self.inner.read().tree()
    }

    /// Inserts a point with an opaque payload.
    pub fn insert(&self, point: Point, payload: impl Into<Bytes>) -> Result<PointId> {
        self.inner.write().insert(point, payload)
    }

    /// Retrieves a stored point by id.
    pub fn get(&self, id: PointId) -> Result<Option<StoredPoint>> {
        self.inner.read().get(id)
    }

    /// Removes a stored point by id.
    pub fn remove(&self, id: PointId) -> Result<Option<StoredPoint>> {
        self.inner.write().remove(id)
    }

    pub fn len(&self) -> Result<usize> {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.inner.read().is_empty()
    }

    /// Bounding search at `depth` around `point`.
    pub fn search(&self, point: &Point, depth: u32) -> Result<Vec<StoredPoint>> {
        self.inner.read().search(point, depth)
    }

    /// Range scan for an already-encoded path.
    pub fn search_path(&self, path: &Path) -> Result<Vec<StoredPoint>> {
        self.inner.read().search_path(path)
    }

    /// Centre region plus its eight neighbours.
    pub fn neighborhood_search(&self, point: &Point, depth: u32) -> Result<Vec<StoredPoint>> {
        self.inner.read().neighborhood_search(point, depth)
    }

    /// Points within `radius` of `center`.
    pub fn circle_search(&self, center: &Point, radius: f64) -> Result<Vec<StoredPoint>> {
        self.inner.read().circle_search(center, radius)
    }

    /// Diagonal run of regions from `begin` towards `end`.
    pub fn corridor_search(
        &self,
        begin: &Point,
        end: &Point,
        depth: u32,
    ) -> Result<Vec<StoredPoint>> {
        self.inner.read().corridor_search(begin, end, depth)
    }

    /// Runs `f` with shared access to the wrapped index.
    pub fn with_read<R>(&self, f: impl FnOnce(&QuadIndex<S>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the wrapped index.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut QuadIndex<S>) -> R) -> R {
        f(&mut self.inner.write())
    }
}
