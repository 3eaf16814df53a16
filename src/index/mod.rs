//! The quadpath index: encoding on write, prefix range scans on read.
//!
//! `QuadIndex` owns a [`Tree`] and a storage backend. Points are encoded once
//! at the configured storage depth when inserted. Queries encode the query
//! point at a shallower depth and ask the backend for every stored path
//! under that prefix, so a 2D containment question becomes a 1D range scan.

use crate::compute::search::{query_depth_for_radius, retain_within_radius};
use crate::compute::validation::validate_point;
use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::storage::{MemoryBackend, PointId, StorageBackend, StoredPoint};
use crate::tree::{Direction, KeyRange, Path, QuadHash, Tree, adjacent, neighbor};
use bytes::Bytes;
use quadpath_types::Point;

#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "sync")]
pub use sync::SyncIndex;

/// Linear quadtree index over a storage backend.
///
/// The tree and storage depth are fixed at construction. Reads take `&self`
/// and never mutate index state; writes go straight to the backend.
///
/// # Examples
///
/// ```
/// use quadpath::{IndexConfig, Point, QuadIndex};
///
/// let config = IndexConfig::new(Point::new(0.0, 0.0), Point::new(32.0, 32.0));
/// let mut index = QuadIndex::memory(config)?;
///
/// index.insert(Point::new(8.1, 8.2), "a")?;
/// index.insert(Point::new(20.0, 20.0), "b")?;
///
/// let found = index.search(&Point::new(8.0, 8.0), 3)?;
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].payload.as_ref(), b"a");
///
/// let near = index.circle_search(&Point::new(19.0, 19.0), 2.0)?;
/// assert_eq!(near.len(), 1);
/// # Ok::<(), quadpath::IndexError>(())
/// ```
#[derive(Debug)]
pub struct QuadIndex<S: StorageBackend = MemoryBackend> {
    tree: Tree,
    config: IndexConfig,
    backend: S,
}

impl QuadIndex<MemoryBackend> {
    /// Create an index backed by a fresh [`MemoryBackend`].
    pub fn memory(config: IndexConfig) -> Result<Self> {
        Self::new(config, MemoryBackend::new())
    }

    pub fn builder() -> crate::builder::IndexBuilder {
        crate::builder::IndexBuilder::new()
    }
}

impl<S: StorageBackend> QuadIndex<S> {
    /// Create an index over `backend`.
    ///
    /// The backend is expected to hold only paths encoded with the same
    /// bounds and storage depth.
    pub fn new(config: IndexConfig, backend: S) -> Result<Self> {
        config.validate().map_err(IndexError::InvalidConfig)?;
        let tree = Tree::new(config.min, config.max)?;

        log::debug!(
            "Opened quadpath index over ({}, {})..({}, {}) at storage depth {}",
            config.min.x(),
            config.min.y(),
            config.max.x(),
            config.max.y(),
            config.storage_depth
        );

        Ok(Self {
            tree,
            config,
            backend,
        })
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn storage_depth(&self) -> u32 {
        self.config.storage_depth
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Encode `point` at `depth` against this index's tree.
    pub fn hash(&self, point: &Point, depth: u32) -> Result<QuadHash> {
        self.tree.hash(point, depth)
    }

    /// Store a point with an opaque payload.
    ///
    /// The point is encoded at the storage depth; points outside the root
    /// bounds are rejected before the backend is touched.
    pub fn insert(&mut self, point: Point, payload: impl Into<Bytes>) -> Result<PointId> {
        let hash = self.tree.hash(&point, self.config.storage_depth)?;
        self.backend.put(point, &hash.path, payload.into())
    }

    /// Store many points with empty payloads.
    ///
    /// Stops at the first failure; points stored before it stay stored.
    pub fn insert_points<I>(&mut self, points: I) -> Result<Vec<PointId>>
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .map(|point| self.insert(point, Bytes::new()))
            .collect()
    }

    pub fn get(&self, id: PointId) -> Result<Option<StoredPoint>> {
        self.backend.get(id)
    }

    pub fn remove(&mut self, id: PointId) -> Result<Option<StoredPoint>> {
        self.backend.delete(id)
    }

    pub fn len(&self) -> Result<usize> {
        self.backend.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.backend.is_empty()
    }

    /// Bounding search: every stored point inside the depth-`depth` region
    /// containing `point`.
    ///
    /// Results are not filtered; the prefix property guarantees they lie in
    /// the region. `depth` may not exceed the storage depth.
    pub fn search(&self, point: &Point, depth: u32) -> Result<Vec<StoredPoint>> {
        self.check_query_depth(depth)?;
        let hash = self.tree.hash(point, depth)?;
        self.search_path(&hash.path)
    }

    /// Every stored point at or below the region named by `path`.
    pub fn search_path(&self, path: &Path) -> Result<Vec<StoredPoint>> {
        self.check_query_depth(path.depth())?;
        let range = KeyRange::descendants(path);
        let found = self.backend.range_query(&range)?;
        log::debug!("Range scan {} returned {} points", range, found.len());
        Ok(found)
    }

    /// Points in the region containing `point` and its eight same-depth
    /// neighbours, unfiltered.
    ///
    /// Neighbours whose midpoint falls outside the root bounds hold no
    /// points and are skipped.
    pub fn neighborhood_search(&self, point: &Point, depth: u32) -> Result<Vec<StoredPoint>> {
        self.check_query_depth(depth)?;
        let center = self.tree.hash(point, depth)?;
        let mut candidates = self.search_path(&center.path)?;

        for region in adjacent(&center.region) {
            let mid = region.mid();
            if !self.tree.contains(&mid) {
                log::trace!(
                    "Skipping neighbour at ({}, {}) outside the index bounds",
                    mid.x(),
                    mid.y()
                );
                continue;
            }
            candidates.extend(self.search(&mid, depth)?);
        }

        Ok(candidates)
    }

    /// Circle search: stored points within `radius` of `center`.
    ///
    /// Picks the deepest level whose regions are still wider than the
    /// radius, gathers the centre region and its eight neighbours, then keeps
    /// candidates by exact distance. Every stored point within `radius` is
    /// inside that 3x3 block, so nothing within range is missed; the only
    /// exception is a radius of the root's size or more, where the root
    /// alone is scanned and already holds every point.
    pub fn circle_search(&self, center: &Point, radius: f64) -> Result<Vec<StoredPoint>> {
        let depth = query_depth_for_radius(&self.tree, radius, self.config.storage_depth)?;
        log::debug!(
            "Circle search at ({}, {}) radius {} uses depth {}",
            center.x(),
            center.y(),
            radius,
            depth
        );

        let mut candidates = self.neighborhood_search(center, depth)?;
        let scanned = candidates.len();
        retain_within_radius(&mut candidates, center, radius);
        log::debug!(
            "Circle search kept {} of {} candidates",
            candidates.len(),
            scanned
        );

        Ok(candidates)
    }

    /// Points in the diagonal run of regions from `begin` towards `end`.
    ///
    /// Starts at the depth-`depth` region containing `begin` and repeatedly
    /// steps to its north-east neighbour while the region's lower corner is
    /// not past `end` on either axis and the region is inside the root.
    pub fn corridor_search(
        &self,
        begin: &Point,
        end: &Point,
        depth: u32,
    ) -> Result<Vec<StoredPoint>> {
        self.check_query_depth(depth)?;
        validate_point(end)?;

        let mut region = self.tree.hash(begin, depth)?.region;
        let mut found = Vec::new();

        while region.min.x() <= end.x() && region.min.y() <= end.y() {
            let mid = region.mid();
            if !self.tree.contains(&mid) {
                break;
            }
            found.extend(self.search(&mid, depth)?);
            region = neighbor(&region, Direction::NorthEast);
        }

        Ok(found)
    }

    fn check_query_depth(&self, depth: u32) -> Result<()> {
        if depth > self.config.storage_depth {
            return Err(IndexError::InvalidArgument(format!(
                "query depth {} exceeds the storage depth {}",
                depth, self.config.storage_depth
            )));
        }
        Ok(())
    }
}
