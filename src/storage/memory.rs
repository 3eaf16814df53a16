//! In-memory storage backend implementation.

use super::{PointId, StorageBackend, StorageStats, StoredPoint};
use crate::error::Result;
use crate::tree::{KeyRange, Path};
use bytes::Bytes;
use quadpath_types::Point;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::ops::Bound;

/// In-memory storage backend.
///
/// Records live in a hash map keyed by id; a separate ordered set of
/// `(path, id)` pairs serves range scans the way a B-tree index on the path
/// column would in a SQL store.
#[derive(Debug)]
pub struct MemoryBackend {
    records: FxHashMap<PointId, StoredPoint>,
    keys: BTreeSet<(String, PointId)>,
    next_id: PointId,
    stats: StorageStats,
}

impl MemoryBackend {
    /// Create a new in-memory storage backend
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
            keys: BTreeSet::new(),
            next_id: 1,
            stats: StorageStats::default(),
        }
    }

    /// Create with initial capacity hint
    pub fn with_capacity(capacity: usize) -> Self {
        let mut backend = Self::new();
        backend.records.reserve(capacity);
        backend
    }

    /// Iterate stored points in path order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &StoredPoint> {
        self.keys.iter().filter_map(|(_, id)| self.records.get(id))
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn put(&mut self, point: Point, path: &Path, payload: Bytes) -> Result<PointId> {
        let id = self.next_id;
        self.next_id += 1;

        self.keys.insert((path.as_str().to_string(), id));
        self.records.insert(
            id,
            StoredPoint {
                id,
                point,
                path: path.clone(),
                payload,
            },
        );
        self.stats.operations_count += 1;

        Ok(id)
    }

    fn get(&self, id: PointId) -> Result<Option<StoredPoint>> {
        Ok(self.records.get(&id).cloned())
    }

    fn delete(&mut self, id: PointId) -> Result<Option<StoredPoint>> {
        let old = self.records.remove(&id);
        if let Some(record) = &old {
            self.keys.remove(&(record.path.as_str().to_string(), id));
        }
        self.stats.operations_count += 1;

        Ok(old)
    }

    fn range_query(&self, range: &KeyRange) -> Result<Vec<StoredPoint>> {
        let lower = Bound::Included((range.lower().to_string(), PointId::MIN));
        let upper = Bound::Excluded((range.upper().to_string(), PointId::MIN));

        Ok(self
            .keys
            .range((lower, upper))
            .filter_map(|(_, id)| self.records.get(id).cloned())
            .collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.records.is_empty())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.keys.clear();
        self.stats = StorageStats::default();
        Ok(())
    }

    fn stats(&self) -> Result<StorageStats> {
        let mut stats = self.stats.clone();
        stats.point_count = self.records.len();
        stats.size_bytes = self
            .records
            .values()
            .map(|r| r.path.as_str().len() + r.payload.len())
            .sum();
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> Path {
        s.parse().unwrap()
    }

    fn range(s: &str) -> KeyRange {
        KeyRange::descendants(&path(s))
    }

    #[test]
    fn test_memory_backend_basic_ops() {
        let mut backend = MemoryBackend::new();

        let id = backend
            .put(Point::new(1.0, 2.0), &path("0312"), Bytes::from_static(b"a"))
            .unwrap();
        assert_eq!(id, 1);

        let stored = backend.get(id).unwrap().unwrap();
        assert_eq!(stored.point, Point::new(1.0, 2.0));
        assert_eq!(stored.path.as_str(), "0312");
        assert_eq!(stored.payload.as_ref(), b"a");

        let deleted = backend.delete(id).unwrap().unwrap();
        assert_eq!(deleted.id, id);
        assert!(backend.get(id).unwrap().is_none());
        assert!(backend.delete(id).unwrap().is_none());
        assert!(backend.is_empty().unwrap());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut backend = MemoryBackend::new();
        let p = Point::new(0.0, 0.0);
        let a = backend.put(p, &path("0"), Bytes::new()).unwrap();
        let b = backend.put(p, &path("0"), Bytes::new()).unwrap();
        backend.delete(a).unwrap();
        let c = backend.put(p, &path("0"), Bytes::new()).unwrap();
        assert!(a < b && b < c);
        assert_eq!(backend.len().unwrap(), 2);
    }

    #[test]
    fn test_range_query_prefix_semantics() {
        let mut backend = MemoryBackend::new();
        let p = Point::new(0.0, 0.0);
        for key in ["0000", "0001", "0033", "0100", "0333", "1000", "3333"] {
            backend.put(p, &path(key), Bytes::new()).unwrap();
        }

        let keys = |r: &str| -> Vec<String> {
            let mut found: Vec<_> = backend
                .range_query(&range(r))
                .unwrap()
                .into_iter()
                .map(|s| s.path.to_string())
                .collect();
            found.sort();
            found
        };

        assert_eq!(keys("00"), vec!["0000", "0001", "0033"]);
        assert_eq!(keys("0"), vec!["0000", "0001", "0033", "0100", "0333"]);
        assert_eq!(keys("0001"), vec!["0001"]);
        assert_eq!(keys("2"), Vec::<String>::new());
        assert_eq!(keys("").len(), 7);
    }

    #[test]
    fn test_range_query_with_duplicate_paths() {
        let mut backend = MemoryBackend::new();
        for i in 0..5 {
            backend
                .put(Point::new(i as f64, 0.0), &path("21"), Bytes::new())
                .unwrap();
        }
        backend.put(Point::new(9.0, 9.0), &path("22"), Bytes::new()).unwrap();

        assert_eq!(backend.range_query(&range("21")).unwrap().len(), 5);
        assert_eq!(backend.range_query(&range("2")).unwrap().len(), 6);
    }

    #[test]
    fn test_iter_ordered_follows_paths() {
        let mut backend = MemoryBackend::new();
        let p = Point::new(0.0, 0.0);
        for key in ["30", "01", "12", "00"] {
            backend.put(p, &path(key), Bytes::new()).unwrap();
        }
        let order: Vec<_> = backend.iter_ordered().map(|s| s.path.to_string()).collect();
        assert_eq!(order, vec!["00", "01", "12", "30"]);
    }

    #[test]
    fn test_stats_and_clear() {
        let mut backend = MemoryBackend::with_capacity(4);
        backend
            .put(Point::new(0.0, 0.0), &path("012"), Bytes::from_static(b"xy"))
            .unwrap();

        let stats = backend.stats().unwrap();
        assert_eq!(stats.point_count, 1);
        assert_eq!(stats.size_bytes, 5);
        assert_eq!(stats.operations_count, 1);

        backend.clear().unwrap();
        assert_eq!(backend.stats().unwrap(), StorageStats::default());
        assert!(backend.range_query(&range("")).unwrap().is_empty());
    }
}
