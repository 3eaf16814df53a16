//! Index builder for flexible configuration
//!
//! This module provides a builder pattern for creating indexes from loose
//! bounds and depth settings, or from a prepared [`IndexConfig`].

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::index::QuadIndex;
use crate::storage::{MemoryBackend, StorageBackend};
use quadpath_types::Point;

/// Builder for index configuration with root bounds and storage depth.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    config: Option<IndexConfig>,
    bounds: Option<(Point, Point)>,
    storage_depth: Option<u32>,
}

impl IndexBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self {
            config: None,
            bounds: None,
            storage_depth: None,
        }
    }

    /// Set the root rectangle `[min, max)`. Overrides the bounds of any
    /// config passed to [`IndexBuilder::config`].
    pub fn bounds(mut self, min: Point, max: Point) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Set the depth at which points are encoded when stored.
    pub fn storage_depth(mut self, depth: u32) -> Self {
        self.storage_depth = Some(depth);
        self
    }

    /// Start from a complete configuration.
    pub fn config(mut self, config: IndexConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Resolve the settings into a validated configuration.
    pub fn into_config(self) -> Result<IndexConfig> {
        let mut config = match (self.config, self.bounds) {
            (Some(mut config), Some((min, max))) => {
                config.min = min;
                config.max = max;
                config
            }
            (Some(config), None) => config,
            (None, Some((min, max))) => IndexConfig::new(min, max),
            (None, None) => {
                return Err(IndexError::InvalidConfig(
                    "index bounds must be set before building".to_string(),
                ));
            }
        };

        if let Some(depth) = self.storage_depth {
            config = config.with_storage_depth(depth);
        }

        config.validate().map_err(IndexError::InvalidConfig)?;
        Ok(config)
    }

    /// Build an in-memory index.
    pub fn build(self) -> Result<QuadIndex<MemoryBackend>> {
        self.build_with(MemoryBackend::new())
    }

    /// Build an index over a caller-supplied backend.
    pub fn build_with<S: StorageBackend>(self, backend: S) -> Result<QuadIndex<S>> {
        QuadIndex::new(self.into_config()?, backend)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_bounds() {
        let err = IndexBuilder::new().build().unwrap_err();
        assert!(matches!(err, IndexError::InvalidConfig(_)));
    }

    #[test]
    fn test_builder_with_bounds() {
        let mut index = IndexBuilder::new()
            .bounds(Point::new(0.0, 0.0), Point::new(32.0, 32.0))
            .storage_depth(6)
            .build()
            .unwrap();

        assert_eq!(index.storage_depth(), 6);
        let id = index.insert(Point::new(8.1, 8.2), "value").unwrap();
        assert_eq!(index.get(id).unwrap().unwrap().path.depth(), 6);
    }

    #[test]
    fn test_builder_with_config() {
        let config =
            IndexConfig::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0)).with_storage_depth(4);
        let index = IndexBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(index.config(), &config);
    }

    #[test]
    fn test_builder_bounds_override_config() {
        let config = IndexConfig::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let resolved = IndexBuilder::default()
            .config(config)
            .bounds(Point::new(0.0, 0.0), Point::new(64.0, 16.0))
            .into_config()
            .unwrap();
        assert_eq!(resolved.max, Point::new(64.0, 16.0));
        assert_eq!(resolved.storage_depth, 10);
    }

    #[test]
    fn test_builder_rejects_invalid_settings() {
        let inverted = IndexBuilder::new()
            .bounds(Point::new(1.0, 0.0), Point::new(0.0, 1.0))
            .build();
        assert!(matches!(inverted, Err(IndexError::InvalidConfig(_))));

        let too_shallow = IndexBuilder::new()
            .bounds(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .storage_depth(0)
            .build();
        assert!(matches!(too_shallow, Err(IndexError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_custom_backend() {
        let index = IndexBuilder::new()
            .bounds(Point::new(0.0, 0.0), Point::new(8.0, 8.0))
            .build_with(MemoryBackend::with_capacity(16))
            .unwrap();
        assert!(index.is_empty().unwrap());
    }
}
