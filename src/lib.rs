//! Linear quadtree spatial index.
//!
//! Points are encoded as quadrant paths over an implicit quadtree and stored
//! under those paths. Every region query becomes a prefix range scan over the
//! ordered keys, so any ordered key-value store can serve as the backend.
//!
//! ```rust
//! use quadpath::{IndexConfig, Point, QuadIndex};
//!
//! let config = IndexConfig::new(Point::new(0.0, 0.0), Point::new(32.0, 32.0));
//! let mut index = QuadIndex::memory(config)?;
//!
//! index.insert(Point::new(8.1, 8.2), "cafe")?;
//!
//! let hash = index.hash(&Point::new(8.1, 8.2), 3)?;
//! assert_eq!(hash.path.as_str(), "030");
//!
//! let nearby = index.circle_search(&Point::new(8.0, 8.0), 1.0)?;
//! assert_eq!(nearby.len(), 1);
//! # Ok::<(), quadpath::IndexError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;
pub mod storage;
pub mod tree;

pub use builder::IndexBuilder;
pub use config::IndexConfig;
pub use error::{IndexError, Result};
pub use index::QuadIndex;

#[cfg(feature = "sync")]
pub use index::SyncIndex;

pub use geo::Rect;
pub use quadpath_types::{Point, Region};

pub use tree::{
    Direction, KeyRange, MAX_DEPTH, Path, QuadHash, Quadrant, TERMINATOR, Tree,
};

pub use storage::{MemoryBackend, PointId, StorageBackend, StorageStats, StoredPoint};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{IndexBuilder, IndexConfig, IndexError, QuadIndex, Result};

    #[cfg(feature = "sync")]
    pub use crate::SyncIndex;

    pub use crate::{Path, Point, QuadHash, Region, Tree};

    pub use crate::{MemoryBackend, StorageBackend, StoredPoint};
}
