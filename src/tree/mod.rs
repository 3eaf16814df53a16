//! Implicit linear quadtree.
//!
//! The tree is never materialised. It is fully described by its root
//! region, and every region below it is recomputed on demand by repeated
//! halving. Encoding a point walks that subdivision from the root, recording
//! one quadrant symbol per level; the resulting [`Path`] is a prefix of the
//! path the same point gets at any greater depth.

mod partition;
mod path;
mod range;

pub use partition::{Direction, adjacent, child_of, children, neighbor};
pub use path::{Path, QUADRANT_SYMBOLS, Quadrant, TERMINATOR};
pub use range::KeyRange;

use crate::compute::validation::{validate_bounds, validate_depth};
use crate::error::{IndexError, Result};
use geo::Rect;
use quadpath_types::{Point, Region};
use serde::{Deserialize, Serialize};

/// Deepest level the encoder will descend to.
///
/// Halving a region 48 times leaves a fraction of 2^-48 of the root side,
/// still several bits above f64 resolution for coordinates of the same
/// magnitude as the root.
pub const MAX_DEPTH: u32 = 48;

/// Region and path produced by encoding a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadHash {
    /// The region at the requested depth containing the point
    pub region: Region,
    /// Root-to-region quadrant path, one symbol per level
    pub path: Path,
}

/// Root of the implicit quadtree.
///
/// Immutable after construction; cheap to copy and safe to share.
///
/// # Examples
///
/// ```
/// use quadpath::tree::Tree;
/// use quadpath::Point;
///
/// let tree = Tree::new(Point::new(0.0, 0.0), Point::new(128.0, 128.0))?;
/// assert_eq!(tree.hash(&Point::new(32.0, 32.0), 2)?.path.as_str(), "03");
/// assert_eq!(tree.hash(&Point::new(127.0, 127.0), 1)?.path.as_str(), "3");
/// # Ok::<(), quadpath::IndexError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    root: Region,
}

impl Tree {
    /// Create a tree over the half-open rectangle `[min, max)`.
    pub fn new(min: Point, max: Point) -> Result<Self> {
        validate_bounds(&min, &max)?;
        Ok(Self {
            root: Region::new(min, max, 0),
        })
    }

    /// The depth-0 region.
    pub fn root(&self) -> &Region {
        &self.root
    }

    /// Root bounds as a `geo::Rect`.
    pub fn bounding_rect(&self) -> Rect {
        self.root.to_rect()
    }

    /// Whether `point` can be encoded by this tree.
    pub fn contains(&self, point: &Point) -> bool {
        self.root.contains(point)
    }

    /// Encode `point` at `depth`.
    ///
    /// Descends from the root, at each level picking the unique child that
    /// contains the point. Points outside the root are rejected with
    /// [`IndexError::PointOutOfBounds`] before any descent.
    pub fn hash(&self, point: &Point, depth: u32) -> Result<QuadHash> {
        validate_depth(depth)?;
        if !self.root.contains(point) {
            return Err(IndexError::out_of_bounds(point));
        }

        let mut region = self.root;
        let mut path = Path::with_capacity(depth);

        while region.depth < depth {
            let kids = children(&region);
            let Some(quadrant) = Quadrant::ALL
                .into_iter()
                .find(|q| kids[q.index()].contains(point))
            else {
                // Only reachable if subdivision collapsed under float precision.
                return Err(IndexError::out_of_bounds(point));
            };
            path.push(quadrant);
            region = kids[quadrant.index()];
        }

        Ok(QuadHash { region, path })
    }

    /// Region named by `path`, recomputed by the same halving as [`Tree::hash`].
    pub fn region_for_path(&self, path: &Path) -> Region {
        path.quadrants()
            .fold(self.root, |region, quadrant| child_of(&region, quadrant))
    }

    /// Side length of regions at `depth` along the x axis.
    pub fn width_at(&self, depth: u32) -> f64 {
        self.root.width() / 2f64.powi(depth as i32)
    }

    /// Shorter side of regions at `depth`.
    pub fn min_side_at(&self, depth: u32) -> f64 {
        self.root.width().min(self.root.height()) / 2f64.powi(depth as i32)
    }
}
