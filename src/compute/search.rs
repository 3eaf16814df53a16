//! Pure helpers behind the index search operations.

use crate::compute::validation::validate_radius;
use crate::error::Result;
use crate::storage::StoredPoint;
use crate::tree::Tree;
use quadpath_types::Point;

/// Depth used by circle search for `radius`.
///
/// Counts levels while the region size at that level (the shorter side, which
/// is the width for a square root) is still greater than the radius, then steps back one level: the result is the deepest level
/// whose regions are still wider than the radius, so the 3x3 block around
/// the centre region reaches at least `radius` past the centre in every
/// direction.
///
/// A radius at least as wide as the root saturates at depth 0. The result is
/// capped at `max_depth`, since no stored key is longer than the storage
/// depth and a longer prefix would match nothing.
///
/// # Examples
///
/// ```
/// use quadpath::compute::search::query_depth_for_radius;
/// use quadpath::{Point, tree::Tree};
///
/// let tree = Tree::new(Point::new(0.0, 0.0), Point::new(32.0, 32.0))?;
/// // widths: 32, 16, 8, 4 -> 4 is the first not above 5, step back to 8
/// assert_eq!(query_depth_for_radius(&tree, 5.0, 10)?, 2);
/// assert_eq!(query_depth_for_radius(&tree, 100.0, 10)?, 0);
/// assert_eq!(query_depth_for_radius(&tree, 0.001, 6)?, 6);
/// # Ok::<(), quadpath::IndexError>(())
/// ```
pub fn query_depth_for_radius(tree: &Tree, radius: f64, max_depth: u32) -> Result<u32> {
    validate_radius(radius)?;

    let mut depth = 0u32;
    while depth <= max_depth && radius < tree.min_side_at(depth) {
        depth += 1;
    }
    Ok(depth.saturating_sub(1).min(max_depth))
}

/// Keep only candidates whose true distance to `center` is within `radius`.
pub fn retain_within_radius(candidates: &mut Vec<StoredPoint>, center: &Point, radius: f64) {
    let radius_sq = radius * radius;
    candidates.retain(|c| c.point.distance_squared(center) <= radius_sq);
}
