//! Quadrant subdivision and same-depth neighbours of a region.

use super::path::Quadrant;
use quadpath_types::{Point, Region};
use serde::{Deserialize, Serialize};

/// Compass direction of a same-depth neighbour.
///
/// Variants are declared in the canonical neighbour order used by
/// [`adjacent`]: x offset major, y offset minor, skipping `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    SouthWest,
    West,
    NorthWest,
    South,
    North,
    SouthEast,
    East,
    NorthEast,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 8] = [
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
    ];

    /// Cell offset `(dx, dy)`, each in `{-1, 0, 1}`.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
            Direction::South => (0, -1),
            Direction::North => (0, 1),
            Direction::SouthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::NorthEast => (1, 1),
        }
    }

    /// Position within [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back.
    ///
    /// The canonical order is symmetric, so the opposite of index `i` is
    /// always index `7 - i`.
    pub fn opposite(self) -> Direction {
        Self::ALL[7 - self.index()]
    }
}

/// The four children of `region`, indexed by [`Quadrant`].
///
/// Every child is one level deeper with half the parent's width and height.
/// Lower and upper halves meet at the parent's midpoint, and upper halves end
/// exactly at the parent's `max`, so the children tile the parent with no gap
/// or overlap under the half-open containment rule.
///
/// # Examples
///
/// ```
/// use quadpath::tree::children;
/// use quadpath::{Point, Region};
///
/// let parent = Region::new(Point::new(0.0, 0.0), Point::new(128.0, 256.0), 1);
/// let [sw, se, nw, ne] = children(&parent);
/// assert_eq!(sw.max, Point::new(64.0, 128.0));
/// assert_eq!(se.min, Point::new(64.0, 0.0));
/// assert_eq!(nw.min, Point::new(0.0, 128.0));
/// assert_eq!(ne.max, parent.max);
/// assert_eq!(ne.depth, 2);
/// ```
pub fn children(region: &Region) -> [Region; 4] {
    let mid = Point::new(
        region.min.x() + region.width() / 2.0,
        region.min.y() + region.height() / 2.0,
    );
    Quadrant::ALL.map(|quadrant| child(region, mid, quadrant))
}

/// A single child of `region`.
pub fn child_of(region: &Region, quadrant: Quadrant) -> Region {
    let mid = Point::new(
        region.min.x() + region.width() / 2.0,
        region.min.y() + region.height() / 2.0,
    );
    child(region, mid, quadrant)
}

fn child(region: &Region, mid: Point, quadrant: Quadrant) -> Region {
    let (min_x, max_x) = if quadrant.is_upper_x() {
        (mid.x(), region.max.x())
    } else {
        (region.min.x(), mid.x())
    };
    let (min_y, max_y) = if quadrant.is_upper_y() {
        (mid.y(), region.max.y())
    } else {
        (region.min.y(), mid.y())
    };
    Region::new(
        Point::new(min_x, min_y),
        Point::new(max_x, max_y),
        region.depth + 1,
    )
}

/// The eight same-depth neighbours of `region`, in [`Direction::ALL`] order.
///
/// Neighbours are not clamped to any root bounds: a region on the edge of
/// the indexed area still gets neighbours hanging outside of it.
pub fn adjacent(region: &Region) -> [Region; 8] {
    Direction::ALL.map(|direction| neighbor(region, direction))
}

/// The same-depth neighbour of `region` in one direction.
pub fn neighbor(region: &Region, direction: Direction) -> Region {
    let (dx, dy) = direction.offset();
    region.translate(f64::from(dx), f64::from(dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(min: (f64, f64), max: (f64, f64), depth: u32) -> Region {
        Region::new(min.into(), max.into(), depth)
    }

    #[test]
    fn test_children_halve_parent() {
        let parent = region((0.0, 0.0), (128.0, 256.0), 1);

        for ch in children(&parent) {
            assert_eq!(parent.width(), ch.width() * 2.0);
            assert_eq!(parent.height(), ch.height() * 2.0);
            assert!(parent.contains(&ch.min), "child outside parent: {:?}", ch);
            assert_eq!(ch.depth, parent.depth + 1);
        }
    }

    #[test]
    fn test_children_quadrant_layout() {
        let parent = region((-10.0, -10.0), (10.0, 10.0), 0);
        let kids = children(&parent);

        assert_eq!(kids[0], region((-10.0, -10.0), (0.0, 0.0), 1));
        assert_eq!(kids[1], region((0.0, -10.0), (10.0, 0.0), 1));
        assert_eq!(kids[2], region((-10.0, 0.0), (0.0, 10.0), 1));
        assert_eq!(kids[3], region((0.0, 0.0), (10.0, 10.0), 1));

        for q in Quadrant::ALL {
            assert_eq!(child_of(&parent, q), kids[q.index()]);
        }
    }

    #[test]
    fn test_children_tile_parent_without_float_gaps() {
        // Widths that do not halve exactly still share seams.
        let parent = region((0.1, 0.3), (0.7, 1.1), 4);
        let [sw, se, nw, ne] = children(&parent);

        assert_eq!(sw.max.x(), se.min.x());
        assert_eq!(nw.max.x(), ne.min.x());
        assert_eq!(sw.max.y(), nw.min.y());
        assert_eq!(se.max.y(), ne.min.y());
        assert_eq!(se.max.x(), parent.max.x());
        assert_eq!(ne.max, parent.max);
        assert_eq!(sw.min, parent.min);
    }

    #[test]
    fn test_every_point_in_exactly_one_child() {
        let parent = region((0.0, 0.0), (3.0, 3.0), 0);
        let kids = children(&parent);
        let steps = [0.0, 0.75, 1.5, 1.5 - 1e-12, 2.25, 3.0 - 1e-12];

        for &x in &steps {
            for &y in &steps {
                let p = Point::new(x, y);
                let owners = kids.iter().filter(|k| k.contains(&p)).count();
                assert_eq!(owners, 1, "point {:?} owned by {} children", p, owners);
            }
        }
    }

    #[test]
    fn test_adjacent_canonical_order() {
        let center = region((4.0, 8.0), (6.0, 12.0), 3);
        let neighbours = adjacent(&center);

        let expected_mins = [
            (2.0, 4.0),
            (2.0, 8.0),
            (2.0, 12.0),
            (4.0, 4.0),
            (4.0, 12.0),
            (6.0, 4.0),
            (6.0, 8.0),
            (6.0, 12.0),
        ];
        for (n, min) in neighbours.iter().zip(expected_mins) {
            assert_eq!(n.min, Point::from(min));
            assert_eq!(n.width(), center.width());
            assert_eq!(n.height(), center.height());
            assert_eq!(n.depth, center.depth);
        }
    }

    #[test]
    fn test_adjacent_is_not_clamped() {
        let corner = region((0.0, 0.0), (1.0, 1.0), 5);
        let sw = neighbor(&corner, Direction::SouthWest);
        assert_eq!(sw, region((-1.0, -1.0), (0.0, 0.0), 5));
    }

    #[test]
    fn test_adjacent_symmetry() {
        let center = region((16.0, 32.0), (24.0, 40.0), 4);

        for (i, n) in adjacent(&center).iter().enumerate() {
            let back = adjacent(n)[7 - i];
            assert_eq!(back, center, "direction {:?}", Direction::ALL[i]);
            assert_eq!(Direction::ALL[i].opposite().index(), 7 - i);
        }
    }

    #[test]
    fn test_direction_offsets_cover_ring() {
        let mut offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert_eq!(d.opposite().offset(), (-dx, -dy));
        }
    }
}
