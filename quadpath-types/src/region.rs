use crate::point::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle at a given subdivision depth.
///
/// `min` is the inclusive lower corner and `max` the exclusive upper corner
/// on both axes. `depth` counts subdivisions from the root region.
///
/// Regions are plain values: two regions computed along different routes
/// compare equal whenever their corners and depth match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Inclusive lower corner
    pub min: Point,
    /// Exclusive upper corner
    pub max: Point,
    /// Number of subdivisions from the root
    pub depth: u32,
}

impl Region {
    /// Create a region from its corners and depth.
    ///
    /// No validation is performed; use [`Region::is_valid`] or let the
    /// index reject degenerate bounds when it is constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath_types::{Point, Region};
    ///
    /// let region = Region::new(Point::new(0.0, 0.0), Point::new(10.0, 20.0), 0);
    /// assert_eq!(region.width(), 10.0);
    /// assert_eq!(region.height(), 20.0);
    /// ```
    pub fn new(min: Point, max: Point, depth: u32) -> Self {
        Self { min, max, depth }
    }

    /// Width along the x axis.
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// Height along the y axis.
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Arithmetic center of the region.
    pub fn mid(&self) -> Point {
        Point::new(
            self.width() / 2.0 + self.min.x(),
            self.height() / 2.0 + self.min.y(),
        )
    }

    /// Half-open containment test.
    ///
    /// A point on the `max` edge belongs to the neighbouring region, which
    /// keeps every point of a subdivided region in exactly one child.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath_types::{Point, Region};
    ///
    /// let region = Region::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0);
    /// assert!(region.contains(&Point::new(0.0, 0.0)));
    /// assert!(region.contains(&Point::new(9.999, 9.999)));
    /// assert!(!region.contains(&Point::new(10.0, 5.0)));
    /// ```
    pub fn contains(&self, p: &Point) -> bool {
        self.min.x() <= p.x()
            && self.min.y() <= p.y()
            && p.x() < self.max.x()
            && p.y() < self.max.y()
    }

    /// Whether the corners are finite and strictly ordered on both axes.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x() < self.max.x()
            && self.min.y() < self.max.y()
    }

    /// The same-depth region shifted by whole cells.
    ///
    /// `dx` and `dy` are multiples of this region's own width and height.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let (w, h) = (self.width(), self.height());
        Self {
            min: Point::new(self.min.x() + dx * w, self.min.y() + dy * h),
            max: Point::new(self.max.x() + dx * w, self.max.y() + dy * h),
            depth: self.depth,
        }
    }

    /// Convert to a `geo::Rect` for use with `geo` algorithms.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.min.x(), y: self.min.y() },
            geo::coord! { x: self.max.x(), y: self.max.y() },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Region {
        Region::new(Point::new(0.0, 0.0), Point::new(size, size), 0)
    }

    #[test]
    fn test_region_mid() {
        let region = Region::new(Point::new(-10.0, 0.0), Point::new(10.0, 4.0), 2);
        assert_eq!(region.mid(), Point::new(0.0, 2.0));
    }

    #[test]
    fn test_region_contains_half_open() {
        let region = square(10.0);
        let eps = 0.0001;

        assert!(region.contains(&region.min));
        assert!(region.contains(&Point::new(10.0 - eps, 10.0 - eps)));

        assert!(!region.contains(&Point::new(-eps, 0.0)));
        assert!(!region.contains(&Point::new(10.0 - eps, 10.0)));
        assert!(!region.contains(&Point::new(0.0, -eps)));
        assert!(!region.contains(&Point::new(10.0, 10.0 - eps)));
        assert!(!region.contains(&region.max));
    }

    #[test]
    fn test_region_contains_rejects_nan() {
        assert!(!square(1.0).contains(&Point::new(f64::NAN, 0.5)));
    }

    #[test]
    fn test_region_validity() {
        assert!(square(1.0).is_valid());
        assert!(!square(0.0).is_valid());
        assert!(!Region::new(Point::new(0.0, 0.0), Point::new(1.0, -1.0), 0).is_valid());
        assert!(!Region::new(Point::new(0.0, 0.0), Point::new(f64::INFINITY, 1.0), 0).is_valid());
    }

    #[test]
    fn test_region_translate_uses_each_axis_size() {
        let region = Region::new(Point::new(0.0, 0.0), Point::new(2.0, 8.0), 3);
        let moved = region.translate(1.0, -1.0);
        assert_eq!(moved.min, Point::new(2.0, -8.0));
        assert_eq!(moved.max, Point::new(4.0, 0.0));
        assert_eq!(moved.depth, 3);
    }

    #[test]
    fn test_region_to_rect() {
        let rect = square(4.0).to_rect();
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 4.0);
    }
}
