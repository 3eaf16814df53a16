//! Planar point type wrapping `geo::Point`.

use serde::{Deserialize, Serialize};

/// A point in the index's planar coordinate space.
///
/// This wraps `geo::Point` so callers can hand points to the wider `geo`
/// ecosystem without conversion. Points have no identity beyond their
/// coordinates and are never mutated after construction.
///
/// # Examples
///
/// ```
/// use quadpath_types::point::Point;
///
/// let p = Point::new(32.0, 16.0);
/// assert_eq!(p.x(), 32.0);
/// assert_eq!(p.y(), 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x and y coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Get the x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    /// Get the y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Squared straight-line distance to another point.
    ///
    /// Radius filters compare against `radius * radius` with this value so
    /// no square root is taken per candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath_types::point::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance_squared(&b), 25.0);
    /// ```
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    /// Calculate euclidean distance to another point.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath_types::point::Point;
    ///
    /// let p1 = Point::new(0.0, 0.0);
    /// let p2 = Point::new(3.0, 4.0);
    /// assert_eq!(p1.euclidean_distance(&p2), 5.0);
    /// ```
    #[inline]
    pub fn euclidean_distance(&self, other: &Point) -> f64 {
        use geo::Distance;
        geo::Euclidean.distance(self.inner, other.inner)
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(inner: geo::Point<f64>) -> Self {
        Self { inner }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(-1.5, 2.25);
        assert_eq!(p.x(), -1.5);
        assert_eq!(p.y(), 2.25);
        assert_eq!(p.inner().x(), -1.5);
    }

    #[test]
    fn test_point_conversions() {
        let g = geo::Point::new(4.0, 5.0);
        let p: Point = g.into();
        assert_eq!(p, Point::from((4.0, 5.0)));
        let back: geo::Point<f64> = p.into();
        assert_eq!(back, g);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_finite() {
        assert!(Point::new(0.0, 0.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_serializes_as_plain_coordinates() {
        let p = Point::new(1.0, 2.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
