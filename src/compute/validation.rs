//! Input validation for bounds, radii and depths.

use crate::error::{IndexError, Result};
use crate::tree::MAX_DEPTH;
use quadpath_types::Point;

/// Validates that a point has finite coordinates.
///
/// # Examples
///
/// ```
/// use quadpath::compute::validation::validate_point;
/// use quadpath::Point;
///
/// assert!(validate_point(&Point::new(1.0, 2.0)).is_ok());
/// assert!(validate_point(&Point::new(f64::NAN, 2.0)).is_err());
/// ```
pub fn validate_point(point: &Point) -> Result<()> {
    if !point.x().is_finite() {
        return Err(IndexError::InvalidArgument(format!(
            "x must be finite, got: {}",
            point.x()
        )));
    }
    if !point.y().is_finite() {
        return Err(IndexError::InvalidArgument(format!(
            "y must be finite, got: {}",
            point.y()
        )));
    }
    Ok(())
}

/// Validates root bounds: finite corners with `min < max` on both axes.
///
/// # Examples
///
/// ```
/// use quadpath::compute::validation::validate_bounds;
/// use quadpath::Point;
///
/// assert!(validate_bounds(&Point::new(-10.0, -10.0), &Point::new(10.0, 10.0)).is_ok());
/// assert!(validate_bounds(&Point::new(10.0, -10.0), &Point::new(-10.0, 10.0)).is_err());
/// ```
pub fn validate_bounds(min: &Point, max: &Point) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(IndexError::InvalidBounds(format!(
            "corners must be finite, got min ({}, {}) max ({}, {})",
            min.x(),
            min.y(),
            max.x(),
            max.y()
        )));
    }
    if min.x() >= max.x() {
        return Err(IndexError::InvalidBounds(format!(
            "min_x ({}) must be < max_x ({})",
            min.x(),
            max.x()
        )));
    }
    if min.y() >= max.y() {
        return Err(IndexError::InvalidBounds(format!(
            "min_y ({}) must be < max_y ({})",
            min.y(),
            max.y()
        )));
    }
    Ok(())
}

/// Validates a radius for circle searches.
///
/// # Examples
///
/// ```
/// use quadpath::compute::validation::validate_radius;
///
/// assert!(validate_radius(5.0).is_ok());
/// assert!(validate_radius(0.0).is_err());
/// assert!(validate_radius(-1.0).is_err());
/// assert!(validate_radius(f64::INFINITY).is_err());
/// ```
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() {
        return Err(IndexError::InvalidArgument(format!(
            "radius must be finite, got: {}",
            radius
        )));
    }
    if radius <= 0.0 {
        return Err(IndexError::InvalidArgument(format!(
            "radius must be positive, got: {}",
            radius
        )));
    }
    Ok(())
}

/// Validates an encoding depth against [`MAX_DEPTH`].
pub fn validate_depth(depth: u32) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(IndexError::InvalidArgument(format!(
            "depth {} exceeds the maximum of {}",
            depth, MAX_DEPTH
        )));
    }
    Ok(())
}
