//! Error types for the quadpath index.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors raised by encoding, searching and storage access.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The point lies outside the root region, so no path exists for it.
    #[error("point ({x}, {y}) lies outside the index bounds")]
    PointOutOfBounds { x: f64, y: f64 },

    /// A caller-supplied argument was rejected (radius, depth, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Root bounds are not finite or not strictly ordered.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A path string contained symbols outside the quadrant alphabet.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failure reported by a storage backend, passed through untouched.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IndexError {
    /// Wrap any backend error.
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Storage(err.into())
    }

    pub(crate) fn out_of_bounds(point: &quadpath_types::Point) -> Self {
        Self::PointOutOfBounds {
            x: point.x(),
            y: point.y(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IndexError::PointOutOfBounds { x: 1.5, y: -2.0 };
        assert_eq!(
            err.to_string(),
            "point (1.5, -2) lies outside the index bounds"
        );

        let err = IndexError::InvalidArgument("radius must be positive".into());
        assert_eq!(err.to_string(), "invalid argument: radius must be positive");
    }

    #[test]
    fn test_storage_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer went away");
        let err = IndexError::storage(io);
        assert!(err.to_string().contains("peer went away"));

        let source = std::error::Error::source(&err).unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionReset);
    }
}
