//! # quadpath-types
//!
//! Plain value types shared by the quadpath index:
//!
//! - **Point**: an immutable 2D coordinate pair wrapping `geo::Point`
//! - **Region**: an axis-aligned, half-open rectangle tagged with its
//!   subdivision depth
//!
//! Both types are serializable with Serde. They carry geometry only; the
//! subdivision rules and path encoding live in the `quadpath` crate.
//!
//! ## Examples
//!
//! ```rust
//! use quadpath_types::point::Point;
//! use quadpath_types::region::Region;
//!
//! let root = Region::new(Point::new(0.0, 0.0), Point::new(128.0, 128.0), 0);
//! assert!(root.contains(&Point::new(0.0, 0.0)));
//! assert!(!root.contains(&Point::new(128.0, 64.0)));
//! assert_eq!(root.mid(), Point::new(64.0, 64.0));
//! ```

pub mod point;
pub mod region;

pub use point::Point;
pub use region::Region;
