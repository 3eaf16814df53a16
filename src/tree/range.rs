//! Key ranges covering a path and all of its descendants.

use super::path::{Path, TERMINATOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open lexicographic key range `[lower, upper)`.
///
/// Built from a path `k` as `[k, k + TERMINATOR)`. Every stored key that has
/// `k` as a prefix sorts inside it and nothing else does, because stored
/// keys only use quadrant symbols and those all sort below the terminator.
/// The range issues no I/O; storage backends evaluate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    lower: String,
    upper: String,
}

impl KeyRange {
    /// Range selecting `path` and every path below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath::tree::{KeyRange, Path};
    ///
    /// let range = KeyRange::descendants(&"03".parse::<Path>()?);
    /// assert_eq!(range.lower(), "03");
    /// assert_eq!(range.upper(), "03~");
    /// assert!(range.contains("0312"));
    /// assert!(!range.contains("1000"));
    /// # Ok::<(), quadpath::IndexError>(())
    /// ```
    pub fn descendants(path: &Path) -> Self {
        let lower = path.as_str().to_string();
        let mut upper = String::with_capacity(lower.len() + 1);
        upper.push_str(&lower);
        upper.push(TERMINATOR);
        Self { lower, upper }
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Exclusive upper bound.
    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Byte-wise membership test.
    pub fn contains(&self, key: &str) -> bool {
        self.lower.as_bytes() <= key.as_bytes() && key.as_bytes() < self.upper.as_bytes()
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?})", self.lower, self.upper)
    }
}
