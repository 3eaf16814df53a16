//! Quadrant symbols and the path keys built from them.
//!
//! A path is the sequence of quadrant choices taken from the root down to a
//! region, one ASCII symbol per level. Symbols are ordered the same way as
//! quadrant indices, so plain byte-wise ordering of paths follows the
//! subdivision order and a path is a string prefix of every path below it.

use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Path symbols indexed by quadrant number.
pub const QUADRANT_SYMBOLS: [u8; 4] = *b"0123";

/// Upper-bound symbol for key ranges. Sorts above every quadrant symbol and
/// is never part of a stored path.
pub const TERMINATOR: char = '~';

/// One of the four children of a region.
///
/// Bit 0 of the index selects the upper half on X, bit 1 the upper half
/// on Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Quadrant {
    SouthWest = 0,
    SouthEast = 1,
    NorthWest = 2,
    NorthEast = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::SouthWest,
        Quadrant::SouthEast,
        Quadrant::NorthWest,
        Quadrant::NorthEast,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this quadrant covers the upper half of the x axis.
    #[inline]
    pub fn is_upper_x(self) -> bool {
        self.index() & 0b01 != 0
    }

    /// Whether this quadrant covers the upper half of the y axis.
    #[inline]
    pub fn is_upper_y(self) -> bool {
        self.index() & 0b10 != 0
    }

    #[inline]
    pub fn symbol(self) -> char {
        QUADRANT_SYMBOLS[self.index()] as char
    }

    pub fn from_symbol(symbol: u8) -> Option<Self> {
        QUADRANT_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .and_then(Self::from_index)
    }
}

/// Root-to-region path key.
///
/// Invariant: every byte is one of [`QUADRANT_SYMBOLS`], and the length
/// equals the depth of the region it names.
///
/// # Examples
///
/// ```
/// use quadpath::tree::{Path, Quadrant};
///
/// let path: Path = "03".parse()?;
/// assert_eq!(path.depth(), 2);
/// assert_eq!(path.child(Quadrant::NorthEast).as_str(), "033");
/// assert!(path.is_prefix_of(&"0312".parse()?));
/// # Ok::<(), quadpath::IndexError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path(String);

impl Path {
    /// The empty path naming the root region.
    pub fn root() -> Self {
        Self(String::new())
    }

    pub(crate) fn with_capacity(depth: u32) -> Self {
        Self(String::with_capacity(depth as usize))
    }

    pub(crate) fn push(&mut self, quadrant: Quadrant) {
        self.0.push(quadrant.symbol());
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> u32 {
        self.0.len() as u32
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Whether `other` names this region or one of its descendants.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Path of the enclosing region, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        if self.is_root() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_string()))
    }

    /// Path of the given child region.
    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Path {
        let mut child = Self(String::with_capacity(self.0.len() + 1));
        child.0.push_str(&self.0);
        child.push(quadrant);
        child
    }

    /// Prefix of this path cut at `depth` levels.
    #[must_use]
    pub fn truncate(&self, depth: u32) -> Path {
        let end = (depth as usize).min(self.0.len());
        Self(self.0[..end].to_string())
    }

    /// Quadrant choices from the root downwards.
    pub fn quadrants(&self) -> impl Iterator<Item = Quadrant> + '_ {
        // Only valid symbols are ever stored.
        self.0.bytes().filter_map(Quadrant::from_symbol)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Path {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some((pos, byte)) = s
            .bytes()
            .enumerate()
            .find(|(_, b)| Quadrant::from_symbol(*b).is_none())
        {
            return Err(IndexError::InvalidPath(format!(
                "unexpected symbol {:?} at position {} in {:?}",
                byte as char, pos, s
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Path {
    type Error = IndexError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
