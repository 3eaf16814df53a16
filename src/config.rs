//! Configuration for a quadpath index
//!
//! The root bounds and the storage depth are fixed for the lifetime of an
//! index: every stored path is encoded against them, so changing either
//! invalidates all persisted keys.
use crate::compute::validation::validate_bounds;
use crate::tree::MAX_DEPTH;
use quadpath_types::Point;
use serde::de::Error;

/// Index configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Depth at which points are encoded when stored
    #[serde(default = "IndexConfig::default_storage_depth")]
    pub storage_depth: u32,

    /// Inclusive lower corner of the root region
    pub min: Point,

    /// Exclusive upper corner of the root region
    pub max: Point,
}

impl IndexConfig {
    const fn default_storage_depth() -> u32 {
        10
    }

    /// Configuration for the root rectangle `[min, max)` with the default
    /// storage depth.
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min,
            max,
            storage_depth: Self::default_storage_depth(),
        }
    }

    pub fn with_storage_depth(mut self, depth: u32) -> Self {
        if depth > 24 {
            log::warn!(
                "Storage depth of {} is very large. Each stored key costs one byte \
                per level and queries never use levels past the circle search depth.",
                depth
            );
        }
        self.storage_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_bounds(&self.min, &self.max).map_err(|e| e.to_string())?;

        if self.storage_depth == 0 {
            return Err("Storage depth must be greater than zero".to_string());
        }

        if self.storage_depth > MAX_DEPTH {
            return Err(format!(
                "Storage depth {} exceeds the maximum of {}",
                self.storage_depth, MAX_DEPTH
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: IndexConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: IndexConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
