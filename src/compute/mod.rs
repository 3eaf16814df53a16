//! Compute layer for query processing.
//!
//! Input validation and the search-side arithmetic that sits between the
//! tree and a storage backend: choosing a query depth for a radius and
//! filtering candidates by exact distance. Nothing here touches storage.

pub mod search;
pub mod validation;
