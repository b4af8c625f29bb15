//! The shard index interface.
//!
//! A shard's single-node index is an external collaborator; this module
//! fixes the handle the query executor needs from it ([`SpatialIndex`]) and
//! provides [`MemorySpatialIndex`], a brute-force in-memory implementation.

pub mod memory;

pub use memory::{MemorySpatialIndex, proximity_score};

use serde::{Deserialize, Serialize};

use crate::document::StoredDocument;
use crate::error::Result;
use crate::spatial::{GeoPoint, Shape, SpatialContext};

/// A hit of a nearest-neighbour search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceHit {
    /// Index-local document id.
    pub doc_id: i32,
    /// Great-circle distance from the query origin in kilometres.
    pub distance_km: f64,
}

/// A hit of a shape search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawHit {
    /// Index-local document id.
    pub doc_id: i32,
    /// Native relevance score, higher is better.
    pub score: f32,
}

/// Read access to one shard's spatial index.
///
/// Implementations must be safe to query from a worker thread; a handle is
/// used by one query at a time and is never mutated by a search.
pub trait SpatialIndex: Send + Sync + std::fmt::Debug {
    /// Check if the index can be queried.
    fn is_open(&self) -> bool;

    /// Get the number of documents in the index.
    fn doc_count(&self) -> usize;

    /// Up to `k` documents nearest to `origin`, by ascending distance.
    /// Equal distances keep index order.
    fn nearest(&self, ctx: &SpatialContext, origin: &GeoPoint, k: usize)
    -> Result<Vec<DistanceHit>>;

    /// Up to `k` documents whose geometry intersects `shape`, by descending
    /// native score. Equal scores keep index order.
    fn search(&self, ctx: &SpatialContext, shape: &Shape, k: usize) -> Result<Vec<RawHit>>;

    /// Materialize the stored document of `doc_id`.
    fn document(&self, doc_id: i32) -> Result<StoredDocument>;
}
