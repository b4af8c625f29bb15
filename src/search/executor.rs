//! Per-shard spatial query execution.

use log::{debug, warn};

use crate::error::Result;
use crate::index::{SpatialIndex, proximity_score};
use crate::result::ScoredResult;
use crate::search::query::{SpatialQuery, validate_k, validate_radius_km};
use crate::spatial::{GeoPoint, Shape, SpatialContext};

/// Runs spatial queries against one shard's index.
///
/// Each call is a synchronous, read-only scan of the shard that returns at
/// most `k` results, already sorted by descending score. Arguments are
/// checked before the index is touched. A closed shard yields no results.
///
/// Scores:
/// - k-NN: `1 / (1 + distance_km)` from the origin, so closer is higher.
/// - circle and shape search: the index's native relevance score.
#[derive(Debug, Clone, Copy)]
pub struct ShardQueryExecutor<'a> {
    shard_index: i32,
    index: &'a dyn SpatialIndex,
    context: &'a SpatialContext,
}

impl<'a> ShardQueryExecutor<'a> {
    /// Create an executor for shard `shard_index`.
    pub fn new(shard_index: i32, index: &'a dyn SpatialIndex, context: &'a SpatialContext) -> Self {
        Self {
            shard_index,
            index,
            context,
        }
    }

    /// Get the shard id stamped on every result.
    pub fn shard_index(&self) -> i32 {
        self.shard_index
    }

    /// The `k` documents nearest to `origin`, closest first.
    ///
    /// Returns every document when the shard holds fewer than `k`.
    pub fn knn(&self, origin: &GeoPoint, k: usize) -> Result<Vec<ScoredResult>> {
        validate_k(k)?;
        if !self.is_searchable() {
            return Ok(Vec::new());
        }

        let hits = self.index.nearest(self.context, origin, k)?;
        debug!(
            "shard {}: knn from ({} {}) matched {} of k={k}",
            self.shard_index,
            origin.lon,
            origin.lat,
            hits.len()
        );

        hits.into_iter()
            .take(k)
            .map(|hit| self.wrap(proximity_score(hit.distance_km), hit.doc_id))
            .collect()
    }

    /// Up to `k` documents intersecting the circle of `radius_km` around
    /// `origin`, by descending relevance.
    pub fn circle_search(
        &self,
        origin: &GeoPoint,
        radius_km: f64,
        k: usize,
    ) -> Result<Vec<ScoredResult>> {
        validate_k(k)?;
        validate_radius_km(radius_km)?;

        let circle = self
            .context
            .circle(*origin, self.context.degrees_from_km(radius_km))?;
        self.search_shape(&circle, k)
    }

    /// Up to `k` documents intersecting the shape given as WKT, by
    /// descending relevance.
    pub fn shape_search(&self, shape_wkt: &str, k: usize) -> Result<Vec<ScoredResult>> {
        validate_k(k)?;
        let shape = self.context.parse_wkt(shape_wkt)?;
        self.search_shape(&shape, k)
    }

    /// Up to `k` documents intersecting an already-built shape.
    pub fn search_shape(&self, shape: &Shape, k: usize) -> Result<Vec<ScoredResult>> {
        validate_k(k)?;
        if !self.is_searchable() {
            return Ok(Vec::new());
        }

        let hits = self.index.search(self.context, shape, k)?;
        debug!(
            "shard {}: shape search matched {} of k={k}",
            self.shard_index,
            hits.len()
        );

        hits.into_iter()
            .take(k)
            .map(|hit| self.wrap(hit.score, hit.doc_id))
            .collect()
    }

    /// Dispatch a query descriptor.
    pub fn execute(&self, query: &SpatialQuery) -> Result<Vec<ScoredResult>> {
        match query {
            SpatialQuery::Knn { origin, k } => self.knn(origin, *k),
            SpatialQuery::Circle {
                origin,
                radius_km,
                k,
            } => self.circle_search(origin, *radius_km, *k),
            SpatialQuery::Shape { wkt, k } => self.shape_search(wkt, *k),
        }
    }

    fn is_searchable(&self) -> bool {
        if !self.index.is_open() {
            warn!("shard {}: index is closed, returning no results", self.shard_index);
            return false;
        }
        self.index.doc_count() > 0
    }

    fn wrap(&self, score: f32, doc_id: i32) -> Result<ScoredResult> {
        let document = self.index.document(doc_id)?;
        ScoredResult::new(score, doc_id, self.shard_index, &document)
    }
}
