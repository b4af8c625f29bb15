//! In-memory spatial index.

use std::cmp::Ordering;

use geo::Geometry;

use crate::document::StoredDocument;
use crate::error::{GeoShardError, Result};
use crate::index::{DistanceHit, RawHit, SpatialIndex};
use crate::spatial::{
    GeoPoint, Shape, SpatialContext, distance_to_geometry_degrees, validate_geometry,
};

/// Map a distance to a score that grows as the distance shrinks:
/// `1 / (1 + distance_km)`, 1.0 at the origin and towards 0 far away.
pub fn proximity_score(distance_km: f64) -> f32 {
    (1.0 / (1.0 + distance_km)) as f32
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    geometry: Geometry<f64>,
    document: StoredDocument,
}

/// A spatial index held entirely in memory.
///
/// Documents get consecutive ids starting at 0 in insertion order, and every
/// query scans all of them. Suitable for tests and small shards.
#[derive(Debug, Clone)]
pub struct MemorySpatialIndex {
    name: String,
    entries: Vec<IndexedEntry>,
    closed: bool,
}

impl MemorySpatialIndex {
    /// Create a new empty index.
    pub fn new<S: Into<String>>(name: S) -> Self {
        MemorySpatialIndex {
            name: name.into(),
            entries: Vec::new(),
            closed: false,
        }
    }

    /// Get the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index a geometry with its stored document, returning the new
    /// document id.
    pub fn add_document<G: Into<Geometry<f64>>>(
        &mut self,
        geometry: G,
        document: StoredDocument,
    ) -> Result<i32> {
        self.ensure_open()?;
        let geometry = geometry.into();
        validate_geometry(&geometry)?;

        let doc_id = i32::try_from(self.entries.len()).map_err(|_| {
            GeoShardError::other(format!("Index '{}' cannot hold more documents", self.name))
        })?;
        self.entries.push(IndexedEntry { geometry, document });
        Ok(doc_id)
    }

    /// Index a point with its stored document.
    pub fn add_point(&mut self, point: GeoPoint, document: StoredDocument) -> Result<i32> {
        self.add_document(point.to_geo(), document)
    }

    /// Close the index. Further reads and writes fail with
    /// [`GeoShardError::IndexUnavailable`].
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(GeoShardError::index_unavailable(format!(
                "Index '{}' is closed",
                self.name
            )));
        }
        Ok(())
    }

    fn doc_ids(&self) -> impl Iterator<Item = (i32, &IndexedEntry)> {
        // ids fit in i32, add_document enforces it
        self.entries
            .iter()
            .enumerate()
            .map(|(doc_id, entry)| (doc_id as i32, entry))
    }
}

impl SpatialIndex for MemorySpatialIndex {
    fn is_open(&self) -> bool {
        !self.closed
    }

    fn doc_count(&self) -> usize {
        self.entries.len()
    }

    fn nearest(
        &self,
        ctx: &SpatialContext,
        origin: &GeoPoint,
        k: usize,
    ) -> Result<Vec<DistanceHit>> {
        self.ensure_open()?;

        let mut hits: Vec<DistanceHit> = self
            .doc_ids()
            .map(|(doc_id, entry)| DistanceHit {
                doc_id,
                distance_km: ctx.km_from_degrees(distance_to_geometry_degrees(
                    origin,
                    &entry.geometry,
                )),
            })
            .collect();

        // Stable: equal distances stay in id order
        hits.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });
        hits.truncate(k);

        Ok(hits)
    }

    fn search(&self, ctx: &SpatialContext, shape: &Shape, k: usize) -> Result<Vec<RawHit>> {
        self.ensure_open()?;

        let center = shape
            .center()
            .ok_or_else(|| GeoShardError::query_parse("Shape has no center"))?;

        let mut hits: Vec<RawHit> = self
            .doc_ids()
            .filter(|(_, entry)| shape.intersects(&entry.geometry))
            .map(|(doc_id, entry)| RawHit {
                doc_id,
                score: proximity_score(ctx.km_from_degrees(distance_to_geometry_degrees(
                    &center,
                    &entry.geometry,
                ))),
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(k);

        Ok(hits)
    }

    fn document(&self, doc_id: i32) -> Result<StoredDocument> {
        self.ensure_open()?;

        usize::try_from(doc_id)
            .ok()
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.document.clone())
            .ok_or_else(|| {
                GeoShardError::index_unavailable(format!(
                    "Document {doc_id} not found in index '{}'",
                    self.name
                ))
            })
    }
}
