//! Spatial query descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{GeoShardError, Result};
use crate::spatial::{GeoPoint, SpatialContext};

/// What to run against a shard. Serializable so a driver can ship it to
/// remote workers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpatialQuery {
    /// The `k` documents nearest to `origin`.
    Knn { origin: GeoPoint, k: usize },
    /// Up to `k` documents intersecting the circle of `radius_km` around
    /// `origin`.
    Circle {
        origin: GeoPoint,
        radius_km: f64,
        k: usize,
    },
    /// Up to `k` documents intersecting the shape given as WKT.
    Shape { wkt: String, k: usize },
}

impl SpatialQuery {
    /// Create a k-nearest-neighbours query.
    pub fn knn(origin: GeoPoint, k: usize) -> Self {
        SpatialQuery::Knn { origin, k }
    }

    /// Create a circle query.
    pub fn circle(origin: GeoPoint, radius_km: f64, k: usize) -> Self {
        SpatialQuery::Circle {
            origin,
            radius_km,
            k,
        }
    }

    /// Create a shape query.
    pub fn shape<S: Into<String>>(wkt: S, k: usize) -> Self {
        SpatialQuery::Shape { wkt: wkt.into(), k }
    }

    /// Maximum number of results requested.
    pub fn k(&self) -> usize {
        match self {
            SpatialQuery::Knn { k, .. }
            | SpatialQuery::Circle { k, .. }
            | SpatialQuery::Shape { k, .. } => *k,
        }
    }

    /// Check the query without touching any index: `k` and the radius must
    /// be positive and shape text must parse.
    pub fn validate(&self, ctx: &SpatialContext) -> Result<()> {
        validate_k(self.k())?;
        match self {
            SpatialQuery::Knn { .. } => Ok(()),
            SpatialQuery::Circle { radius_km, .. } => validate_radius_km(*radius_km),
            SpatialQuery::Shape { wkt, .. } => ctx.parse_wkt(wkt).map(|_| ()),
        }
    }

    /// Short description for logs.
    pub fn description(&self) -> String {
        match self {
            SpatialQuery::Knn { origin, k } => {
                format!("Knn(origin: ({} {}), k: {k})", origin.lon, origin.lat)
            }
            SpatialQuery::Circle {
                origin,
                radius_km,
                k,
            } => format!(
                "Circle(origin: ({} {}), radius: {radius_km}km, k: {k})",
                origin.lon, origin.lat
            ),
            SpatialQuery::Shape { wkt, k } => format!("Shape(wkt: {wkt}, k: {k})"),
        }
    }
}

pub(crate) fn validate_k(k: usize) -> Result<()> {
    if k < 1 {
        return Err(GeoShardError::invalid_argument(format!(
            "k must be at least 1, got {k}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_radius_km(radius_km: f64) -> Result<()> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(GeoShardError::invalid_argument(format!(
            "Radius must be a positive number of kilometres, got {radius_km}"
        )));
    }
    Ok(())
}
