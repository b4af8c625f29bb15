//! Geographical points and great-circle distance.

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::error::{GeoShardError, Result};

/// A geographical point with latitude and longitude.
///
/// `lon` is the x axis and `lat` the y axis, matching WKT coordinate order
/// (`POINT(lon lat)`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographical point.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoShardError::invalid_argument(format!(
                "Invalid latitude: {lat} (must be between -90 and 90)"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoShardError::invalid_argument(format!(
                "Invalid longitude: {lon} (must be between -180 and 180)"
            )));
        }

        Ok(GeoPoint { lat, lon })
    }

    /// Great-circle distance to another point as a central angle in degrees.
    ///
    /// Uses the haversine formula. Degrees are independent of the Earth
    /// radius, so the same value can be compared against circle radii.
    pub fn distance_degrees(&self, other: &GeoPoint) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        c.to_degrees()
    }

    /// Convert to a `geo` point (x = lon, y = lat).
    pub fn to_geo(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    /// Build from a `geo` point, validating the coordinate range.
    pub fn from_geo(point: Point<f64>) -> Result<Self> {
        GeoPoint::new(point.y(), point.x())
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Coord {
            x: point.lon,
            y: point.lat,
        }
    }
}
