//! The geometry context used to build, parse and measure shapes.

use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::error::{GeoShardError, Result};
use crate::spatial::point::GeoPoint;
use crate::spatial::shape::{self, Circle, Shape};

/// Mean Earth radius in kilometres.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0087714;

/// Geometry context for a geographic (lon/lat, degrees) coordinate space.
///
/// Owned by the query layer and passed by reference to every call that
/// builds or relates shapes. Two shards only produce comparable distances
/// and scores when they are queried with equal contexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialContext {
    /// Radius of the sphere used to convert between kilometres and degrees.
    pub earth_radius_km: f64,
}

impl Default for SpatialContext {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_MEAN_RADIUS_KM,
        }
    }
}

impl SpatialContext {
    /// Create a context over the mean Earth sphere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different sphere radius.
    pub fn with_earth_radius_km(mut self, earth_radius_km: f64) -> Self {
        self.earth_radius_km = earth_radius_km;
        self
    }

    /// Build a point from `x` (longitude) and `y` (latitude).
    pub fn point(&self, x: f64, y: f64) -> Result<GeoPoint> {
        GeoPoint::new(y, x)
    }

    /// Build a circle around `center` with a radius in degrees.
    pub fn circle(&self, center: GeoPoint, radius_degrees: f64) -> Result<Shape> {
        Ok(Shape::Circle(Circle::new(center, radius_degrees)?))
    }

    /// Build a rectangle from its longitude and latitude bounds.
    ///
    /// Rectangles crossing the antimeridian (`min_x > max_x`) are not
    /// supported; split them into two searches.
    pub fn rectangle(&self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Shape> {
        let lower_left = self.point(min_x, min_y)?;
        let upper_right = self.point(max_x, max_y)?;
        if min_y > max_y {
            return Err(GeoShardError::invalid_argument(format!(
                "Rectangle latitude bounds are inverted: y [{min_y}, {max_y}]"
            )));
        }
        if min_x > max_x {
            return Err(GeoShardError::invalid_argument(format!(
                "Rectangles crossing the antimeridian are not supported: x [{min_x}, {max_x}]"
            )));
        }
        Ok(Shape::Rectangle(Rect::new(
            Coord::from(lower_left),
            Coord::from(upper_right),
        )))
    }

    /// Parse a shape from well-known text.
    ///
    /// Accepts any OGC geometry plus the `BUFFER(POINT(x y), d)` circle and
    /// `ENVELOPE(minX, maxX, maxY, minY)` rectangle extensions.
    pub fn parse_wkt(&self, text: &str) -> Result<Shape> {
        shape::parse_wkt(self, text)
    }

    /// Convert a surface distance in kilometres to a central angle in degrees.
    pub fn degrees_from_km(&self, km: f64) -> f64 {
        (km / self.earth_radius_km).to_degrees()
    }

    /// Convert a central angle in degrees to a surface distance in kilometres.
    pub fn km_from_degrees(&self, degrees: f64) -> f64 {
        degrees.to_radians() * self.earth_radius_km
    }

    /// Great-circle distance between two points in kilometres.
    pub fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        self.km_from_degrees(a.distance_degrees(b))
    }
}
