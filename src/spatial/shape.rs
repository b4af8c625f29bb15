//! Query shapes and their well-known-text form.
//!
//! A [`Shape`] is the region of a circle or shape search. Document
//! geometries are plain `geo` geometries; a shape decides whether it
//! intersects one and how far the geometry lies from the shape's centre.
//!
//! # WKT
//!
//! Besides the OGC geometries understood by the `wkt` crate, two extensions
//! are accepted:
//!
//! - `BUFFER(POINT(x y), d)` - a circle of `d` degrees around `(x, y)`
//! - `ENVELOPE(minX, maxX, maxY, minY)` - an axis-aligned rectangle
//!
//! [`Shape::to_wkt`] always produces text that parses back to an identical
//! shape.

use std::str::FromStr;
use std::sync::LazyLock;

use geo::{Centroid, Closest, ClosestPoint, CoordsIter, Geometry, Intersects, Rect};
use regex::Regex;
use wkt::ToWkt;

use crate::error::{GeoShardError, Result};
use crate::spatial::context::SpatialContext;
use crate::spatial::point::GeoPoint;

static BUFFER_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*BUFFER\s*\(\s*POINT\s*\(\s*([^\s(),]+)\s+([^\s(),]+)\s*\)\s*,\s*([^\s(),]+)\s*\)\s*$",
    )
    .expect("static regex")
});

static ENVELOPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*ENVELOPE\s*\(\s*([^\s(),]+)\s*,\s*([^\s(),]+)\s*,\s*([^\s(),]+)\s*,\s*([^\s(),]+)\s*\)\s*$",
    )
    .expect("static regex")
});

/// A circle on the sphere: every point within `radius_degrees` of arc
/// from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: GeoPoint,
    radius_degrees: f64,
}

impl Circle {
    /// Create a new circle. The radius must be finite and positive; radii of
    /// 180 degrees or more cover the whole sphere.
    pub fn new(center: GeoPoint, radius_degrees: f64) -> Result<Self> {
        if !radius_degrees.is_finite() || radius_degrees <= 0.0 {
            return Err(GeoShardError::invalid_argument(format!(
                "Invalid circle radius: {radius_degrees} degrees (must be positive)"
            )));
        }
        Ok(Circle {
            center,
            radius_degrees,
        })
    }

    /// Get the center point.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Get the radius in degrees of arc.
    pub fn radius_degrees(&self) -> f64 {
        self.radius_degrees
    }

    /// Check whether a point lies inside or on the circle.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.center.distance_degrees(point) <= self.radius_degrees
    }
}

/// A query region.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A circle built from a centre and a radius.
    Circle(Circle),
    /// An axis-aligned lon/lat rectangle.
    Rectangle(Rect<f64>),
    /// Any other geometry, taken as-is.
    Geometry(Geometry<f64>),
}

impl Shape {
    /// Wrap an arbitrary geometry, rejecting empty geometries and
    /// out-of-range coordinates.
    pub fn from_geometry(geometry: Geometry<f64>) -> Result<Self> {
        validate_geometry(&geometry)?;
        Ok(Shape::Geometry(geometry))
    }

    /// The point distances are measured from when ranking hits.
    ///
    /// Circle centre, rectangle centre, or the centroid of a geometry.
    pub fn center(&self) -> Option<GeoPoint> {
        match self {
            Shape::Circle(circle) => Some(circle.center()),
            Shape::Rectangle(rect) => Some(point_of(rect.center().into())),
            Shape::Geometry(geometry) => geometry.centroid().map(point_of),
        }
    }

    /// Check whether a document geometry intersects this shape.
    pub fn intersects(&self, geometry: &Geometry<f64>) -> bool {
        match self {
            Shape::Circle(circle) => {
                distance_to_geometry_degrees(&circle.center(), geometry) <= circle.radius_degrees()
            }
            Shape::Rectangle(rect) => Geometry::Rect(*rect).intersects(geometry),
            Shape::Geometry(shape) => shape.intersects(geometry),
        }
    }

    /// Render as WKT that [`SpatialContext::parse_wkt`] reads back unchanged.
    pub fn to_wkt(&self) -> String {
        match self {
            Shape::Circle(circle) => format!(
                "BUFFER(POINT({} {}), {})",
                circle.center.lon, circle.center.lat, circle.radius_degrees
            ),
            Shape::Rectangle(rect) => format!(
                "ENVELOPE({}, {}, {}, {})",
                rect.min().x,
                rect.max().x,
                rect.max().y,
                rect.min().y
            ),
            Shape::Geometry(geometry) => geometry.wkt_string(),
        }
    }
}

/// Check that a geometry has coordinates and that all of them are valid
/// longitudes (x) and latitudes (y).
pub fn validate_geometry(geometry: &Geometry<f64>) -> Result<()> {
    if geometry.coords_count() == 0 {
        return Err(GeoShardError::invalid_argument("Geometry is empty"));
    }
    if let Some(coord) = geometry
        .coords_iter()
        .find(|c| !(-180.0..=180.0).contains(&c.x) || !(-90.0..=90.0).contains(&c.y))
    {
        return Err(GeoShardError::invalid_argument(format!(
            "Coordinate out of range: ({} {})",
            coord.x, coord.y
        )));
    }
    Ok(())
}

/// Distance in degrees of arc from `origin` to the nearest point of
/// `geometry`; zero when the geometry covers the origin.
///
/// Non-point geometries pick their nearest point in the lon/lat plane and
/// measure it on the sphere.
pub fn distance_to_geometry_degrees(origin: &GeoPoint, geometry: &Geometry<f64>) -> f64 {
    if let Geometry::Point(point) = geometry {
        return origin.distance_degrees(&point_of(*point));
    }
    match geometry.closest_point(&origin.to_geo()) {
        Closest::Intersection(_) => 0.0,
        Closest::SinglePoint(point) => origin.distance_degrees(&point_of(point)),
        Closest::Indeterminate => geometry
            .coords_iter()
            .map(|coord| origin.distance_degrees(&point_of(coord.into())))
            .fold(f64::INFINITY, f64::min),
    }
}

fn point_of(point: geo::Point<f64>) -> GeoPoint {
    GeoPoint {
        lat: point.y(),
        lon: point.x(),
    }
}

fn parse_number(text: &str, what: &str, wkt: &str) -> Result<f64> {
    text.parse::<f64>().map_err(|_| {
        GeoShardError::query_parse(format!("Invalid {what} '{text}' in shape '{wkt}'"))
    })
}

/// Parse a shape from WKT. See the module docs for the accepted syntax.
pub(crate) fn parse_wkt(ctx: &SpatialContext, text: &str) -> Result<Shape> {
    if let Some(caps) = BUFFER_POINT.captures(text) {
        let x = parse_number(&caps[1], "x coordinate", text)?;
        let y = parse_number(&caps[2], "y coordinate", text)?;
        let distance = parse_number(&caps[3], "buffer distance", text)?;
        return ctx
            .point(x, y)
            .and_then(|center| ctx.circle(center, distance))
            .map_err(|e| GeoShardError::query_parse(format!("Invalid shape '{text}': {e}")));
    }

    if let Some(caps) = ENVELOPE.captures(text) {
        let min_x = parse_number(&caps[1], "minX", text)?;
        let max_x = parse_number(&caps[2], "maxX", text)?;
        let max_y = parse_number(&caps[3], "maxY", text)?;
        let min_y = parse_number(&caps[4], "minY", text)?;
        return ctx
            .rectangle(min_x, max_x, min_y, max_y)
            .map_err(|e| GeoShardError::query_parse(format!("Invalid shape '{text}': {e}")));
    }

    let parsed = wkt::Wkt::<f64>::from_str(text)
        .map_err(|e| GeoShardError::query_parse(format!("Invalid WKT '{text}': {e:?}")))?;
    let geometry: Geometry<f64> = parsed.try_into().map_err(|e: wkt::conversion::Error| {
        GeoShardError::query_parse(format!("Unsupported WKT '{text}': {e:?}"))
    })?;

    Shape::from_geometry(geometry)
        .map_err(|e| GeoShardError::query_parse(format!("Invalid shape '{text}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Point, point, polygon};

    fn ctx() -> SpatialContext {
        SpatialContext::new()
    }

    #[test]
    fn test_parse_polygon() {
        let shape = ctx()
            .parse_wkt("POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))")
            .unwrap();
        assert!(matches!(shape, Shape::Geometry(Geometry::Polygon(_))));

        let center = shape.center().unwrap();
        assert!((center.lon - 5.0).abs() < 1e-9);
        assert!((center.lat - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_buffer_circle() {
        let shape = ctx().parse_wkt("buffer(POINT(7.45 46.95), 2.5)").unwrap();
        match shape {
            Shape::Circle(circle) => {
                assert_eq!(circle.center().lon, 7.45);
                assert_eq!(circle.center().lat, 46.95);
                assert_eq!(circle.radius_degrees(), 2.5);
            }
            other => panic!("Expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_envelope() {
        let shape = ctx().parse_wkt("ENVELOPE(5, 10, 48, 45)").unwrap();
        match shape {
            Shape::Rectangle(rect) => {
                assert_eq!(rect.min().x, 5.0);
                assert_eq!(rect.max().x, 10.0);
                assert_eq!(rect.min().y, 45.0);
                assert_eq!(rect.max().y, 48.0);
            }
            other => panic!("Expected a rectangle, got {other:?}"),
        }
    }

    #[test]
    fn test_wkt_round_trip_is_exact() {
        let ctx = ctx();
        let center = ctx.point(7.45, 46.95).unwrap();
        let circle = ctx.circle(center, ctx.degrees_from_km(300.0)).unwrap();
        assert_eq!(ctx.parse_wkt(&circle.to_wkt()).unwrap(), circle);

        let rect = ctx.rectangle(-1.5, 2.25, -3.0, 4.125).unwrap();
        assert_eq!(ctx.parse_wkt(&rect.to_wkt()).unwrap(), rect);

        let polygon = ctx.parse_wkt("POLYGON((0 0,1 0,1 1,0 0))").unwrap();
        assert_eq!(ctx.parse_wkt(&polygon.to_wkt()).unwrap(), polygon);
    }

    #[test]
    fn test_malformed_wkt() {
        let ctx = ctx();
        for text in [
            "",
            "POLYGON((0 0, 1 0",
            "CIRCLE(1 2)",
            "BUFFER(POINT(1 2), -3)",
            "BUFFER(POINT(1 2), abc)",
            "BUFFER(POINT(500 2), 1)",
            "ENVELOPE(10, 5, 48, 45)",
            "POINT(0 95)",
            "POLYGON EMPTY",
        ] {
            match ctx.parse_wkt(text) {
                Err(GeoShardError::QueryParse(_)) => {}
                other => panic!("Expected a parse error for '{text}', got {other:?}"),
            }
        }
    }

    #[test]
    fn test_circle_intersects_points() {
        let ctx = ctx();
        let bern = ctx.point(7.45, 46.95).unwrap();
        let circle = ctx.circle(bern, ctx.degrees_from_km(300.0)).unwrap();

        let zurich: Geometry<f64> = point!(x: 8.55, y: 47.37).into();
        let athens: Geometry<f64> = point!(x: 23.72, y: 37.97).into();
        assert!(circle.intersects(&zurich));
        assert!(!circle.intersects(&athens));
    }

    #[test]
    fn test_circle_intersects_polygon_covering_center() {
        let ctx = ctx();
        let circle = ctx.circle(ctx.point(0.5, 0.5).unwrap(), 0.01).unwrap();
        let square: Geometry<f64> =
            polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)]
                .into();
        assert!(circle.intersects(&square));
    }

    #[test]
    fn test_distance_to_geometry() {
        let origin = GeoPoint::new(0.0, 0.0).unwrap();
        let inside: Geometry<f64> =
            polygon![(x: -1.0, y: -1.0), (x: 1.0, y: -1.0), (x: 1.0, y: 1.0), (x: -1.0, y: 1.0)]
                .into();
        assert_eq!(distance_to_geometry_degrees(&origin, &inside), 0.0);

        let east: Geometry<f64> = Point::new(3.0, 0.0).into();
        assert!((distance_to_geometry_degrees(&origin, &east) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rectangle_and_polygon_intersection() {
        let ctx = ctx();
        let rect = ctx.rectangle(5.0, 10.0, 45.0, 48.0).unwrap();
        let bern: Geometry<f64> = point!(x: 7.45, y: 46.95).into();
        let toronto: Geometry<f64> = point!(x: -79.4, y: 43.7).into();
        assert!(rect.intersects(&bern));
        assert!(!rect.intersects(&toronto));

        let polygon = ctx
            .parse_wkt("POLYGON((5 45, 10 45, 10 48, 5 48, 5 45))")
            .unwrap();
        assert!(polygon.intersects(&bern));
        assert!(!polygon.intersects(&toronto));
    }
}
