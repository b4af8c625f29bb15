//! Geometry primitives used to express spatial queries.
//!
//! This module provides:
//! - [`GeoPoint`] - a validated longitude/latitude pair with great-circle math
//! - [`SpatialContext`] - the explicit geometry context that builds shapes,
//!   parses WKT and converts between kilometres and degrees
//! - [`Shape`] - a query region (circle, rectangle or arbitrary geometry)
//!
//! There is no global context: callers construct a [`SpatialContext`] and
//! hand it by reference to every operation that builds or relates shapes.

pub mod context;
pub mod point;
pub mod shape;

pub use context::SpatialContext;
pub use point::GeoPoint;
pub use shape::{Circle, Shape, distance_to_geometry_degrees, validate_geometry};
