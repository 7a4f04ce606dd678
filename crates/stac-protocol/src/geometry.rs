//! GeoJSON geometry types accepted by the search interface.
//!
//! Geometries arrive in the `intersects` search parameter and follow the
//! standard GeoJSON nesting depth for each variant. Coordinate order is
//! always `[longitude, latitude]` and is never reordered.

use serde::{Deserialize, Serialize};

/// A single `[longitude, latitude]` coordinate pair.
pub type Position = [f64; 2];

/// GeoJSON geometry, tagged by its `type` member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A single position.
    Point {
        coordinates: Position,
    },

    /// A sequence of positions forming a line.
    LineString {
        coordinates: Vec<Position>,
    },

    /// A list of linear rings (first is exterior, rest are holes).
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },

    /// Multiple independent points.
    MultiPoint {
        coordinates: Vec<Position>,
    },

    /// Multiple independent lines.
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },

    /// Multiple independent polygons.
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },

    /// A heterogeneous collection of geometries.
    ///
    /// Accepted at the parse boundary so the encoder can reject it with a
    /// typed error instead of a deserialization failure.
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    /// The GeoJSON type tag of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }
}
