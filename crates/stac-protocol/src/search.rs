//! Inbound search query parsing.
//!
//! Search parameters arrive as flat query-string pairs and are parsed into
//! a typed query. Recognized keys are `bbox`, `datetime`, `intersects`,
//! `limit` and `collections`; anything else is dropped rather than
//! forwarded to the catalog.

use serde::{Deserialize, Serialize};

use crate::errors::QueryParseError;
use crate::geometry::Geometry;

/// A geographic bounding box in `west,south,east,north` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bbox {
    /// Create a new bounding box from its four edges.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Parse a bbox parameter string: `west,south,east,north`.
    pub fn parse(s: &str) -> Result<Self, QueryParseError> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(QueryParseError::InvalidBbox(format!(
                "expected 4 values, got {}",
                parts.len()
            )));
        }

        let mut values = [0.0_f64; 4];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part.trim().parse().map_err(|_| {
                QueryParseError::InvalidBbox(format!("not a number: '{}'", part))
            })?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// The four edges in `west,south,east,north` order.
    pub fn values(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

/// A parsed item/collection search query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchQuery {
    /// Spatial bounding box filter.
    pub bbox: Option<Bbox>,

    /// Temporal filter, passed through to the catalog verbatim.
    pub datetime: Option<String>,

    /// Spatial geometry filter.
    pub intersects: Option<Geometry>,

    /// Requested page size.
    pub limit: Option<u32>,

    /// Collection names to search within, each optionally versioned.
    pub collections: Option<Vec<String>>,
}

impl SearchQuery {
    /// Parse a search query from raw query-string pairs.
    ///
    /// Unrecognized keys are ignored. The `intersects` value is a
    /// JSON-encoded GeoJSON geometry.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Result<Self, QueryParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = SearchQuery::default();

        for (key, value) in pairs {
            match key {
                "bbox" => query.bbox = Some(Bbox::parse(value)?),
                "datetime" => query.datetime = Some(value.to_string()),
                "intersects" => {
                    let geometry: Geometry = serde_json::from_str(value).map_err(|e| {
                        QueryParseError::InvalidGeometry(e.to_string())
                    })?;
                    query.intersects = Some(geometry);
                }
                "limit" => {
                    let limit: u32 = value.trim().parse().map_err(|_| {
                        QueryParseError::InvalidNumber {
                            param: "limit".to_string(),
                            value: value.to_string(),
                        }
                    })?;
                    query.limit = Some(limit);
                }
                "collections" => {
                    let names: Vec<String> = value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                    if !names.is_empty() {
                        query.collections = Some(names);
                    }
                }
                _ => {}
            }
        }

        Ok(query)
    }
}

/// Parse the `page_num` parameter, defaulting to page 1.
pub fn parse_page_num(raw: Option<&str>) -> Result<u32, QueryParseError> {
    match raw {
        None => Ok(1),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| QueryParseError::InvalidNumber {
                param: "page_num".to_string(),
                value: value.to_string(),
            }),
    }
}
