//! Translation from the search interface's query model into the catalog's
//! flat key/value dialect.
//!
//! The catalog speaks comma-joined coordinate strings keyed by geometry
//! kind (`point`, `line`, `polygon`), combines repeated values for a key
//! with AND unless an `options[<key>][or]` flag is present, and pages with
//! `page_size`/`page_num` numerics.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;
use stac_protocol::geometry::{Geometry, Position};
use stac_protocol::search::SearchQuery;

use crate::error::CmrError;

/// A single outbound parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Number(u64),
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

/// An ordered map of catalog query parameters.
///
/// Ordering is deterministic so translating the same query twice yields
/// identical parameter sets and query strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CmrParams(BTreeMap<String, ParamValue>);

impl CmrParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Move all entries of `other` into this set, replacing duplicates.
    pub fn merge(&mut self, other: CmrParams) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Render the wire-format query pairs.
    ///
    /// List values repeat their key with an `[]` suffix, which is how the
    /// catalog expects multi-valued parameters.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            match value {
                ParamValue::Text(text) => pairs.push((key.clone(), text.clone())),
                ParamValue::Number(number) => pairs.push((key.clone(), number.to_string())),
                ParamValue::List(values) => {
                    for item in values {
                        pairs.push((format!("{}[]", key), item.clone()));
                    }
                }
            }
        }
        pairs
    }
}

/// The scoping key seeded into every translated query.
///
/// Provider-level searches scope by catalog provider; item-level searches
/// scope by the owning collection's concept identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchScope {
    Provider(String),
    Collection(String),
}

impl SearchScope {
    /// Seed a parameter set with this scope.
    pub fn seed(&self) -> CmrParams {
        let mut params = CmrParams::new();
        match self {
            SearchScope::Provider(provider) => params.insert("provider", provider.clone()),
            SearchScope::Collection(concept_id) => {
                params.insert("collection_concept_id", concept_id.clone())
            }
        }
        params
    }
}

/// Flatten a coordinate sequence into one comma-joined numeric string.
///
/// Every coordinate (not pair) becomes a list element, in input order:
/// `[[10, 10], [10, 0]]` renders as `"10,10,10,0"`.
fn flatten_coords(points: &[Position]) -> String {
    points
        .iter()
        .flat_map(|p| [p[0], p[1]])
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// The outer ring of a polygon's ring list.
fn outer_ring(rings: &[Vec<Position>]) -> Result<&[Position], CmrError> {
    rings
        .first()
        .map(|ring| ring.as_slice())
        .ok_or_else(|| CmrError::MalformedGeometry("polygon has no rings".to_string()))
}

/// Encode a GeoJSON geometry into catalog spatial parameters.
///
/// Multi-geometries produce one value per member under the same key and
/// set the catalog's OR-combination flag for that key. Polygon holes are
/// not encoded; the catalog only understands outer rings.
pub fn encode_geometry(geometry: &Geometry) -> Result<CmrParams, CmrError> {
    let mut params = CmrParams::new();

    match geometry {
        Geometry::Point { coordinates } => {
            params.insert("point", flatten_coords(std::slice::from_ref(coordinates)));
        }
        Geometry::LineString { coordinates } => {
            params.insert("line", flatten_coords(coordinates));
        }
        Geometry::Polygon { coordinates } => {
            params.insert("polygon", flatten_coords(outer_ring(coordinates)?));
        }
        Geometry::MultiPoint { coordinates } => {
            let points: Vec<String> = coordinates
                .iter()
                .map(|p| flatten_coords(std::slice::from_ref(p)))
                .collect();
            params.insert("point", points);
            params.insert("options[point][or]", "true");
        }
        Geometry::MultiLineString { coordinates } => {
            let lines: Vec<String> = coordinates.iter().map(|l| flatten_coords(l)).collect();
            params.insert("line", lines);
            params.insert("options[line][or]", "true");
        }
        Geometry::MultiPolygon { coordinates } => {
            let polygons: Vec<String> = coordinates
                .iter()
                .map(|rings| outer_ring(rings).map(flatten_coords))
                .collect::<Result<_, _>>()?;
            params.insert("polygon", polygons);
            params.insert("options[polygon][or]", "true");
        }
        Geometry::GeometryCollection { .. } => {
            return Err(CmrError::UnsupportedGeometry(
                geometry.type_name().to_string(),
            ));
        }
    }

    Ok(params)
}

/// Translate the network-free part of a search query.
///
/// Seeds the scope key, then maps `bbox` to `bounding_box`, `datetime` to
/// `temporal` (verbatim), `intersects` through [`encode_geometry`] and
/// `limit` to `page_size`. Collection-name resolution needs a catalog
/// round trip and lives on the client.
pub fn search_params(scope: &SearchScope, query: &SearchQuery) -> Result<CmrParams, CmrError> {
    let mut params = scope.seed();

    if let Some(bbox) = &query.bbox {
        let joined = bbox
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        params.insert("bounding_box", joined);
    }

    if let Some(datetime) = &query.datetime {
        params.insert("temporal", datetime.clone());
    }

    if let Some(geometry) = &query.intersects {
        params.merge(encode_geometry(geometry)?);
    }

    if let Some(limit) = query.limit {
        params.insert("page_size", u64::from(limit));
    }

    Ok(params)
}
