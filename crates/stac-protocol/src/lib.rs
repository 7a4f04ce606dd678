//! STAC/WFS3 search protocol types.
//!
//! This crate provides the inbound query model, GeoJSON geometry union,
//! response envelopes and page-link arithmetic for a geospatial search
//! interface backed by a remote metadata catalog. It is protocol only:
//! the catalog dialect lives in `cmr-client`, the HTTP surface in the
//! `stac-api` service.

pub mod errors;
pub mod geometry;
pub mod links;
pub mod responses;
pub mod search;

// Re-export commonly used types
pub use errors::QueryParseError;
pub use geometry::{Geometry, Position};
pub use links::{app_url, page_links, Link, SHORT_PAGE_THRESHOLD};
pub use responses::{CollectionList, Conformance, FeatureCollection};
pub use search::{parse_page_num, Bbox, SearchQuery};

/// WFS3 conformance class URIs
pub mod conformance {
    /// Core conformance class
    pub const CORE: &str = "http://www.opengis.net/spec/wfs-1/3.0/req/core";
    /// OpenAPI 3.0 conformance class
    pub const OAS30: &str = "http://www.opengis.net/spec/wfs-1/3.0/req/oas30";
    /// HTML conformance class
    pub const HTML: &str = "http://www.opengis.net/spec/wfs-1/3.0/req/html";
    /// GeoJSON conformance class
    pub const GEOJSON: &str = "http://www.opengis.net/spec/wfs-1/3.0/req/geojson";
}
