//! Tests for the STAC API response shapes and error mapping.
//!
//! These exercise the serialized forms the HTTP layer hands to clients
//! without requiring a catalog connection.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use cmr_client::CmrError;
use stac_api::error::ApiError;
use stac_protocol::{page_links, CollectionList, FeatureCollection, Link};

// ============================================================================
// Response envelope serialization
// ============================================================================

#[test]
fn test_collection_list_serialization() {
    let response = CollectionList::new(
        "USGS_EROS",
        "1.0.0",
        page_links("http://localhost:3000", "/USGS_EROS/collections", &[], 1, 12),
        vec![serde_json::json!({"id": "C1379757686-USGS_EROS"})],
    );

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"id\":\"USGS_EROS\""));
    assert!(json.contains("\"license\":\"not-provided\""));
    assert!(json.contains("\"rel\":\"self\""));
    assert!(json.contains("\"rel\":\"next\""));
    assert!(json.contains("C1379757686-USGS_EROS"));
}

#[test]
fn test_feature_collection_serialization() {
    let response = FeatureCollection::new(
        "1.0.0",
        vec![serde_json::json!({"id": "G1-PROV"})],
        199,
        vec![Link::new("self", "http://localhost:3000/p/collections/C1/items")],
    );

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"type\":\"FeatureCollection\""));
    assert!(json.contains("\"numberMatched\":199"));
    assert!(json.contains("\"numberReturned\":1"));
}

#[test]
fn test_facets_serialization() {
    use cmr_client::{extract_temporal_facets, FacetNode};

    let tree: FacetNode = serde_json::from_value(serde_json::json!({
        "title": "Browse Granules",
        "children": [{
            "title": "Temporal",
            "children": [{
                "title": "Year",
                "children": [{ "title": "2001" }, { "title": "2002" }]
            }]
        }]
    }))
    .unwrap();

    let facets = extract_temporal_facets(&tree, None, None);
    let json = serde_json::to_string(&facets).unwrap();
    assert_eq!(json, r#"{"years":{"2001":true,"2002":true}}"#);
}

// ============================================================================
// Error mapping
// ============================================================================

#[test]
fn test_not_found_response() {
    let response = ApiError::NotFound("Items not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_unsupported_geometry_response() {
    let err = ApiError::Catalog(CmrError::UnsupportedGeometry(
        "GeometryCollection".to_string(),
    ));
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_upstream_failure_response() {
    let err = ApiError::Catalog(CmrError::UnexpectedResponse("no feed".to_string()));
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
