//! Granule (item) search handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde_json::Value;
use tracing::info;

use cmr_client::SearchScope;
use stac_protocol::{page_links, parse_page_num, FeatureCollection, SearchQuery};

use crate::error::ApiError;
use crate::handlers::query_pairs;
use crate::state::AppState;

/// GET /:provider/collections/:collection_id/items - Granule search
///
/// The page body and the authoritative total come from two concurrent
/// catalog requests; `numberMatched` reflects the total even when this
/// page is partial.
pub async fn list_items_handler(
    Path((provider, collection_id)): Path<(String, String)>,
    Query(raw): Query<BTreeMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<FeatureCollection>, ApiError> {
    info!(provider = %provider, collection = %collection_id, "GET items");

    let query =
        SearchQuery::from_query_pairs(raw.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
    let current_page = parse_page_num(raw.get("page_num").map(String::as_str))?;

    let scope = SearchScope::Collection(collection_id.clone());
    let params = state.cmr.convert_params(&scope, &query).await?;
    let page = state.cmr.find_granules(&params).await?;

    if page.granules.is_empty() {
        return Err(ApiError::NotFound("Items not found".to_string()));
    }

    let links = page_links(
        &state.base_url,
        &format!("/{}/collections/{}/items", provider, collection_id),
        &query_pairs(&raw),
        current_page,
        page.granules.len(),
    );

    Ok(Json(FeatureCollection::new(
        state.stac_version.clone(),
        page.granules,
        page.hits,
        links,
    )))
}

/// GET /:provider/collections/:collection_id/items/:item_id - Single granule
pub async fn get_item_handler(
    Path((provider, collection_id, item_id)): Path<(String, String, String)>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    info!(provider = %provider, collection = %collection_id, item = %item_id, "GET item");

    let granule = state
        .cmr
        .get_granule(&collection_id, &item_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Item [{}] not found", item_id)))?;

    Ok(Json(granule))
}
