//! Collection search handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde_json::Value;
use tracing::info;

use cmr_client::SearchScope;
use stac_protocol::{page_links, parse_page_num, CollectionList, SearchQuery};

use crate::error::ApiError;
use crate::handlers::query_pairs;
use crate::state::AppState;

/// GET /:provider/collections - Search a provider's collections
pub async fn list_collections_handler(
    Path(provider): Path<String>,
    Query(raw): Query<BTreeMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<CollectionList>, ApiError> {
    info!(provider = %provider, "GET collections");

    let query =
        SearchQuery::from_query_pairs(raw.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
    let current_page = parse_page_num(raw.get("page_num").map(String::as_str))?;

    let scope = SearchScope::Provider(provider.clone());
    let params = state.cmr.convert_params(&scope, &query).await?;
    let collections = state.cmr.find_collections(&params).await?;

    if collections.is_empty() {
        return Err(ApiError::NotFound("Collections not found".to_string()));
    }

    let links = page_links(
        &state.base_url,
        &format!("/{}/collections", provider),
        &query_pairs(&raw),
        current_page,
        collections.len(),
    );

    Ok(Json(CollectionList::new(
        provider,
        state.stac_version.clone(),
        links,
        collections,
    )))
}

/// GET /:provider/collections/:collection_id - Single collection lookup
pub async fn get_collection_handler(
    Path((provider, collection_id)): Path<(String, String)>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    info!(provider = %provider, collection = %collection_id, "GET collection");

    let collection = state
        .cmr
        .get_collection(&collection_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Collection [{}] not found", collection_id))
        })?;

    Ok(Json(collection))
}
