//! Temporal availability facet handler.

use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use cmr_client::{SearchScope, TemporalFacets};

use crate::error::ApiError;
use crate::state::AppState;

/// Facet request parameters. `month` needs `year`, `day` needs both;
/// less-specific requests simply descend less far into the facet tree.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

/// GET /:provider/collections/:collection_id/availability - Year/month/day
/// availability facets for a collection's granules
pub async fn availability_handler(
    Path((provider, collection_id)): Path<(String, String)>,
    Query(request): Query<AvailabilityParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<TemporalFacets>, ApiError> {
    info!(provider = %provider, collection = %collection_id, "GET availability");

    let mut params = SearchScope::Collection(collection_id).seed();
    params.insert("provider", provider);

    let facets = state
        .cmr
        .granule_temporal_facets(
            &params,
            request.year.as_deref(),
            request.month.as_deref(),
            request.day.as_deref(),
        )
        .await?;

    Ok(Json(facets))
}
