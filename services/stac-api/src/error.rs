//! Route-level error handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use cmr_client::CmrError;
use serde::Serialize;
use stac_protocol::QueryParseError;
use thiserror::Error;

/// Errors a request handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The search matched nothing the route treats as required.
    #[error("{0}")]
    NotFound(String),

    /// The inbound query failed to parse.
    #[error(transparent)]
    Query(#[from] QueryParseError),

    /// Translation or catalog access failed.
    #[error(transparent)]
    Catalog(#[from] CmrError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// JSON body carried by error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::NotFound("Collections not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_error_maps_to_400() {
        let err = ApiError::Query(QueryParseError::InvalidBbox("bad".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_catalog_error_maps_to_upstream_status() {
        let err = ApiError::Catalog(CmrError::UnsupportedGeometry(
            "GeometryCollection".to_string(),
        ));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::Catalog(CmrError::UnexpectedResponse("no feed".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_message_passes_through() {
        let err = ApiError::NotFound("Collection [C1] not found".to_string());
        assert_eq!(err.to_string(), "Collection [C1] not found");
    }
}
