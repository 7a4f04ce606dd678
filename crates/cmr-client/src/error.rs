//! Catalog client error types.

use thiserror::Error;

/// Errors that can occur when talking to the catalog.
#[derive(Debug, Error)]
pub enum CmrError {
    /// Geometry tag the catalog's spatial dialect cannot express.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    /// Structurally invalid geometry (e.g. a polygon with no rings).
    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    /// Transport-level failure from the underlying HTTP client.
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a shape the client cannot use.
    #[error("Unexpected catalog response: {0}")]
    UnexpectedResponse(String),
}

impl CmrError {
    /// Get the HTTP status code a caller should report for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            CmrError::UnsupportedGeometry(_) => 400,
            CmrError::MalformedGeometry(_) => 400,
            CmrError::Http(_) => 502,
            CmrError::UnexpectedResponse(_) => 502,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            CmrError::UnsupportedGeometry("GeometryCollection".to_string()).status_code(),
            400
        );
        assert_eq!(
            CmrError::UnexpectedResponse("missing feed".to_string()).status_code(),
            502
        );
    }

    #[test]
    fn test_error_display_carries_tag() {
        let err = CmrError::UnsupportedGeometry("GeometryCollection".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Unsupported geometry type"));
        assert!(display.contains("GeometryCollection"));
    }
}
