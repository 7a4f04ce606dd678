//! Search query parse errors.

use thiserror::Error;

/// Errors that can occur when parsing inbound search parameters.
#[derive(Debug, Error, PartialEq)]
pub enum QueryParseError {
    /// Malformed bounding box parameter.
    #[error("Invalid bbox: {0}")]
    InvalidBbox(String),

    /// Malformed `intersects` geometry.
    #[error("Invalid intersects geometry: {0}")]
    InvalidGeometry(String),

    /// A parameter that must be numeric was not.
    #[error("Invalid numeric value for '{param}': {value}")]
    InvalidNumber { param: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryParseError::InvalidBbox("expected 4 values, got 3".to_string());
        assert!(format!("{}", err).contains("Invalid bbox"));

        let err = QueryParseError::InvalidNumber {
            param: "limit".to_string(),
            value: "ten".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("limit"));
        assert!(display.contains("ten"));
    }
}
