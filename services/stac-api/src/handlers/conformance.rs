//! Conformance declaration handler.

use axum::Json;

use stac_protocol::Conformance;

/// GET /conformance - WFS3 conformance classes
pub async fn conformance_handler() -> Json<Conformance> {
    Json(Conformance::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_conformance_handler() {
        let response = conformance_handler().await;
        assert_eq!(response.conforms_to.len(), 4);
    }
}
