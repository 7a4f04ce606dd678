//! Application state for the STAC API.

use anyhow::{Context, Result};

use cmr_client::CmrClient;

/// Shared application state.
///
/// Everything a handler needs is passed in explicitly; there is no
/// process-global configuration.
pub struct AppState {
    /// Client for the backing metadata catalog.
    pub cmr: CmrClient,

    /// Base URL for building links.
    pub base_url: String,

    /// Version string stamped into response envelopes.
    pub stac_version: String,
}

impl AppState {
    /// Create application state from resolved configuration values.
    pub fn new(
        cmr_endpoint: &str,
        base_url: impl Into<String>,
        stac_version: impl Into<String>,
    ) -> Result<Self> {
        let cmr = CmrClient::new(cmr_endpoint).context("Failed to create catalog client")?;

        Ok(Self {
            cmr,
            base_url: base_url.into(),
            stac_version: stac_version.into(),
        })
    }
}
