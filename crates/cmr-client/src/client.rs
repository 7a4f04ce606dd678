//! Catalog search client.
//!
//! All catalog access funnels through the [`CmrFetch`] trait so the HTTP
//! transport can be swapped for a mock in tests. The real transport is a
//! reqwest client that tags every request with the proxy's `Client-Id`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use stac_protocol::search::SearchQuery;
use tracing::{debug, instrument};

use crate::error::CmrError;
use crate::params::{CmrParams, SearchScope};

/// Client identification header value sent with every catalog request.
pub const CLIENT_ID: &str = "cmr-stac-proxy";

/// Default catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cmr.earthdata.nasa.gov/search";

/// Collection search resource.
const COLLECTION_RESOURCE: &str = "collections.json";

/// Granule page-data resource.
pub(crate) const GRANULE_RESOURCE: &str = "granules.json";

/// Granule count-only resource; the authoritative match total rides on its
/// `CMR-Hits` response header rather than in the body.
const GRANULE_COUNT_RESOURCE: &str = "granules.umm_json";

/// A catalog response: parsed JSON body plus the header-carried hit count
/// when the catalog supplied one.
#[derive(Debug, Clone)]
pub struct CmrResponse {
    pub body: Value,
    pub hits: Option<u64>,
}

/// Trait for issuing GET requests against the catalog.
#[async_trait]
pub trait CmrFetch: Send + Sync {
    /// Issue a GET and return the parsed body plus selected headers.
    async fn get(&self, url: &str, params: &CmrParams) -> Result<CmrResponse, CmrError>;
}

/// reqwest-backed [`CmrFetch`] implementation.
pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    /// Create the HTTP transport with the client settings used for all
    /// catalog traffic.
    pub fn new() -> Result<Self, CmrError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CmrFetch for HttpFetch {
    #[instrument(skip(self, params), fields(url = %url))]
    async fn get(&self, url: &str, params: &CmrParams) -> Result<CmrResponse, CmrError> {
        let response = self
            .client
            .get(url)
            .header("Client-Id", CLIENT_ID)
            .query(&params.to_query_pairs())
            .send()
            .await?
            .error_for_status()?;

        let hits = response
            .headers()
            .get("cmr-hits")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());

        let body = response.json().await?;
        Ok(CmrResponse { body, hits })
    }
}

/// One page of granule results together with the catalog's authoritative
/// total match count. `hits` is independent of `granules.len()`, which
/// only reflects the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct GranulePage {
    pub granules: Vec<Value>,
    pub hits: u64,
}

/// Client for the catalog's native search dialect.
pub struct CmrClient {
    endpoint: String,
    fetch: Arc<dyn CmrFetch>,
}

impl CmrClient {
    /// Create a client against the given catalog endpoint using the real
    /// HTTP transport.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CmrError> {
        Ok(Self::with_fetch(endpoint, Arc::new(HttpFetch::new()?)))
    }

    /// Create a client with a custom transport.
    pub fn with_fetch(endpoint: impl Into<String>, fetch: Arc<dyn CmrFetch>) -> Self {
        Self {
            endpoint: endpoint.into(),
            fetch,
        }
    }

    /// Issue one search against a catalog resource.
    pub(crate) async fn search(
        &self,
        resource: &str,
        params: &CmrParams,
    ) -> Result<CmrResponse, CmrError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), resource);
        debug!(resource, "searching catalog");
        self.fetch.get(&url, params).await
    }

    /// Pull the entry list out of a catalog feed body.
    fn feed_entries(body: &Value) -> Result<Vec<Value>, CmrError> {
        body.get("feed")
            .and_then(|feed| feed.get("entry"))
            .and_then(|entry| entry.as_array())
            .cloned()
            .ok_or_else(|| {
                CmrError::UnexpectedResponse("response body has no feed entries".to_string())
            })
    }

    /// Search for collections, returning the raw catalog entries.
    pub async fn find_collections(&self, params: &CmrParams) -> Result<Vec<Value>, CmrError> {
        let response = self.search(COLLECTION_RESOURCE, params).await?;
        Self::feed_entries(&response.body)
    }

    /// Look up a single collection by concept identifier.
    pub async fn get_collection(&self, concept_id: &str) -> Result<Option<Value>, CmrError> {
        let mut params = CmrParams::new();
        params.insert("concept_id", concept_id);

        let entries = self.find_collections(&params).await?;
        Ok(entries.into_iter().next())
    }

    /// Resolve human-readable collection names to concept identifiers.
    ///
    /// Each name is looked up by short name, with a trailing `.v<version>`
    /// suffix split off into a version filter. Names with no match are
    /// dropped; absence is not a failure. Lookup failures propagate.
    pub async fn resolve_collections(&self, names: &[String]) -> Result<Vec<String>, CmrError> {
        let mut concept_ids = Vec::new();

        for name in names {
            let (short_name, version) = split_versioned_name(name);

            let mut params = CmrParams::new();
            params.insert("short_name", short_name);
            if let Some(version) = version {
                params.insert("version", version);
            }

            let entries = self.find_collections(&params).await?;
            match entries
                .first()
                .and_then(|entry| entry.get("id"))
                .and_then(|id| id.as_str())
            {
                Some(id) => concept_ids.push(id.to_string()),
                None => debug!(name = %name, "collection name did not resolve"),
            }
        }

        Ok(concept_ids)
    }

    /// Search for granules, aggregating the page body and the
    /// authoritative hit count.
    ///
    /// Two independent requests are dispatched concurrently: the page-data
    /// resource supplies the entries, the count-only resource supplies the
    /// total via its `CMR-Hits` header. Neither depends on the other, so
    /// the join waits for both and fails if either fails; no partial
    /// result is synthesized. An empty page is a valid result, not an
    /// error.
    pub async fn find_granules(&self, params: &CmrParams) -> Result<GranulePage, CmrError> {
        let (page, count) = tokio::try_join!(
            self.search(GRANULE_RESOURCE, params),
            self.search(GRANULE_COUNT_RESOURCE, params),
        )?;

        let granules = Self::feed_entries(&page.body)?;
        let hits = count.hits.ok_or_else(|| {
            CmrError::UnexpectedResponse("count response carried no CMR-Hits header".to_string())
        })?;

        Ok(GranulePage { granules, hits })
    }

    /// Look up a single granule within a collection.
    pub async fn get_granule(
        &self,
        collection_concept_id: &str,
        concept_id: &str,
    ) -> Result<Option<Value>, CmrError> {
        let mut params = CmrParams::new();
        params.insert("collection_concept_id", collection_concept_id);
        params.insert("concept_id", concept_id);

        let page = self.find_granules(&params).await?;
        Ok(page.granules.into_iter().next())
    }

    /// Translate an inbound search query into catalog parameters.
    ///
    /// Pure field mapping happens in [`crate::params::search_params`];
    /// this adds the collection-name resolution, which needs a catalog
    /// round trip. If every name fails to resolve the concept-id key is
    /// omitted entirely.
    pub async fn convert_params(
        &self,
        scope: &SearchScope,
        query: &SearchQuery,
    ) -> Result<CmrParams, CmrError> {
        let mut params = crate::params::search_params(scope, query)?;

        if let Some(names) = &query.collections {
            let concept_ids = self.resolve_collections(names).await?;
            if !concept_ids.is_empty() {
                params.insert("collection_concept_id", concept_ids);
            }
        }

        Ok(params)
    }
}

/// Split an optionally versioned collection name.
///
/// `"landsat.v6"` splits into `("landsat", Some("6"))`; a name without the
/// suffix searches by short name alone.
fn split_versioned_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once(".v") {
        Some((short_name, version)) if !short_name.is_empty() && !version.is_empty() => {
            (short_name, Some(version))
        }
        _ => (name, None),
    }
}
