//! Client for the CMR metadata catalog's native search dialect.
//!
//! The catalog speaks a flat key/value query language with its own
//! spatial-encoding conventions, numeric paging and a header-carried
//! result count. This crate owns the translation from the search
//! interface's query model into that dialect, the concurrent
//! page-plus-count aggregation, and the flattening of the catalog's
//! temporal facet tree.
//!
//! # Example
//!
//! ```no_run
//! use cmr_client::{CmrClient, SearchScope, DEFAULT_ENDPOINT};
//! use stac_protocol::SearchQuery;
//!
//! # async fn example() -> Result<(), cmr_client::CmrError> {
//! let client = CmrClient::new(DEFAULT_ENDPOINT)?;
//! let scope = SearchScope::Provider("USGS_EROS".to_string());
//! let params = client.convert_params(&scope, &SearchQuery::default()).await?;
//! let page = client.find_granules(&params).await?;
//! println!("{} of {} granules", page.granules.len(), page.hits);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod facets;
pub mod params;

// Re-export commonly used types
pub use client::{CmrClient, CmrFetch, CmrResponse, GranulePage, CLIENT_ID, DEFAULT_ENDPOINT};
pub use error::CmrError;
pub use facets::{extract_temporal_facets, facet_params, FacetNode, TemporalFacets};
pub use params::{encode_geometry, search_params, CmrParams, ParamValue, SearchScope};
