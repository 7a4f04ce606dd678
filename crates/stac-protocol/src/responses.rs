//! Response envelopes handed to the HTTP layer.
//!
//! Catalog entries stay opaque (`serde_json::Value`); the envelopes add
//! the identification, link and count fields the search interface
//! requires. Constructing these typed shapes and serializing them is what
//! enforces the response contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conformance;
use crate::links::Link;

/// The collection-search response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionList {
    /// The provider this listing is scoped to.
    pub id: String,

    /// Version of the search interface specification.
    pub stac_version: String,

    pub description: String,

    pub license: String,

    /// Navigation links for this page of results.
    pub links: Vec<Link>,

    /// The catalog entries on this page.
    pub collections: Vec<Value>,
}

impl CollectionList {
    /// Create a listing for a provider's collections.
    pub fn new(
        provider: impl Into<String>,
        stac_version: impl Into<String>,
        links: Vec<Link>,
        collections: Vec<Value>,
    ) -> Self {
        let provider = provider.into();
        Self {
            description: format!("All collections provided by {}", provider),
            id: provider,
            stac_version: stac_version.into(),
            license: "not-provided".to_string(),
            links,
            collections,
        }
    }
}

/// The item-search response envelope.
///
/// `number_matched` is the catalog's authoritative total hit count and is
/// independent of `features.len()`, which only reflects the current page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,

    pub stac_version: String,

    /// The catalog entries on this page.
    pub features: Vec<Value>,

    /// Navigation links for this page of results.
    pub links: Vec<Link>,

    /// Total matches across all pages.
    #[serde(rename = "numberMatched")]
    pub number_matched: u64,

    /// Matches on this page.
    #[serde(rename = "numberReturned")]
    pub number_returned: usize,
}

impl FeatureCollection {
    /// Create an item page with its authoritative total count.
    pub fn new(
        stac_version: impl Into<String>,
        features: Vec<Value>,
        hits: u64,
        links: Vec<Link>,
    ) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            stac_version: stac_version.into(),
            number_matched: hits,
            number_returned: features.len(),
            features,
            links,
        }
    }
}

/// Conformance declaration response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conformance {
    #[serde(rename = "conformsTo")]
    pub conforms_to: Vec<String>,
}

impl Conformance {
    /// The conformance classes this implementation declares.
    pub fn current() -> Self {
        Self {
            conforms_to: vec![
                conformance::CORE.to_string(),
                conformance::OAS30.to_string(),
                conformance::HTML.to_string(),
                conformance::GEOJSON.to_string(),
            ],
        }
    }

    /// Check if a conformance class is declared.
    pub fn contains(&self, class: &str) -> bool {
        self.conforms_to.iter().any(|c| c == class)
    }
}
