//! HTTP request handlers for the STAC API.

pub mod availability;
pub mod collections;
pub mod conformance;
pub mod health;
pub mod items;

use std::collections::BTreeMap;

/// Turn the raw query map into owned pairs for link rendering.
pub(crate) fn query_pairs(raw: &BTreeMap<String, String>) -> Vec<(String, String)> {
    raw.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
