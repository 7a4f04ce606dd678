//! Temporal availability facets.
//!
//! The catalog reports granule availability as a nested facet tree with a
//! fixed shape: root → "Temporal" → "Year" → year nodes → "Month" →
//! month nodes → "Day" → day nodes. Month and day titles are two-digit,
//! zero-padded strings and are matched exactly, never normalized. The
//! walker flattens one level of that tree into a presence map; which
//! level depends on how specific the request was.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::{CmrClient, GRANULE_RESOURCE};
use crate::error::CmrError;
use crate::params::CmrParams;

/// One node of the catalog's facet tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetNode {
    /// Node label; the root node may omit it.
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FacetNode>>,
}

impl FacetNode {
    /// Find a direct child by exact title.
    fn child(&self, title: &str) -> Option<&FacetNode> {
        self.children
            .as_deref()
            .and_then(|children| children.iter().find(|c| c.title == title))
    }
}

/// Flattened availability facets. Exactly one level is populated,
/// matching the specificity of the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TemporalFacets {
    #[serde(rename = "years")]
    Years(BTreeMap<String, bool>),

    #[serde(rename = "months")]
    Months(BTreeMap<String, bool>),

    #[serde(rename = "days")]
    Days(BTreeMap<String, bool>),
}

/// Build the parameter set for a facet-only granule request.
///
/// `page_size = 0` suppresses the entry payload; `include_facets = "v2"`
/// selects the nested facet format. Each temporal level is only added
/// when its less-specific ancestor is present.
pub fn facet_params(year: Option<&str>, month: Option<&str>, day: Option<&str>) -> CmrParams {
    let mut params = CmrParams::new();
    params.insert("page_size", 0_u64);
    params.insert("include_facets", "v2");

    if let Some(year) = year {
        params.insert("temporal_facet[0][year]", year);
        if let Some(month) = month {
            params.insert("temporal_facet[0][month]", month);
            if let Some(day) = day {
                params.insert("temporal_facet[0][day]", day);
            }
        }
    }

    params
}

/// Map the titles of a node's children to presence.
fn presence_map(node: Option<&FacetNode>) -> BTreeMap<String, bool> {
    node.and_then(|n| n.children.as_deref())
        .map(|children| {
            children
                .iter()
                .map(|child| (child.title.clone(), true))
                .collect()
        })
        .unwrap_or_default()
}

/// Flatten the facet tree at the level selected by `year`/`month`.
///
/// Missing structure (an unknown year, a year without months) yields an
/// empty map rather than an error.
pub fn extract_temporal_facets(
    root: &FacetNode,
    year: Option<&str>,
    month: Option<&str>,
) -> TemporalFacets {
    let year_list = root.child("Temporal").and_then(|t| t.child("Year"));

    match (year, month) {
        (None, _) => TemporalFacets::Years(presence_map(year_list)),
        (Some(year), None) => {
            let months = year_list
                .and_then(|list| list.child(year))
                .and_then(|node| node.child("Month"));
            TemporalFacets::Months(presence_map(months))
        }
        (Some(year), Some(month)) => {
            let days = year_list
                .and_then(|list| list.child(year))
                .and_then(|node| node.child("Month"))
                .and_then(|node| node.child(month))
                .and_then(|node| node.child("Day"));
            TemporalFacets::Days(presence_map(days))
        }
    }
}

impl CmrClient {
    /// Fetch and flatten temporal availability facets for a granule
    /// search.
    ///
    /// Issues one facet-only request (the caller's params plus
    /// [`facet_params`]) and walks the returned tree.
    pub async fn granule_temporal_facets(
        &self,
        params: &CmrParams,
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<TemporalFacets, CmrError> {
        let mut request = params.clone();
        request.merge(facet_params(year, month, day));

        let response = self.search(GRANULE_RESOURCE, &request).await?;
        let facets = response
            .body
            .get("feed")
            .and_then(|feed| feed.get("facets"))
            .cloned()
            .ok_or_else(|| {
                CmrError::UnexpectedResponse("response body has no facet tree".to_string())
            })?;

        let root: FacetNode = serde_json::from_value(facets).map_err(|e| {
            CmrError::UnexpectedResponse(format!("malformed facet tree: {}", e))
        })?;

        Ok(extract_temporal_facets(&root, year, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    fn leaf(title: &str) -> FacetNode {
        FacetNode {
            title: title.to_string(),
            children: None,
        }
    }

    fn node(title: &str, children: Vec<FacetNode>) -> FacetNode {
        FacetNode {
            title: title.to_string(),
            children: Some(children),
        }
    }

    /// Tree with years 2001/2002, months 05/06 under 2001, and days
    /// 20/22/23 under 2001-05.
    fn sample_tree() -> FacetNode {
        node(
            "Browse Granules",
            vec![node(
                "Temporal",
                vec![node(
                    "Year",
                    vec![
                        node(
                            "2001",
                            vec![node(
                                "Month",
                                vec![
                                    node(
                                        "05",
                                        vec![node(
                                            "Day",
                                            vec![leaf("20"), leaf("22"), leaf("23")],
                                        )],
                                    ),
                                    leaf("06"),
                                ],
                            )],
                        ),
                        leaf("2002"),
                    ],
                )],
            )],
        )
    }

    #[test]
    fn test_facet_params_default() {
        let params = facet_params(None, None, None);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("page_size"), Some(&ParamValue::Number(0)));
        assert_eq!(
            params.get("include_facets"),
            Some(&ParamValue::Text("v2".to_string()))
        );
    }

    #[test]
    fn test_facet_params_year() {
        let params = facet_params(Some("2000"), None, None);
        assert_eq!(
            params.get("temporal_facet[0][year]"),
            Some(&ParamValue::Text("2000".to_string()))
        );
        assert_eq!(params.get("temporal_facet[0][month]"), None);
    }

    #[test]
    fn test_facet_params_year_month() {
        let params = facet_params(Some("2000"), Some("05"), None);
        assert_eq!(
            params.get("temporal_facet[0][year]"),
            Some(&ParamValue::Text("2000".to_string()))
        );
        assert_eq!(
            params.get("temporal_facet[0][month]"),
            Some(&ParamValue::Text("05".to_string()))
        );
    }

    #[test]
    fn test_facet_params_year_month_day() {
        let params = facet_params(Some("2000"), Some("05"), Some("20"));
        assert_eq!(
            params.get("temporal_facet[0][day]"),
            Some(&ParamValue::Text("20".to_string()))
        );
    }

    #[test]
    fn test_facet_params_month_without_year_is_ignored() {
        let params = facet_params(None, Some("05"), Some("20"));
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("temporal_facet[0][month]"), None);
    }

    #[test]
    fn test_extract_years() {
        let facets = extract_temporal_facets(&sample_tree(), None, None);

        match facets {
            TemporalFacets::Years(years) => {
                assert_eq!(years.len(), 2);
                assert!(years.contains_key("2001"));
                assert!(years.contains_key("2002"));
            }
            other => panic!("expected years, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_months() {
        let facets = extract_temporal_facets(&sample_tree(), Some("2001"), None);

        match facets {
            TemporalFacets::Months(months) => {
                assert_eq!(months.len(), 2);
                assert!(months.contains_key("05"));
                assert!(months.contains_key("06"));
            }
            other => panic!("expected months, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_days() {
        let facets = extract_temporal_facets(&sample_tree(), Some("2001"), Some("05"));

        match facets {
            TemporalFacets::Days(days) => {
                assert_eq!(days.len(), 3);
                assert!(days.contains_key("20"));
                assert!(days.contains_key("22"));
                assert!(days.contains_key("23"));
            }
            other => panic!("expected days, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_missing_year_yields_empty_map() {
        let facets = extract_temporal_facets(&sample_tree(), Some("1999"), None);
        assert_eq!(facets, TemporalFacets::Months(BTreeMap::new()));
    }

    #[test]
    fn test_extract_year_without_months_yields_empty_map() {
        // 2002 is a bare year node with no Month child
        let facets = extract_temporal_facets(&sample_tree(), Some("2002"), None);
        assert_eq!(facets, TemporalFacets::Months(BTreeMap::new()));
    }

    #[test]
    fn test_extract_month_without_days_yields_empty_map() {
        let facets = extract_temporal_facets(&sample_tree(), Some("2001"), Some("06"));
        assert_eq!(facets, TemporalFacets::Days(BTreeMap::new()));
    }

    #[test]
    fn test_facets_serialize_with_single_level() {
        let facets = extract_temporal_facets(&sample_tree(), None, None);
        let json = serde_json::to_string(&facets).unwrap();

        assert!(json.contains("\"years\""));
        assert!(!json.contains("\"months\""));
        assert!(!json.contains("\"days\""));
    }

    #[test]
    fn test_facet_tree_parses_catalog_shape() {
        // the catalog body carries extra fields the walker does not use
        let value = serde_json::json!({
            "title": "Browse Granules",
            "has_children": true,
            "children": [{
                "title": "Temporal",
                "children": [{
                    "title": "Year",
                    "children": [{ "title": "2001" }, { "title": "2002" }]
                }]
            }]
        });

        let root: FacetNode = serde_json::from_value(value).unwrap();
        let facets = extract_temporal_facets(&root, None, None);
        assert_eq!(
            facets,
            TemporalFacets::Years(BTreeMap::from([
                ("2001".to_string(), true),
                ("2002".to_string(), true),
            ]))
        );
    }
}
