//! Hyperlinks and page-navigation link arithmetic.

use serde::{Deserialize, Serialize};

/// A result page shorter than this is treated as the last page, and the
/// `next` link is suppressed. The threshold is a fixed constant, not
/// derived from the requested page size.
pub const SHORT_PAGE_THRESHOLD: usize = 10;

/// A hyperlink to a related resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// The relationship type (e.g., "self", "root", "prev", "next").
    pub rel: String,

    /// The URI of the linked resource.
    pub href: String,

    /// The media type of the linked resource.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// A human-readable title for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// Create a new link with required fields.
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            type_: None,
            title: None,
        }
    }

    /// Set the media type.
    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Render an application URL from a base, a path and query pairs.
///
/// Query values are emitted as-is; callers are expected to pass values
/// that are legal in a query string.
pub fn app_url(base_url: &str, path: &str, query: &[(String, String)]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut url = format!("{}{}", base, path);

    if !query.is_empty() {
        let rendered: Vec<String> = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        url.push('?');
        url.push_str(&rendered.join("&"));
    }

    url
}

/// Replace (or append) the `page_num` key in a set of query pairs.
fn with_page(query: &[(String, String)], page: u32) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .filter(|(key, _)| key != "page_num")
        .cloned()
        .collect();
    pairs.push(("page_num".to_string(), page.to_string()));
    pairs
}

/// Build navigation links for a result page.
///
/// Always emits `self` and `root`. A `next` link pointing at
/// `current_page + 1` is emitted unless the page is short (see
/// [`SHORT_PAGE_THRESHOLD`]); a `prev` link pointing at
/// `current_page - 1` is inserted before the final link when
/// `current_page > 1`.
pub fn page_links(
    base_url: &str,
    path: &str,
    query: &[(String, String)],
    current_page: u32,
    result_count: usize,
) -> Vec<Link> {
    let mut links = vec![
        Link::new("self", app_url(base_url, path, query)),
        Link::new("root", app_url(base_url, "/", &[])),
        Link::new(
            "next",
            app_url(base_url, path, &with_page(query, current_page + 1)),
        ),
    ];

    if current_page > 1 {
        let prev = Link::new(
            "prev",
            app_url(base_url, path, &with_page(query, current_page - 1)),
        );
        links.insert(links.len() - 1, prev);
    }

    if result_count < SHORT_PAGE_THRESHOLD {
        links.pop();
    }

    links
}
