//! Pagination strategy implementations

use super::types::{NextPage, PaginationState, Paginator};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};

// ============================================================================
// Link Header Pagination
// ============================================================================

/// Link header pagination (RFC 8288)
///
/// Extracts the next page URL from the Link header.
/// Format: `Link: <https://api.github.com/...?page=2>; rel="next", ...`
#[derive(Debug, Clone)]
pub struct LinkHeaderPaginator {
    /// Rel value to follow (default: "next")
    pub rel: String,
}

impl Default for LinkHeaderPaginator {
    fn default() -> Self {
        Self {
            rel: "next".to_string(),
        }
    }
}

impl LinkHeaderPaginator {
    /// Create a new link header paginator
    pub fn new(rel: impl Into<String>) -> Self {
        Self { rel: rel.into() }
    }
}

impl Paginator for LinkHeaderPaginator {
    fn next_url(&self, headers: &HeaderMap, state: &mut PaginationState) -> NextPage {
        match link_url(headers, &self.rel) {
            Some(url) => NextPage::Continue(url),
            None => {
                state.mark_done();
                NextPage::Done
            }
        }
    }
}

/// Read the `rel="next"` URL out of a response's Link header
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    link_url(headers, "next")
}

fn link_url(headers: &HeaderMap, rel: &str) -> Option<String> {
    headers
        .get(LINK)
        .and_then(|v| parse_link_header(&String::from_utf8_lossy(v.as_bytes()), rel))
}

// `<url>` followed by everything up to the next `<`: that entry's parameters.
static LINK_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^>]*)>([^<]*)").expect("link entry pattern is valid"));

/// Parse a Link header and extract the URL for the given rel
///
/// Entries may come in any order and may carry parameters besides `rel`.
/// A rel parameter holding several space-separated names matches any of them.
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    for entry in LINK_ENTRY.captures_iter(header) {
        let url = entry.get(1).map_or("", |m| m.as_str().trim());
        let params = entry.get(2).map_or("", |m| m.as_str());

        let matches = params
            .split([';', ','])
            .filter_map(|param| {
                let (key, value) = param.split_once('=')?;
                key.trim()
                    .eq_ignore_ascii_case("rel")
                    .then(|| value.trim().trim_matches('"').trim_matches('\''))
            })
            .any(|rels| rels.split_whitespace().any(|r| r == target_rel));

        if matches && !url.is_empty() {
            return Some(url.to_string());
        }
    }

    None
}

// ============================================================================
// Single Page
// ============================================================================

/// Stops after the first page, ignoring any Link header
#[derive(Debug, Clone, Default)]
pub struct SinglePage;

impl Paginator for SinglePage {
    fn next_url(&self, _headers: &HeaderMap, state: &mut PaginationState) -> NextPage {
        state.mark_done();
        NextPage::Done
    }
}
