//! The page collector
//!
//! Follows a paginator from an initial URL and concatenates every page.

use super::strategies::LinkHeaderPaginator;
use super::types::{NextPage, PageResult, PaginationState, Paginator, Partial};
use crate::error::Error;
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Fetches a collection that may span several pages
///
/// Pages are fetched one at a time, each fully read before the next request.
#[derive(Debug, Clone, Default)]
pub struct PageCollector<P = LinkHeaderPaginator> {
    paginator: P,
    max_pages: Option<usize>,
}

impl PageCollector {
    /// Collector following `rel="next"` links with no page bound
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Paginator> PageCollector<P> {
    /// Collector using a custom paginator
    pub fn with_paginator(paginator: P) -> Self {
        Self {
            paginator,
            max_pages: None,
        }
    }

    /// Stop with [`Error::PageLimitExceeded`] once this many pages were read
    /// and the server still advertises more
    #[must_use]
    pub fn max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch every page starting at `url` and return the items in order
    ///
    /// On the first failure, returns the items gathered so far together
    /// with the error. A failed page contributes nothing.
    pub async fn collect<T: DeserializeOwned>(&self, client: &HttpClient, url: &str) -> PageResult<T> {
        let mut items = Vec::new();
        let mut state = PaginationState::new();
        let mut next = NextPage::Continue(url.to_string());

        while let NextPage::Continue(link) = next {
            if let Some(max_pages) = self.max_pages {
                if state.pages >= max_pages {
                    warn!("Page limit {} reached, next page was {}", max_pages, link);
                    return Err(Partial::new(items, Error::PageLimitExceeded { max_pages }));
                }
            }

            let page = match client.get_page::<T>(&link).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        "Pagination stopped on page {} after {} item(s): {}",
                        state.pages + 1,
                        state.total_fetched,
                        e
                    );
                    return Err(Partial::new(items, e));
                }
            };

            state.add_page(page.items.len());
            items.extend(page.items);
            next = self.paginator.next_url(&page.headers, &mut state);

            debug!(
                "Fetched page {} ({} item(s) total), next: {:?}",
                state.pages,
                state.total_fetched,
                next.url()
            );
        }

        Ok(items)
    }
}
