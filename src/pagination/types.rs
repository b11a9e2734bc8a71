//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by the collector.

use crate::error::Error;
use reqwest::header::HeaderMap;
use std::fmt;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this URL next
    Continue(String),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// The next URL, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Continue(url) => Some(url),
            Self::Done => None,
        }
    }
}

/// Tracks pagination progress during one collection
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: usize,
    /// Total items fetched so far
    pub total_fetched: usize,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fetched page
    pub fn add_page(&mut self, items: usize) {
        self.pages += 1;
        self.total_fetched += items;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Inspect a page's response headers and decide where to go next
    fn next_url(&self, headers: &HeaderMap, state: &mut PaginationState) -> NextPage;
}

/// Items collected before a pagination failure, plus the failure
///
/// The items are well-formed but must not be taken as the whole collection.
pub struct Partial<T> {
    items: Vec<T>,
    error: Error,
}

impl<T> Partial<T> {
    /// Wrap the accumulated items and the error that stopped collection
    pub fn new(items: Vec<T>, error: Error) -> Self {
        Self { items, error }
    }

    /// Items fetched before the failure
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The error that stopped collection
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Split into items and error
    pub fn into_parts(self) -> (Vec<T>, Error) {
        (self.items, self.error)
    }
}

impl<T> fmt::Debug for Partial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial")
            .field("items", &self.items.len())
            .field("error", &self.error)
            .finish()
    }
}

impl<T> fmt::Display for Partial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (after {} item(s))", self.error, self.items.len())
    }
}

impl<T> std::error::Error for Partial<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Partial<T>> for Error {
    fn from(partial: Partial<T>) -> Self {
        partial.error
    }
}

/// Outcome of a paginated fetch
pub type PageResult<T> = std::result::Result<Vec<T>, Partial<T>>;
