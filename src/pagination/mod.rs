//! Pagination module
//!
//! Supports: Link header (`rel="next"`) and single page
//!
//! # Overview
//!
//! The [`PageCollector`] repeatedly fetches pages through the HTTP client,
//! decodes each into a `Vec<T>`, appends it to one accumulator and asks a
//! [`Paginator`] where the next page lives. Collection stops when the
//! paginator reports no further page or on the first error; in the latter
//! case the caller gets the accumulated items back inside a [`Partial`].

mod collector;
mod strategies;
mod types;

pub use collector::PageCollector;
pub use strategies::{next_link, parse_link_header, LinkHeaderPaginator, SinglePage};
pub use types::{NextPage, PageResult, PaginationState, Paginator, Partial};
