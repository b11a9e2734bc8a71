//! GitHub resource accessors
//!
//! Thin typed entry points over the pagination engine: each one builds the
//! resource URL, fixes the element type and hands off to [`PageCollector`].
//!
//! [`PageCollector`]: crate::pagination::PageCollector

mod client;
mod query;

pub use client::GithubClient;
pub use query::{join_path, resource_url, Query};
