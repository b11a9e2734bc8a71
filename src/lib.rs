//! # ghload
//!
//! A read-only client for the GitHub REST API with transparent pagination.
//!
//! ## Features
//!
//! - **Typed accessors**: issues, milestones, releases, teams, team members,
//!   notifications and users
//! - **Link header pagination**: follows `rel="next"` until the last page and
//!   concatenates the pages in server order
//! - **Partial results**: a failing page stops collection and hands back what
//!   was already fetched alongside the error
//! - **Optional Basic auth**: credentials from the environment, fixed values
//!   or any custom provider, resolved per request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ghload::github::{GithubClient, Query};
//!
//! #[tokio::main]
//! async fn main() -> ghload::Result<()> {
//!     let client = GithubClient::from_env()?;
//!
//!     let query = Query::new().param("state", "closed");
//!     let issues = client.list_issues("rust-lang/rust", Some(&query)).await?;
//!     for issue in &issues {
//!         println!("{issue}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ github::GithubClient   list_issues() ... get_user()       │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │ initial URL + element type
//! ┌─────────────────────────────┴─────────────────────────────┐
//! │ pagination::PageCollector   loop: GET → decode → append   │
//! │                             → Link rel="next"             │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │ one page
//! ┌─────────────────────────────┴─────────────────────────────┐
//! │ http::HttpClient   auth → GET → status check → JSON       │
//! └───────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Pagination engine
pub mod pagination;

/// Resource records
pub mod models;

/// Client configuration
pub mod config;

/// Typed resource accessors
pub mod github;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use github::{GithubClient, Query};
pub use pagination::{PageResult, Partial};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
