//! HTTP client module
//!
//! One authenticated GET per call, classified as success (status 100-299)
//! or failure. No retries and no rate limiting.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, Page, MAX_ERROR_BODY};

#[cfg(test)]
mod tests;
