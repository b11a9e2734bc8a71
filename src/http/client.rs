//! HTTP client for read-only API calls
//!
//! Provides the transport every accessor goes through:
//! - Authentication applied per request
//! - Status classification (anything above 299 is a failure)
//! - Bounded body excerpts on failure
//! - JSON decoding into caller-supplied types

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Largest response body excerpt kept in an [`Error::HttpStatus`]
pub const MAX_ERROR_BODY: usize = 1024;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, none by default
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
    /// Authentication
    pub auth: AuthConfig,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("ghload/{}", env!("CARGO_PKG_VERSION")),
            auth: AuthConfig::None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set authentication
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// One decoded page of a collection
#[derive(Debug)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Response headers, kept for pagination metadata
    pub headers: HeaderMap,
}

/// HTTP client performing authenticated GET requests
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            authenticator: Authenticator::new(config.auth),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the authenticator
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Make a GET request and classify the response
    ///
    /// Any status above 299 is returned as [`Error::HttpStatus`]; the body
    /// is read up to [`MAX_ERROR_BODY`] bytes and the rest discarded.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let req = self.authenticator.apply(self.client.get(url));

        let response = req.send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            Error::Http(e)
        })?;

        let status = response.status();
        if status.as_u16() > 299 {
            let body = body_excerpt(response).await;
            warn!("GET {} returned {}", url, status);
            return Err(Error::http_status(status.as_u16(), status.to_string(), body));
        }

        debug!("GET {} -> {}", url, status);
        Ok(response)
    }

    /// Make a GET request and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        decode_body(response).await
    }

    /// Make a GET request and decode the body as one page of `T`
    pub async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>> {
        let response = self.get(url).await?;
        let headers = response.headers().clone();
        let items: Vec<T> = decode_body(response).await?;
        Ok(Page { items, headers })
    }
}

/// Read the whole body, then decode it
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Read at most [`MAX_ERROR_BODY`] bytes of a failed response
async fn body_excerpt(mut response: Response) -> String {
    let mut buf = Vec::with_capacity(MAX_ERROR_BODY);
    while buf.len() < MAX_ERROR_BODY {
        match response.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                debug!("error body unreadable: {}", e);
                break;
            }
        }
    }
    buf.truncate(MAX_ERROR_BODY);
    String::from_utf8_lossy(&buf).into_owned()
}
