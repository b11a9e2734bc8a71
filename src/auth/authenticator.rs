//! Authenticator implementation
//!
//! Applies HTTP Basic credentials to outgoing requests.

use super::types::{AuthConfig, CredentialProvider, Credentials};
use reqwest::RequestBuilder;
use tracing::trace;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The auth configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Resolve the credentials for the next request
    pub fn credentials(&self) -> Option<Credentials> {
        match &self.config {
            AuthConfig::None => None,
            AuthConfig::Basic(creds) => Some(creds.clone()),
            AuthConfig::Environment(env) => env.credentials(),
            AuthConfig::Provider(provider) => provider.credentials(),
        }
    }

    /// Apply authentication to a request builder
    ///
    /// Missing or partial credentials leave the request unauthenticated.
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self.credentials() {
            Some(Credentials { username, token }) => {
                trace!(%username, "attaching basic auth");
                req.basic_auth(username, Some(token))
            }
            None => req,
        }
    }
}
