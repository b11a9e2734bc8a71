//! Auth configuration types
//!
//! Credentials are resolved per request, never cached, so a rotated token
//! takes effect on the next call.

use std::fmt;
use std::sync::Arc;

/// Default environment variable holding the username
pub const DEFAULT_USERNAME_ENV: &str = "GITHUB_USERNAME";

/// Default environment variable holding the personal access token
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// A username/token pair for HTTP Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login handle
    pub username: String,
    /// Personal access token (sent as the Basic password)
    pub token: String,
}

impl Credentials {
    /// Create credentials, or `None` if either part is empty
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Option<Self> {
        let username = username.into();
        let token = token.into();
        if username.is_empty() || token.is_empty() {
            return None;
        }
        Some(Self { username, token })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A source of credentials, queried on every request
pub trait CredentialProvider: Send + Sync {
    /// Current credentials, or `None` to send the request unauthenticated
    fn credentials(&self) -> Option<Credentials>;
}

/// Reads credentials from a pair of environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredentials {
    /// Variable holding the username
    pub username_var: String,
    /// Variable holding the token
    pub token_var: String,
}

impl EnvCredentials {
    pub fn new(username_var: impl Into<String>, token_var: impl Into<String>) -> Self {
        Self {
            username_var: username_var.into(),
            token_var: token_var.into(),
        }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME_ENV, DEFAULT_TOKEN_ENV)
    }
}

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> Option<Credentials> {
        let username = std::env::var(&self.username_var).unwrap_or_default();
        let token = std::env::var(&self.token_var).unwrap_or_default();
        Credentials::new(username, token)
    }
}

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// Fixed HTTP Basic credentials
    Basic(Credentials),

    /// HTTP Basic credentials read from the environment on every request
    Environment(EnvCredentials),

    /// Any other secret source
    Provider(Arc<dyn CredentialProvider>),
}

impl AuthConfig {
    /// Fixed credentials; falls back to no auth if either part is empty
    pub fn basic(username: impl Into<String>, token: impl Into<String>) -> Self {
        Credentials::new(username, token).map_or(Self::None, Self::Basic)
    }

    /// Credentials from the given environment variables
    pub fn environment(username_var: impl Into<String>, token_var: impl Into<String>) -> Self {
        Self::Environment(EnvCredentials::new(username_var, token_var))
    }

    /// Credentials from a custom provider
    pub fn provider(provider: impl CredentialProvider + 'static) -> Self {
        Self::Provider(Arc::new(provider))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic(creds) => f.debug_tuple("Basic").field(creds).finish(),
            Self::Environment(env) => f.debug_tuple("Environment").field(env).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_parts() {
        assert!(Credentials::new("octocat", "t0k3n").is_some());
        assert!(Credentials::new("", "t0k3n").is_none());
        assert!(Credentials::new("octocat", "").is_none());
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let creds = Credentials::new("octocat", "t0k3n").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("octocat"));
        assert!(!debug.contains("t0k3n"));
    }

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
    }

    #[test]
    fn test_basic_with_empty_token_is_none() {
        assert!(matches!(AuthConfig::basic("octocat", ""), AuthConfig::None));
    }
}
