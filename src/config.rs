//! Client configuration
//!
//! Loaded from YAML or assembled with [`ClientConfig::builder`]. Every field
//! has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! api_url: https://github.example.com/api/v3
//! timeout_secs: 30
//! max_pages: 50
//! auth:
//!   type: env
//!   username_env: GHE_USER
//!   token_env: GHE_TOKEN
//! ```

use crate::auth::{AuthConfig, DEFAULT_TOKEN_ENV, DEFAULT_USERNAME_ENV};
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// ============================================================================
// Top-Level Client Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL every resource path is joined onto
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Page bound for paginated calls (unbounded by default)
    #[serde(default)]
    pub max_pages: Option<usize>,

    /// Authentication
    #[serde(default)]
    pub auth: AuthDefinition,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: None,
            timeout_secs: None,
            max_pages: None,
            auth: AuthDefinition::default(),
        }
    }
}

// ============================================================================
// Auth Definition (in YAML)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthDefinition {
    /// Never authenticate
    None,

    /// Fixed username and token
    Basic { username: String, token: String },

    /// Username and token read from the environment on every request
    Env {
        #[serde(default = "default_username_env")]
        username_env: String,
        #[serde(default = "default_token_env")]
        token_env: String,
    },
}

fn default_username_env() -> String {
    DEFAULT_USERNAME_ENV.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

impl Default for AuthDefinition {
    fn default() -> Self {
        Self::Env {
            username_env: default_username_env(),
            token_env: default_token_env(),
        }
    }
}

impl From<&AuthDefinition> for AuthConfig {
    fn from(def: &AuthDefinition) -> Self {
        match def {
            AuthDefinition::None => AuthConfig::None,
            AuthDefinition::Basic { username, token } => AuthConfig::basic(username, token),
            AuthDefinition::Env {
                username_env,
                token_env,
            } => AuthConfig::environment(username_env, token_env),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check that the API URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "api_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.max_pages == Some(0) {
            return Err(Error::config("max_pages must be at least 1"));
        }
        Ok(())
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().auth(AuthConfig::from(&self.auth));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    /// Bound paginated calls to this many pages
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    /// Set authentication
    pub fn auth(mut self, auth: AuthDefinition) -> Self {
        self.config.auth = auth;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
