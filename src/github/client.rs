//! Typed resource accessors

use super::query::{resource_url, Query};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Issue, Milestone, Notification, Release, Team, User};
use crate::pagination::{PageCollector, PageResult};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read-only GitHub REST client
///
/// Collection accessors follow `rel="next"` links until the last page and
/// return `Err(Partial)` with whatever was fetched if a page fails.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    collector: PageCollector,
}

impl GithubClient {
    /// Build a client from a validated config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: HttpClient::with_config(config.http_config())?,
            api_url: config.api_url.clone(),
            collector: PageCollector::new().max_pages(config.max_pages),
        })
    }

    /// Public API, credentials from `GITHUB_USERNAME` / `GITHUB_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::default())
    }

    /// The underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Build a resource URL below the API base
    pub fn url(&self, segments: &[&str], query: Option<&Query>) -> String {
        resource_url(&self.api_url, segments, query)
    }

    /// Fetch every page of an arbitrary collection
    pub async fn list<T: DeserializeOwned>(&self, url: &str) -> PageResult<T> {
        debug!("Listing {}", url);
        self.collector.collect(&self.http, url).await
    }

    /// Issues and pull requests of `owner/repo`
    pub async fn list_issues(&self, repo: &str, query: Option<&Query>) -> PageResult<Issue> {
        self.list(&self.url(&["repos", repo, "issues"], query)).await
    }

    pub async fn list_milestones(
        &self,
        repo: &str,
        query: Option<&Query>,
    ) -> PageResult<Milestone> {
        self.list(&self.url(&["repos", repo, "milestones"], query))
            .await
    }

    pub async fn list_releases(&self, repo: &str) -> PageResult<Release> {
        self.list(&self.url(&["repos", repo, "releases"], None)).await
    }

    /// Teams of an organization
    pub async fn list_teams(&self, org: &str) -> PageResult<Team> {
        self.list(&self.url(&["orgs", org, "teams"], None)).await
    }

    /// Members of a team, by numeric team id
    pub async fn list_team_members(&self, team_id: u64) -> PageResult<User> {
        let id = team_id.to_string();
        self.list(&self.url(&["teams", id.as_str(), "members"], None)).await
    }

    /// Notification threads of the authenticated user
    pub async fn list_notifications(&self) -> PageResult<Notification> {
        self.list(&self.url(&["notifications"], None)).await
    }

    /// A single user; never paginated
    pub async fn get_user(&self, login: &str) -> Result<User> {
        self.http.get_json(&self.url(&["users", login], None)).await
    }

    /// The user's public email, if they published one
    pub async fn get_user_email(&self, login: &str) -> Result<Option<String>> {
        let user = self.get_user(login).await?;
        Ok(user.email.filter(|email| !email.is_empty()))
    }
}
