//! Issues and pull requests

use super::{Label, Milestone, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An issue or pull request, as returned by the issues endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
    /// `open` or `closed`
    pub state: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    /// `None` when the author's account was deleted
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` while the issue is open
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

/// Link from an issue to the pull request it represents
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PullRequestRef {
    #[serde(default)]
    pub url: Option<String>,
}

/// Whether an [`Issue`] is a plain issue or a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Issue,
    PullRequest,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issue => f.write_str("Issue"),
            Self::PullRequest => f.write_str("PR"),
        }
    }
}

impl Issue {
    /// A pull request carries a non-empty `pull_request.url`
    pub fn is_pull_request(&self) -> bool {
        self.pull_request
            .as_ref()
            .and_then(|pr| pr.url.as_deref())
            .is_some_and(|url| !url.is_empty())
    }

    pub fn kind(&self) -> IssueKind {
        if self.is_pull_request() {
            IssueKind::PullRequest
        } else {
            IssueKind::Issue
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.number, self.kind(), self.title)
    }
}
