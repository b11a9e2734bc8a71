//! Repository milestones

use super::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
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
    pub description: Option<String>,
    pub creator: Option<User>,
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
    /// `None` while the milestone is open
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Milestone {
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.number, self.state, self.title)?;
        if let Some(due) = self.due_on {
            write!(f, " (due {})", due.format("%Y-%m-%d"))?;
        }
        Ok(())
    }
}
