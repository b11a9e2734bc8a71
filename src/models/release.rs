//! Releases and their assets

use super::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub created_at: DateTime<Utc>,
    /// `None` for drafts
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub author: User,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag_name)?;
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            write!(f, " {name}")?;
        }
        if self.draft {
            f.write_str(" (draft)")?;
        } else if self.prerelease {
            f.write_str(" (prerelease)")?;
        }
        write!(f, " [{} asset(s)]", self.assets.len())
    }
}

/// A file attached to a release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub browser_download_url: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    /// `uploaded` once the upload finished
    pub state: String,
    pub content_type: String,
    pub size: u64,
    #[serde(default)]
    pub download_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub uploader: Option<User>,
}
